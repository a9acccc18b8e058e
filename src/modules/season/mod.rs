pub mod domain;

pub use domain::{reference_time, ReferenceDateTime, Season, SeasonBucket, REFERENCE_TZ};
