pub mod value_objects;

// Re-exports for easy access
pub use value_objects::reference_time::{self, ReferenceDateTime, REFERENCE_TZ};
pub use value_objects::season_enum::{Season, SeasonBucket};
