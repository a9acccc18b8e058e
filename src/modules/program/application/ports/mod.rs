pub mod clock;
pub mod image_validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use image_validator::{ImageCheck, ImageValidationService};
