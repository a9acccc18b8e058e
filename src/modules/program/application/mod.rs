pub mod ports;
pub mod use_cases;

pub use use_cases::get_annict_info::{AnnictInfoGetter, AnnictInfoOutput, GetAnnictInfoQuery};
