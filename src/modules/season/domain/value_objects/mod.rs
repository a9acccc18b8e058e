pub mod reference_time;
pub mod season_enum;
