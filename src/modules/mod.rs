pub mod media;
pub mod notification;
pub mod program;
pub mod season;
