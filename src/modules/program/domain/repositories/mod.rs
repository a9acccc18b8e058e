mod program_repository;

pub use program_repository::*;
