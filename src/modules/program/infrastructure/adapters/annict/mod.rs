//! Annict provider adapter
//!
//! GraphQL client, response models and the mapping onto domain programs.

pub mod client;
pub mod mapper;
pub mod models;
pub mod queries;
pub mod repository;

pub use client::{AnnictApi, AnnictClient};
pub use mapper::AnnictMapper;
pub use repository::AnnictProgramRepository;
