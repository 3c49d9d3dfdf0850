//! Fintrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the fintrack backend.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod goals;
pub mod transactions;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
