//! In-process implementation of the database traits.
//!
//! Holds records in a vector in insertion order. Used by tests and by
//! `catalog-api --store memory` for local runs without MongoDB.

mod connection;
mod project;


pub use connection::{Failure, MemoryDatabase};
pub use project::MemoryProjectRepository;
