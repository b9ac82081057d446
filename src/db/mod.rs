//! Storage abstraction for project records.
//!
//! The API layer only talks to the traits in `repository`, so the document
//! store behind them can be swapped (MongoDB in production, in-memory in tests).
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Language, Project, ProjectRecord)
//! - `repository`: Trait definitions for data access
//! - `memory`: In-process store
//! - `mongo`: MongoDB-backed store

mod error;
pub mod memory;
mod models;
pub mod mongo;
mod repository;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use memory::{Failure, MemoryDatabase};
pub use models::*;
pub use mongo::MongoDatabase;
pub use repository::*;
