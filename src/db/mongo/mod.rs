//! MongoDB implementation of the database traits.
//!
//! Records are stored one document per insert in a single collection:
//! `{ _id, name, project: { added, language, url } }`.

mod connection;
mod document;
mod project;

#[cfg(all(test, feature = "mongodb-tests"))]
mod project_test;

pub use connection::{DEFAULT_COLLECTION, DEFAULT_DATABASE, MongoDatabase};
pub use project::MongoProjectRepository;
