//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the API layer.
//!
//! Methods return `Send` futures so that axum handlers generic over
//! [`Database`] stay `Send`.

use std::future::Future;

use crate::db::{DbResult, ProjectQuery, ProjectRecord};

/// Repository for ProjectRecord operations.
pub trait ProjectRepository: Send + Sync {
    /// List records matching `query`, in whatever order the store yields them.
    fn list(&self, query: &ProjectQuery)
    -> impl Future<Output = DbResult<Vec<ProjectRecord>>> + Send;

    /// Insert a record unconditionally. Existing records with the same name are kept.
    fn insert(&self, record: &ProjectRecord) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Projects<'a>: ProjectRepository
    where
        Self: 'a;

    /// Check that the store is reachable.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;
}
