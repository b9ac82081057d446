//! In-memory database handle.

use std::sync::Mutex;

use tokio::sync::RwLock;

use super::project::MemoryProjectRepository;
use crate::db::{Database, DbError, DbResult, ProjectRecord};

/// Failure injected into a [`MemoryDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Store unreachable: ping, list and insert all fail.
    Unavailable,
    /// Listing reads records but cannot decode them; ping and insert still work.
    Decode,
}

/// In-memory database implementation.
///
/// A [`Failure`] can be injected so tests exercise the store-failure paths.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    pub(crate) records: RwLock<Vec<ProjectRecord>>,
    failure: Mutex<Option<Failure>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject `failure` into every subsequent operation, or clear it with `None`.
    pub fn set_failure(&self, failure: Option<Failure>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = failure;
    }

    /// Shorthand for [`Failure::Unavailable`] (`true`) or no failure (`false`).
    pub fn set_failing(&self, failing: bool) {
        self.set_failure(failing.then_some(Failure::Unavailable));
    }

    pub(crate) fn failure(&self) -> Option<Failure> {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Database for MemoryDatabase {
    type Projects<'a> = MemoryProjectRepository<'a>;

    async fn ping(&self) -> DbResult<()> {
        if self.failure() == Some(Failure::Unavailable) {
            return Err(DbError::Connection {
                message: "in-memory store is unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn projects(&self) -> Self::Projects<'_> {
        MemoryProjectRepository { db: self }
    }
}
