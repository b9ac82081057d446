//! In-memory ProjectRepository implementation.

use super::connection::{Failure, MemoryDatabase};
use crate::db::{DbError, DbResult, ProjectQuery, ProjectRecord, ProjectRepository};

/// Vector-backed project repository.
pub struct MemoryProjectRepository<'a> {
    pub(crate) db: &'a MemoryDatabase,
}

impl<'a> ProjectRepository for MemoryProjectRepository<'a> {
    async fn list(&self, query: &ProjectQuery) -> DbResult<Vec<ProjectRecord>> {
        match self.db.failure() {
            Some(Failure::Unavailable) => {
                return Err(DbError::Query {
                    message: "in-memory store is unavailable".to_string(),
                });
            }
            Some(Failure::Decode) => {
                return Err(DbError::Decode {
                    message: "in-memory store returned undecodable records".to_string(),
                });
            }
            None => {}
        }

        let records = self.db.records.read().await;
        Ok(records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }

    async fn insert(&self, record: &ProjectRecord) -> DbResult<()> {
        if self.db.failure() == Some(Failure::Unavailable) {
            return Err(DbError::Insert {
                message: "in-memory store is unavailable".to_string(),
            });
        }

        self.db.records.write().await.push(record.clone());
        Ok(())
    }
}
