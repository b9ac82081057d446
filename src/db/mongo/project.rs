//! MongoDB ProjectRepository implementation.

use futures_util::TryStreamExt;
use tracing::debug;

use super::connection::MongoDatabase;
use super::document::{ProjectDocument, filter_for};
use crate::db::{DbError, DbResult, ProjectQuery, ProjectRecord, ProjectRepository};

/// Collection-backed project repository.
pub struct MongoProjectRepository<'a> {
    pub(crate) db: &'a MongoDatabase,
}

impl<'a> ProjectRepository for MongoProjectRepository<'a> {
    async fn list(&self, query: &ProjectQuery) -> DbResult<Vec<ProjectRecord>> {
        let filter = filter_for(query);
        debug!(%filter, "finding projects");

        let cursor = self
            .db
            .collection()
            .find(filter)
            .await
            .map_err(|e| DbError::Query {
                message: e.to_string(),
            })?;

        let documents: Vec<ProjectDocument> =
            cursor.try_collect().await.map_err(|e| DbError::Decode {
                message: e.to_string(),
            })?;

        documents.into_iter().map(ProjectRecord::try_from).collect()
    }

    async fn insert(&self, record: &ProjectRecord) -> DbResult<()> {
        let result = self
            .db
            .collection()
            .insert_one(ProjectDocument::from(record))
            .await
            .map_err(|e| DbError::Insert {
                message: e.to_string(),
            })?;

        debug!(name = %record.name, id = %result.inserted_id, "inserted project");
        Ok(())
    }
}
