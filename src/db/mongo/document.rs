//! BSON document shape for stored projects.
//!
//! Kept separate from the domain models so `added` is stored as a native
//! BSON datetime while the API keeps serializing it as RFC 3339.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult, Language, Project, ProjectQuery, ProjectRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub name: String,
    pub project: ProjectFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFields {
    pub added: bson::DateTime,
    pub language: Language,
    pub url: String,
}

impl From<&ProjectRecord> for ProjectDocument {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            name: record.name.clone(),
            project: ProjectFields {
                added: bson::DateTime::from_millis(record.project.added.timestamp_millis()),
                language: record.project.language,
                url: record.project.url.clone(),
            },
        }
    }
}

impl TryFrom<ProjectDocument> for ProjectRecord {
    type Error = DbError;

    fn try_from(doc: ProjectDocument) -> DbResult<Self> {
        let millis = doc.project.added.timestamp_millis();
        let added = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| DbError::Decode {
            message: format!("project '{}' has out-of-range added time {}", doc.name, millis),
        })?;

        Ok(ProjectRecord {
            name: doc.name,
            project: Project {
                added,
                language: doc.project.language,
                url: doc.project.url,
            },
        })
    }
}

/// Build the find filter for a query. An empty document matches everything.
pub fn filter_for(query: &ProjectQuery) -> Document {
    match query.language {
        Some(language) => doc! { "project.language": language.as_str() },
        None => doc! {},
    }
}
