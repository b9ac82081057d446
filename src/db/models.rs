//! Domain models for the project catalog.
//!
//! These models are storage-agnostic; each store maps them onto its own
//! document shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Programming language a project is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Rust,
    Python,
    Typescript,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 4] = [
        Language::Go,
        Language::Rust,
        Language::Python,
        Language::Typescript,
    ];

    /// Wire and storage name of the language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Python => "python",
            Language::Typescript => "typescript",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "go" => Ok(Language::Go),
            "rust" => Ok(Language::Rust),
            "python" => Ok(Language::Python),
            "typescript" => Ok(Language::Typescript),
            _ => Err(format!(
                "Unknown language: {} (expected one of go, rust, python, typescript)",
                s
            )),
        }
    }
}

/// A single project with a URL and the language it was written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Set by the server when the record is inserted.
    pub added: DateTime<Utc>,
    pub language: Language,
    pub url: String,
}

/// A stored project, addressed by name.
///
/// Names are not unique: inserting the same name twice stores two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub project: Project,
}

/// Filter for listing project records.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    /// Only return records with this language (equality on `project.language`).
    pub language: Option<Language>,
}

impl ProjectQuery {
    /// Whether `record` passes this filter.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.language
            .is_none_or(|language| record.project.language == language)
    }
}
