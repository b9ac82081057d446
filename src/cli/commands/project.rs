//! Project CLI commands
//!
//! List and put projects via the REST API.

use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use crate::db::{Language, Project, ProjectRecord};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Deserialize)]
struct ListProjectsResponse {
    body: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
struct PutProjectResponse {
    body: Project,
}

#[derive(Debug, Serialize)]
pub struct PutProjectRequest {
    pub language: Language,
    pub url: String,
}

#[derive(Tabled)]
struct ProjectDisplay {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Added")]
    added: String,
}

impl From<&ProjectRecord> for ProjectDisplay {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            name: truncate_with_ellipsis(&record.name, 30),
            language: record.project.language.to_string(),
            url: truncate_with_ellipsis(&record.project.url, 60),
            added: record.project.added.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn format_table(records: &[ProjectRecord]) -> String {
    if records.is_empty() {
        return "No projects found.".to_string();
    }

    let display: Vec<ProjectDisplay> = records.iter().map(ProjectDisplay::from).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// List projects with optional language filter
pub async fn list_projects(
    api_client: &ApiClient,
    language: Option<Language>,
    format: &str,
) -> CliResult<String> {
    let mut request = api_client.get("/projects");

    if let Some(l) = language {
        request = request.query(&[("language", l.as_str())]);
    }

    let response: ListProjectsResponse =
        ApiClient::handle_response(request.send().await?).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&response.body)?),
        _ => Ok(format_table(&response.body)),
    }
}

/// Store a project under `name`
pub async fn put_project(
    api_client: &ApiClient,
    name: &str,
    request: PutProjectRequest,
    format: &str,
) -> CliResult<String> {
    let response = api_client
        .put(&["projects", name])?
        .json(&request)
        .send()
        .await?;

    let stored: PutProjectResponse = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&stored.body)?),
        _ => Ok(format!(
            "✓ Stored project: {} ({}, added {})",
            name,
            stored.body.language,
            stored.body.added.format("%Y-%m-%d %H:%M:%S")
        )),
    }
}
