//! Project catalog handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use utoipa::{IntoParams, ToSchema};

use super::{ErrorResponse, HandlerError, error_response};
use crate::api::AppState;
use crate::db::{
    Database, DbError, Language, Project, ProjectQuery, ProjectRecord, ProjectRepository,
};

const FETCH_FAILED: &str = "failed to fetch projects";
const DECODE_FAILED: &str = "failed to decode projects";
const INSERT_FAILED: &str = "failed to insert project";

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Project response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    /// Time the project was stored (set by the server)
    #[schema(example = "2025-01-01T00:00:00Z")]
    pub added: DateTime<Utc>,
    /// Language the project is written in
    pub language: Language,
    /// Project URL
    #[schema(example = "https://github.com/tokio-rs/axum")]
    pub url: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            added: p.added,
            language: p.language,
            url: p.url,
        }
    }
}

/// Stored project record DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectRecordResponse {
    /// Project name (path key)
    #[schema(example = "axum")]
    pub name: String,
    pub project: ProjectResponse,
}

impl From<ProjectRecord> for ProjectRecordResponse {
    fn from(r: ProjectRecord) -> Self {
        Self {
            name: r.name,
            project: ProjectResponse::from(r.project),
        }
    }
}

/// Response envelope for the list operation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectListBody {
    pub body: Vec<ProjectRecordResponse>,
}

/// Response envelope for the put operation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectBody {
    pub body: ProjectResponse,
}

/// Put project request DTO
///
/// `added` is read-only; a value supplied by the client is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PutProjectRequest {
    /// Language the project is written in
    pub language: Language,
    /// Absolute URI of the project
    #[schema(example = "https://github.com/tokio-rs/axum")]
    pub url: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProjectsQuery {
    /// Filter by language
    #[param(value_type = Option<Language>, example = "rust")]
    #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
    pub language: Option<Language>,
}

// =============================================================================
// Handlers
// =============================================================================

/// List projects
///
/// Returns all stored project records, optionally filtered by language.
/// Order is whatever the store yields.
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "List of project records", body = ProjectListBody),
        (status = 422, description = "Invalid query parameter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_projects<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<ListProjectsQuery>, QueryRejection>,
) -> Result<Json<ProjectListBody>, HandlerError> {
    let Query(query) =
        query.map_err(|e| error_response(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()))?;

    let db_query = ProjectQuery {
        language: query.language,
    };

    let records = state
        .db()
        .projects()
        .list(&db_query)
        .await
        .map_err(|e| {
            let message = match e {
                DbError::Decode { .. } => DECODE_FAILED,
                _ => FETCH_FAILED,
            };
            error!(error = %e, "{}", message);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        })?;

    Ok(Json(ProjectListBody {
        body: records
            .into_iter()
            .map(ProjectRecordResponse::from)
            .collect(),
    }))
}

/// Put a project
///
/// Stores a new record under `name` with the server's current time as `added`.
/// Always inserts: putting an existing name stores a second record.
#[utoipa::path(
    put,
    path = "/projects/{name}",
    tag = "projects",
    params(
        ("name" = String, Path, description = "Project name")
    ),
    request_body = PutProjectRequest,
    responses(
        (status = 200, description = "Project stored", body = ProjectBody),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn put_project<D: Database>(
    State(state): State<AppState<D>>,
    Path(name): Path<String>,
    body: Result<Json<PutProjectRequest>, JsonRejection>,
) -> Result<Json<ProjectBody>, HandlerError> {
    // Syntax, content-type and schema failures are all validation errors here
    let Json(req) =
        body.map_err(|e| error_response(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()))?;

    url::Url::parse(&req.url).map_err(|e| {
        error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("invalid url '{}': {}", req.url, e),
        )
    })?;

    let record = ProjectRecord {
        name,
        project: Project {
            // Millisecond precision, matching what the store keeps
            added: Utc::now().trunc_subsecs(3),
            language: req.language,
            url: req.url,
        },
    };

    state.db().projects().insert(&record).await.map_err(|e| {
        error!(error = %e, "{}", INSERT_FAILED);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, INSERT_FAILED)
    })?;

    info!(name = %record.name, language = %record.project.language, "stored project");

    Ok(Json(ProjectBody {
        body: ProjectResponse::from(record.project),
    }))
}
