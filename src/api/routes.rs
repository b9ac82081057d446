//! API route configuration.

use axum::routing::{get, put};
use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, ErrorResponse, HealthResponse, ProjectBody, ProjectListBody, ProjectRecordResponse,
    ProjectResponse, PutProjectRequest,
};
use super::state::AppState;
use crate::db::{Database, Language};

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Catalog of projects and the languages they are written in",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_projects,
        handlers::put_project,
    ),
    components(
        schemas(
            HealthResponse,
            Language,
            ProjectResponse,
            ProjectRecordResponse,
            ProjectListBody,
            ProjectBody,
            PutProjectRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "projects", description = "Project catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let api_routes = routes!(D => {
        get "/projects" => handlers::list_projects,
        put "/projects/{name}" => handlers::put_project,
        get "/health" => handlers::health,
    });

    let spec = api.clone();
    api_routes
        .route("/openapi.json", get(move || async move { Json(spec) }))
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
