use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// Case-sensitive match on name or description; spaces are ignored
    pub search_query: Option<String>,

    /// `true` lists only soft-deleted projects
    pub show_deleted: Option<bool>,
}

impl From<GetProjectsQuery> for ProjectListFilter {
    fn from(q: GetProjectsQuery) -> Self {
        ProjectListFilter::new(q.search_query.as_deref(), q.show_deleted.unwrap_or(false))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
///
/// Newest first. Active projects by default, only deleted ones with `showDeleted=true`.
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (
            status = 200,
            description = "Matching projects",
            body = inline(SuccessResponse<Vec<Project>>)
        ),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: ProjectListFilter = query.into_inner().into();

    match data.project.get_list.execute(filter.clone()).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!(?filter, "Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
