use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by id
///
/// Soft-deleted projects are returned too. An unknown id yields `data: null`.
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (
            status = 200,
            description = "The project, or null when the id is unknown",
            body = inline(SuccessResponse<Project>)
        ),
        (status = 404, description = "Id is not an integer"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::RepositoryError(msg)) => {
            error!(project_id, "Failed to fetch project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
