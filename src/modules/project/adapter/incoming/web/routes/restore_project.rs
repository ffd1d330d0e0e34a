use actix_web::{patch, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::incoming::use_cases::RestoreProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Restore a soft-deleted project
#[utoipa::path(
    patch,
    path = "/projects/{id}/restore",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Number of restored projects", body = inline(SuccessResponse<AffectedRows>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/projects/{id}/restore")]
pub async fn restore_project_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.restore.execute(project_id).await {
        Ok(affected) => {
            info!(
                project_id,
                affected = affected.affected,
                subject = %user.subject,
                "Project restored"
            );
            ApiResponse::success(affected)
        }

        Err(RestoreProjectError::RepositoryError(msg)) => {
            error!(project_id, "Failed to restore project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
