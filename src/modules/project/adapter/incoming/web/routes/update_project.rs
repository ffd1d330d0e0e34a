use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::incoming::use_cases::{
    validate_update_project, UpdateProjectError, UpdateProjectInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a project
///
/// Partial update: omitted fields are kept, arrays are replaced whole.
/// Deleted projects can be updated too. Unknown ids report `affected: 0`.
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    request_body = UpdateProjectInput,
    responses(
        (
            status = 200,
            description = "Number of updated projects",
            body = inline(SuccessResponse<AffectedRows>),
            example = json!({ "success": true, "data": { "affected": 1 } })
        ),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/projects/{id}")]
pub async fn update_project_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<UpdateProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    let patch = match validate_update_project(req.into_inner()) {
        Ok(patch) => patch,
        Err(errors) => return ApiResponse::validation_failed(&errors),
    };

    match data.project.update.execute(project_id, patch).await {
        Ok(affected) => {
            info!(
                project_id,
                affected = affected.affected,
                subject = %user.subject,
                "Project updated"
            );
            ApiResponse::success(affected)
        }

        Err(UpdateProjectError::RepositoryError(msg)) => {
            error!(project_id, "Failed to update project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
