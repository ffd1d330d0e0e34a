use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    validate_create_project, CreateProjectError, CreateProjectInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a project
///
/// Every field is required and `listing` must hold at least one entry.
#[utoipa::path(
    post,
    path = "/projects/create",
    tag = "projects",
    request_body = CreateProjectInput,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "validation failed: listing must contain at least 1 element",
                    "fields": [{ "field": "listing", "message": "must contain at least 1 element" }]
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/projects/create")]
pub async fn create_project_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_data = match validate_create_project(req.into_inner()) {
        Ok(project_data) => project_data,
        Err(errors) => return ApiResponse::validation_failed(&errors),
    };

    match data.project.create.execute(project_data).await {
        Ok(created) => {
            info!(project_id = created.id, subject = %user.subject, "Project created");
            ApiResponse::created(created)
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
