use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::project::application::domain::entities::{AffectedRows, Project};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectInput, UpdateProjectInput,
};
use crate::shared::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Projects API",
        version = "1.0.0",
        description = "CRUD and soft-delete lifecycle for climate projects"
    ),
    paths(
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::soft_delete_project_handler,
        crate::project::adapter::incoming::web::routes::restore_project_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldError,

            // Project DTOs
            Project,
            AffectedRows,
            CreateProjectInput,
            UpdateProjectInput
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "projects", description = "Project management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
