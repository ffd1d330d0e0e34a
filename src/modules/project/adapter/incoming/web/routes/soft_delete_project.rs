use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::incoming::use_cases::SoftDeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft delete a project
///
/// Marks an active project as deleted. Already deleted or unknown ids report `affected: 0`.
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Number of deleted projects", body = inline(SuccessResponse<AffectedRows>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/projects/{id}")]
pub async fn soft_delete_project_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.soft_delete.execute(project_id).await {
        Ok(affected) => {
            info!(
                project_id,
                affected = affected.affected,
                subject = %user.subject,
                "Project soft deleted"
            );
            ApiResponse::success(affected)
        }

        Err(SoftDeleteProjectError::RepositoryError(msg)) => {
            error!(project_id, "Failed to soft delete project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::project::application::ports::incoming::use_cases::SoftDeleteProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};

    #[derive(Clone)]
    struct MockSoftDeleteProjectUseCase {
        result: Result<AffectedRows, SoftDeleteProjectError>,
    }

    #[async_trait]
    impl SoftDeleteProjectUseCase for MockSoftDeleteProjectUseCase {
        async fn execute(&self, _project_id: i32) -> Result<AffectedRows, SoftDeleteProjectError> {
            self.result.clone()
        }
    }

    async fn delete(
        result: Result<AffectedRows, SoftDeleteProjectError>,
        auth: Option<String>,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_soft_delete_project(MockSoftDeleteProjectUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider()))
                .service(soft_delete_project_handler),
        )
        .await;

        let mut req = test::TestRequest::delete().uri("/projects/5");
        if let Some(auth) = auth {
            req = req.insert_header(("Authorization", auth));
        }

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_soft_delete_project_success() {
        let resp = delete(Ok(AffectedRows::new(1)), Some(bearer("john@example.com"))).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["affected"], 1);
    }

    #[actix_web::test]
    async fn test_soft_delete_project_nothing_to_delete() {
        let resp = delete(Ok(AffectedRows::none()), Some(bearer("john@example.com"))).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["affected"], 0);
    }

    #[actix_web::test]
    async fn test_soft_delete_project_invalid_token() {
        let resp = delete(
            Ok(AffectedRows::new(1)),
            Some("Bearer not-a-jwt".to_string()),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_soft_delete_project_repository_error() {
        let resp = delete(
            Err(SoftDeleteProjectError::RepositoryError("db down".into())),
            Some(bearer("john@example.com")),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
