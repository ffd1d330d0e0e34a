use async_trait::async_trait;

use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::outgoing::project_archiver::ProjectArchiverError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeleteProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectArchiverError> for SoftDeleteProjectError {
    fn from(err: ProjectArchiverError) -> Self {
        match err {
            ProjectArchiverError::DatabaseError(msg) => {
                SoftDeleteProjectError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SoftDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<AffectedRows, SoftDeleteProjectError>;
}
