use async_trait::async_trait;

use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::outgoing::project_archiver::ProjectArchiverError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestoreProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectArchiverError> for RestoreProjectError {
    fn from(err: ProjectArchiverError) -> Self {
        match err {
            ProjectArchiverError::DatabaseError(msg) => RestoreProjectError::RepositoryError(msg),
        }
    }
}

/// Only a soft-deleted project can be restored; anything else affects 0 rows.
#[async_trait]
pub trait RestoreProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<AffectedRows, RestoreProjectError>;
}
