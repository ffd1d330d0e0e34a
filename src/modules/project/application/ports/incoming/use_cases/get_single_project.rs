use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectQueryError> for GetSingleProjectError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) | ProjectQueryError::SerializationError(msg) => {
                GetSingleProjectError::RepositoryError(msg)
            }
        }
    }
}

/// An unknown id is `Ok(None)`, not an error.
#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<Option<Project>, GetSingleProjectError>;
}
