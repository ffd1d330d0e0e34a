use async_trait::async_trait;
use tracing::debug;

use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectRepository, ProjectRepositoryError,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i32,
        data: PatchProjectData,
    ) -> Result<AffectedRows, UpdateProjectError> {
        let affected = self
            .project_repository
            .update_project(project_id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })?;

        if affected.affected == 0 {
            debug!(project_id, "update matched no project");
        }

        Ok(affected)
    }
}
