use async_trait::async_trait;

use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::incoming::use_cases::{
    SoftDeleteProjectError, SoftDeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_archiver::ProjectArchiver;

pub struct SoftDeleteProjectService<A>
where
    A: ProjectArchiver,
{
    archiver: A,
}

impl<A> SoftDeleteProjectService<A>
where
    A: ProjectArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> SoftDeleteProjectUseCase for SoftDeleteProjectService<A>
where
    A: ProjectArchiver + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<AffectedRows, SoftDeleteProjectError> {
        self.archiver
            .soft_delete(project_id)
            .await
            .map_err(SoftDeleteProjectError::from)
    }
}
