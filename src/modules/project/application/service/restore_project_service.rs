use async_trait::async_trait;

use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::incoming::use_cases::{
    RestoreProjectError, RestoreProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_archiver::ProjectArchiver;

pub struct RestoreProjectService<A>
where
    A: ProjectArchiver,
{
    archiver: A,
}

impl<A> RestoreProjectService<A>
where
    A: ProjectArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> RestoreProjectUseCase for RestoreProjectService<A>
where
    A: ProjectArchiver + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<AffectedRows, RestoreProjectError> {
        self.archiver
            .restore(project_id)
            .await
            .map_err(RestoreProjectError::from)
    }
}
