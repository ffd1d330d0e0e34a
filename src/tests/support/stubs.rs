use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{AffectedRows, Project};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, GetProjectsError, GetProjectsUseCase,
    GetSingleProjectError, GetSingleProjectUseCase, RestoreProjectError, RestoreProjectUseCase,
    SoftDeleteProjectError, SoftDeleteProjectUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData,
};

// Defaults for use cases a test does not exercise. Reaching one is a test bug.

#[derive(Default, Clone)]
pub struct DefaultStubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for DefaultStubCreateProjectUseCase {
    async fn execute(&self, _data: CreateProjectData) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    async fn execute(&self, _filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for DefaultStubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<Option<Project>, GetSingleProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for DefaultStubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: i32,
        _data: PatchProjectData,
    ) -> Result<AffectedRows, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubSoftDeleteProjectUseCase;

#[async_trait]
impl SoftDeleteProjectUseCase for DefaultStubSoftDeleteProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<AffectedRows, SoftDeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubRestoreProjectUseCase;

#[async_trait]
impl RestoreProjectUseCase for DefaultStubRestoreProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<AffectedRows, RestoreProjectError> {
        unimplemented!("Not used in this test")
    }
}
