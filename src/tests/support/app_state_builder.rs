use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase, RestoreProjectUseCase,
    SoftDeleteProjectUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    project: ProjectUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                create: Arc::new(DefaultStubCreateProjectUseCase),
                get_list: Arc::new(DefaultStubGetProjectsUseCase),
                get_single: Arc::new(DefaultStubGetSingleProjectUseCase),
                update: Arc::new(DefaultStubUpdateProjectUseCase),
                soft_delete: Arc::new(DefaultStubSoftDeleteProjectUseCase),
                restore: Arc::new(DefaultStubRestoreProjectUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_project(
        mut self,
        uc: impl SoftDeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.soft_delete = Arc::new(uc);
        self
    }

    pub fn with_restore_project(
        mut self,
        uc: impl RestoreProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.restore = Arc::new(uc);
        self
    }

    /// Use the given bundle as is, e.g. one wired to a real database.
    pub fn with_project_use_cases(mut self, project: ProjectUseCases) -> Self {
        self.project = project;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
        })
    }
}
