use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase, RestoreProjectUseCase,
    SoftDeleteProjectUseCase, UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteProjectUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreProjectUseCase + Send + Sync>,
}
