mod create_project;
mod get_projects;
mod get_single_project;
mod project_fields;
mod restore_project;
mod soft_delete_project;
mod update_project;

pub use create_project::{
    validate_create_project, CreateProjectError, CreateProjectInput, CreateProjectUseCase,
};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use restore_project::{RestoreProjectError, RestoreProjectUseCase};
pub use soft_delete_project::{SoftDeleteProjectError, SoftDeleteProjectUseCase};
pub use update_project::{
    validate_update_project, UpdateProjectError, UpdateProjectInput, UpdateProjectUseCase,
};
