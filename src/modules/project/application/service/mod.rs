mod create_project_service;
mod get_projects_service;
mod get_single_project_service;
mod restore_project_service;
mod soft_delete_project_service;
mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use restore_project_service::RestoreProjectService;
pub use soft_delete_project_service::SoftDeleteProjectService;
pub use update_project_service::UpdateProjectService;
