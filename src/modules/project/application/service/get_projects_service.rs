use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        self.query.list(filter).await.map_err(GetProjectsError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
    use crate::tests::support::project_test_fixtures::{deleted_project, sample_project};

    /* --------------------------------------------------
     * Mock ProjectQuery
     * -------------------------------------------------- */

    struct MockProjectQuery {
        result: Result<Vec<Project>, ProjectQueryError>,
        seen_filter: Mutex<Option<ProjectListFilter>>,
    }

    impl MockProjectQuery {
        fn success(projects: Vec<Project>) -> Self {
            Self {
                result: Ok(projects),
                seen_filter: Mutex::new(None),
            }
        }

        fn error(err: ProjectQueryError) -> Self {
            Self {
                result: Err(err),
                seen_filter: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn get_by_id(&self, _project_id: i32) -> Result<Option<Project>, ProjectQueryError> {
            unimplemented!("not used in GetProjectsService tests")
        }

        async fn list(
            &self,
            filter: ProjectListFilter,
        ) -> Result<Vec<Project>, ProjectQueryError> {
            *self.seen_filter.lock().unwrap() = Some(filter);
            self.result.clone()
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn returns_projects_from_query() {
        let service = GetProjectsService::new(MockProjectQuery::success(vec![
            sample_project(2),
            sample_project(1),
        ]));

        let result = service.execute(ProjectListFilter::active()).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 2);
    }

    #[tokio::test]
    async fn passes_filter_through_unchanged() {
        let query = MockProjectQuery::success(vec![deleted_project(3)]);
        let service = GetProjectsService::new(query);

        let filter = ProjectListFilter::new(Some("Project 3"), true);
        service.execute(filter.clone()).await.unwrap();

        let seen = service.query.seen_filter.lock().unwrap().clone();
        assert_eq!(seen, Some(filter));
    }

    #[tokio::test]
    async fn maps_query_error() {
        let service = GetProjectsService::new(MockProjectQuery::error(
            ProjectQueryError::DatabaseError("db down".to_string()),
        ));

        let result = service.execute(ProjectListFilter::active()).await;

        assert!(matches!(
            result,
            Err(GetProjectsError::QueryFailed(msg)) if msg == "db down"
        ));
    }
}
