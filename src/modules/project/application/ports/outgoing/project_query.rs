// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Listing filter. `show_deleted` selects soft-deleted rows *instead of*
/// active ones; the search term narrows whichever set is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    search: Option<String>,
    pub show_deleted: bool,
}

impl ProjectListFilter {
    pub fn new(search: Option<&str>, show_deleted: bool) -> Self {
        Self {
            search: search.map(remove_spaces).filter(|s| !s.is_empty()),
            show_deleted,
        }
    }

    pub fn active() -> Self {
        Self::new(None, false)
    }

    pub fn deleted() -> Self {
        Self::new(None, true)
    }

    /// Search text with every space removed; `None` when nothing is left.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

/// Stored names/descriptions are compared space-stripped too, so
/// "Project1" finds "Project 1".
pub fn remove_spaces(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Looks at active and soft-deleted rows alike.
    async fn get_by_id(&self, project_id: i32) -> Result<Option<Project>, ProjectQueryError>;

    /// Newest first (`created_at` desc, then `id` desc).
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_strips_every_space() {
        let filter = ProjectListFilter::new(Some(" The  Description "), false);
        assert_eq!(filter.search_term(), Some("TheDescription"));
    }

    #[test]
    fn test_blank_search_is_absent() {
        assert_eq!(ProjectListFilter::new(Some("   "), false).search_term(), None);
        assert_eq!(ProjectListFilter::new(Some(""), true).search_term(), None);
        assert_eq!(ProjectListFilter::new(None, false), ProjectListFilter::active());
    }

    #[test]
    fn test_filter_keeps_case() {
        let filter = ProjectListFilter::new(Some("project 1"), false);
        assert_eq!(filter.search_term(), Some("project1"));
    }

    #[test]
    fn test_deleted_filter() {
        let filter = ProjectListFilter::deleted();
        assert!(filter.show_deleted);
        assert_eq!(filter.search_term(), None);
    }
}
