// src/modules/project/application/ports/outgoing/project_archiver.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::AffectedRows;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectArchiverError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, lifecycle operations)
// ──────────────────────────────────────────────────────────
//
// Both operations are state-aware: soft_delete only touches active rows,
// restore only touches deleted rows. Anything else affects 0 rows.
//

#[async_trait]
pub trait ProjectArchiver: Send + Sync {
    async fn soft_delete(&self, project_id: i32) -> Result<AffectedRows, ProjectArchiverError>;

    async fn restore(&self, project_id: i32) -> Result<AffectedRows, ProjectArchiverError>;
}
