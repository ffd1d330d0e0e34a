// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::project::application::domain::entities::{AffectedRows, Project};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => rejected for non-nullable columns
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated input for a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectData {
    pub name: String,
    pub description: String,
    pub owner: String,

    /// Stored as JSON in DB (array of numbers)
    pub co2_estimate_reduction: Vec<f64>,

    /// Stored as JSON in DB (array of strings), never empty
    pub listing: Vec<String>,
}

/// Patch semantics: `None` => keep, `Some` => replace (arrays replaced whole).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProjectData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub co2_estimate_reduction: Option<Vec<f64>>,
    pub listing: Option<Vec<String>>,
}

impl PatchProjectData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.owner.is_none()
            && self.co2_estimate_reduction.is_none()
            && self.listing.is_none()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: CreateProjectData)
        -> Result<Project, ProjectRepositoryError>;

    /// Patch without pre-read. Active and soft-deleted rows are both
    /// patchable; an unknown id affects nothing.
    async fn update_project(
        &self,
        project_id: i32,
        data: PatchProjectData,
    ) -> Result<AffectedRows, ProjectRepositoryError>;
}
