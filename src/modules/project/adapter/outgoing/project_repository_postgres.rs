use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{AffectedRows, Project};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            owner: Set(data.owner),
            co2_estimate_reduction: Set(to_json(&data.co2_estimate_reduction)?),
            listing: Set(to_json(&data.listing)?),
            created_at: Set(Utc::now().fixed_offset()),
            deleted_at: Set(None),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        result
            .into_project()
            .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
    }

    async fn update_project(
        &self,
        project_id: i32,
        data: PatchProjectData,
    ) -> Result<AffectedRows, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name);
        }

        if let Some(description) = data.description {
            model.description = Set(description);
        }

        if let Some(owner) = data.owner {
            model.owner = Set(owner);
        }

        if let Some(range) = data.co2_estimate_reduction {
            model.co2_estimate_reduction = Set(to_json(&range)?);
        }

        if let Some(listing) = data.listing {
            model.listing = Set(to_json(&listing)?);
        }

        let has_changes = model.name.is_set()
            || model.description.is_set()
            || model.owner.is_set()
            || model.co2_estimate_reduction.is_set()
            || model.listing.is_set();

        // Callers validate patches, but the port accepts an empty one and an
        // UPDATE with an empty SET list is invalid SQL
        if !has_changes {
            return Ok(AffectedRows::none());
        }

        let res = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(AffectedRows::new(res.rows_affected))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
