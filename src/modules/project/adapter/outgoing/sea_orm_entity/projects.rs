use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::project::application::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub owner: String,

    // JSON array of numbers
    #[sea_orm(column_type = "JsonBinary")]
    pub co2_estimate_reduction: Json,

    // JSON array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub listing: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    // Soft delete marker, NULL while active
    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decodes the JSON columns; fails if a stored array has the wrong shape.
    pub fn into_project(self) -> Result<Project, serde_json::Error> {
        Ok(Project {
            id: self.id,
            name: self.name,
            description: self.description,
            owner: self.owner,
            co2_estimate_reduction: serde_json::from_value(self.co2_estimate_reduction)?,
            listing: serde_json::from_value(self.listing)?,
            created_at: self.created_at.with_timezone(&Utc),
            deleted_at: self.deleted_at.map(|at| at.with_timezone(&Utc)),
        })
    }
}
