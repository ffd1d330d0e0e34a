// src/modules/project/adapter/outgoing/project_archiver_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::domain::entities::AffectedRows;
use crate::modules::project::application::ports::outgoing::project_archiver::{
    ProjectArchiver, ProjectArchiverError,
};

#[derive(Clone)]
pub struct ProjectArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectArchiver for ProjectArchiverPostgres {
    async fn soft_delete(&self, project_id: i32) -> Result<AffectedRows, ProjectArchiverError> {
        let res = Entity::update_many()
            .col_expr(Column::DeletedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(project_id))
            .filter(Column::DeletedAt.is_null()) // state-aware
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(AffectedRows::new(res.rows_affected))
    }

    async fn restore(&self, project_id: i32) -> Result<AffectedRows, ProjectArchiverError> {
        let res = Entity::update_many()
            .col_expr(
                Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .filter(Column::Id.eq(project_id))
            .filter(Column::DeletedAt.is_not_null()) // state-aware
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(AffectedRows::new(res.rows_affected))
    }
}

fn map_db_err(e: DbErr) -> ProjectArchiverError {
    ProjectArchiverError::DatabaseError(e.to_string())
}
