// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Select,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};

const LIKE_ESCAPE: char = '\\';

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, project_id: i32) -> Result<Option<Project>, ProjectQueryError> {
        Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_project)
            .transpose()
    }

    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError> {
        list_select(&filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }
}

// ============================================================================
// Query Building
// ============================================================================

fn list_select(filter: &ProjectListFilter) -> Select<Entity> {
    let mut query = if filter.show_deleted {
        Entity::find().filter(Column::DeletedAt.is_not_null())
    } else {
        Entity::find().filter(Column::DeletedAt.is_null())
    };

    // Case-sensitive substring match with spaces ignored on both sides
    if let Some(term) = filter.search_term() {
        let pattern = like_pattern(term);
        query = query.filter(
            Condition::any()
                .add(Expr::expr(spaceless(Column::Name)).like(
                    LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE),
                ))
                .add(
                    Expr::expr(spaceless(Column::Description))
                        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
                ),
        );
    }

    query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

/// `REPLACE(column, ' ', '')`
fn spaceless(column: Column) -> SimpleExpr {
    Func::cust(Alias::new("REPLACE"))
        .arg(Expr::col(column))
        .arg(" ")
        .arg("")
        .into()
}

/// Wraps the term in `%...%` with LIKE metacharacters matched literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectQueryError> {
    model
        .into_project()
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
