pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

mod config;

pub use modules::auth;
pub use modules::project;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::config::AppConfig;
use crate::project::adapter::outgoing::{
    ProjectArchiverPostgres, ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, GetProjectsService, GetSingleProjectService, RestoreProjectService,
    SoftDeleteProjectService, UpdateProjectService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
}

/// Wires every project use case to the SeaORM adapters.
pub fn build_project_use_cases(db: Arc<DatabaseConnection>) -> ProjectUseCases {
    let repository = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let query = ProjectQueryPostgres::new(Arc::clone(&db));
    let archiver = ProjectArchiverPostgres::new(db);

    ProjectUseCases {
        create: Arc::new(CreateProjectService::new(repository.clone())),
        get_list: Arc::new(GetProjectsService::new(query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(query)),
        update: Arc::new(UpdateProjectService::new(repository)),
        soft_delete: Arc::new(SoftDeleteProjectService::new(archiver.clone())),
        restore: Arc::new(RestoreProjectService::new(archiver)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e)
    })?;

    if config.run_migrations {
        Migrator::up(&conn, None).await.map_err(|e| {
            error!("Failed to run migrations: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let state = AppState {
        project: build_project_use_cases(Arc::clone(&db_arc)),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Project
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::soft_delete_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::restore_project_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
