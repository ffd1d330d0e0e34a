use std::env;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtConfigError};

#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {name} value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error(transparent)]
    Jwt(#[from] JwtConfigError),
}

/// Server settings read once at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| AppConfigError::Missing("DATABASE_URL"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        Ok(Self {
            database_url,
            host,
            port: parse_var("PORT", 8080)?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_var("RUN_MIGRATIONS", true)?,
            jwt: JwtConfig::from_env()?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, AppConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let port: u16 = parse_var("PROJECTS_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("PROJECTS_TEST_BAD_FLAG", "sometimes");

        let err = parse_var::<bool>("PROJECTS_TEST_BAD_FLAG", true).unwrap_err();
        assert!(matches!(
            err,
            AppConfigError::Invalid { name: "PROJECTS_TEST_BAD_FLAG", .. }
        ));
    }

    #[test]
    fn test_parse_var_reads_value() {
        env::set_var("PROJECTS_TEST_MAX_CONN", " 25 ");

        let max: u32 = parse_var("PROJECTS_TEST_MAX_CONN", 10).unwrap();
        assert_eq!(max, 25);
    }

    #[test]
    fn test_server_url() {
        let config = AppConfig {
            database_url: "postgres://localhost/projects".to_string(),
            host: "0.0.0.0".to_string(),
            port: 9000,
            db_max_connections: 10,
            run_migrations: false,
            jwt: JwtConfig::new(
                "test_secret_key_for_testing_purposes_only".to_string(),
                "issuer".to_string(),
                3600,
            )
            .unwrap(),
        };

        assert_eq!(config.server_url(), "0.0.0.0:9000");
    }
}
