use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_ISSUER: &str = "projects-backend-test";

pub fn jwt_service() -> JwtTokenService {
    let config = JwtConfig::new(TEST_SECRET.to_string(), TEST_ISSUER.to_string(), 3600)
        .expect("test JWT config must be valid");
    JwtTokenService::new(config)
}

pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(jwt_service())
}

/// `Authorization` header value carrying a fresh access token.
pub fn bearer(subject: &str) -> String {
    let token = jwt_service()
        .generate_access_token(subject)
        .expect("token generation must succeed");
    format!("Bearer {}", token)
}
