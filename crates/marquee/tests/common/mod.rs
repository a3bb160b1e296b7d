//! Test utilities and common setup.

use std::time::Duration;

use axum::Router;
use marquee::api::{self, AppState};
use marquee::auth::{AuthConfig, AuthService, MemorySessionStore};

/// Create a test AuthConfig with a JWT secret and the demo accounts.
fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: Some("test-secret-for-integration-tests-minimum-32-chars".to_string()),
        demo_users: AuthConfig::default_demo_users(),
        ..Default::default()
    }
}

/// Application state with zero mock latency.
pub fn test_state() -> AppState {
    let auth = AuthService::new(test_auth_config(), MemorySessionStore::new())
        .expect("test auth config is valid");
    AppState::new(auth, Duration::ZERO)
}

/// Create a test application.
pub fn test_app() -> Router {
    api::create_router(test_state())
}

/// Create a test application and a valid token for the named demo user.
#[allow(dead_code)]
pub fn test_app_with_token(user_id: &str) -> (Router, String) {
    let state = test_state();
    let user = state.auth.user(user_id).expect("demo user exists");
    let token = state.auth.issue_token(&user).expect("token issue succeeds");
    (api::create_router(state), token)
}
