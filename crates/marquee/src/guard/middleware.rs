//! HTTP adapter for the access guard.
//!
//! Binds the guard's capabilities to an incoming request: the session token
//! comes from the `Authorization` header or the `auth_token` cookie, the
//! validation capability is the auth service, and navigation becomes a
//! redirect response. The adapter awaits resolution, so a client only ever
//! observes the terminal outcome.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    Router,
    extract::{Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};

use crate::api::state::AppState;
use crate::auth::AuthService;

use super::decision::LOGIN_PATH;
use super::{AccessDecision, AccessGuard, Credentials, GuardConfig, Navigator};

/// Credentials bound to a single request's token.
pub struct RequestCredentials {
    auth: AuthService,
    token: Option<String>,
}

impl RequestCredentials {
    pub fn new(auth: AuthService, token: Option<String>) -> Self {
        Self { auth, token }
    }
}

#[async_trait]
impl Credentials for RequestCredentials {
    fn is_authenticated(&self) -> bool {
        match &self.token {
            Some(token) => self.auth.sessions().get(token).is_some(),
            None => false,
        }
    }

    async fn validate_token(&self) -> Result<bool> {
        let Some(token) = &self.token else {
            return Ok(false);
        };
        Ok(self.auth.validate_token(token)?)
    }

    async fn is_admin(&self) -> Result<bool> {
        let Some(token) = &self.token else {
            return Ok(false);
        };
        Ok(self.auth.decode_claims(token)?.is_admin())
    }
}

/// Captures the single navigation a denied check performs.
#[derive(Default)]
struct CapturedNavigation {
    target: Mutex<Option<String>>,
}

impl CapturedNavigation {
    fn take(&self) -> Option<String> {
        self.target.lock().expect("navigation lock poisoned").take()
    }
}

impl Navigator for CapturedNavigation {
    fn navigate_to(&self, path: &str) {
        let mut target = self.target.lock().expect("navigation lock poisoned");
        // The guard navigates at most once per evaluation.
        target.get_or_insert_with(|| path.to_string());
    }
}

/// Pull the session token from the request headers.
///
/// Checks `Authorization: Bearer <token>` first, then the `auth_token`
/// cookie.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(axum::http::header::AUTHORIZATION)
        && let Ok(value) = value.to_str()
        && let Some(token) = value.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        return Some(token.to_string());
    }

    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "auth_token" && !value.is_empty()).then(|| value.to_string())
    })
}

/// Guard middleware: evaluate the check sequence for this request and either
/// pass it through or redirect away.
pub async fn access_middleware(
    State((state, config)): State<(AppState, GuardConfig)>,
    request: Request,
    next: Next,
) -> Response {
    let token = extract_token(request.headers());
    let credentials = Arc::new(RequestCredentials::new(state.auth.clone(), token));
    let navigation = Arc::new(CapturedNavigation::default());
    let guard = AccessGuard::new(credentials, navigation.clone());

    match guard.evaluate(config).await {
        AccessDecision::Authorized => next.run(request).await,
        _ => {
            let target = navigation.take().unwrap_or_else(|| LOGIN_PATH.to_string());
            Redirect::to(&target).into_response()
        }
    }
}

/// Wrap a router so every request passes the guard first.
///
/// This is the call-site combinator: any surface becomes a protected surface
/// without repeating the check logic.
pub fn protect(router: Router, state: AppState, config: GuardConfig) -> Router {
    router.layer(middleware::from_fn_with_state(
        (state, config),
        access_middleware,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_extract_token_bearer() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer abc123");
        assert_eq!(extract_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_token_cookie() {
        let headers = headers_with(header::COOKIE, "theme=dark; auth_token=tok42; lang=en");
        assert_eq!(extract_token(&headers), Some("tok42".to_string()));
    }

    #[test]
    fn test_extract_token_prefers_bearer() {
        let mut headers = headers_with(header::AUTHORIZATION, "Bearer from-header");
        headers.insert(header::COOKIE, "auth_token=from-cookie".parse().unwrap());
        assert_eq!(extract_token(&headers), Some("from-header".to_string()));
    }

    #[test]
    fn test_extract_token_absent() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        let headers = headers_with(header::COOKIE, "theme=dark");
        assert_eq!(extract_token(&headers), None);
        let headers = headers_with(header::AUTHORIZATION, "Basic xyz");
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_captured_navigation_keeps_first_target() {
        let nav = CapturedNavigation::default();
        nav.navigate_to("/login");
        nav.navigate_to("/");
        assert_eq!(nav.take(), Some("/login".to_string()));
        assert_eq!(nav.take(), None);
    }
}
