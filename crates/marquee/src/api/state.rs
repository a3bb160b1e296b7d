//! Application state shared across handlers.

use std::time::Duration;

use crate::account::AccountService;
use crate::auth::AuthService;
use crate::catalog::CatalogService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authentication and session authority.
    pub auth: AuthService,
    /// Film and cinema catalog.
    pub catalog: CatalogService,
    /// Account surface for the logged-in user.
    pub account: AccountService,
}

impl AppState {
    /// Create new application state with the given simulated latency for the
    /// mock data services.
    pub fn new(auth: AuthService, mock_latency: Duration) -> Self {
        Self {
            auth,
            catalog: CatalogService::new(mock_latency),
            account: AccountService::new(mock_latency),
        }
    }
}
