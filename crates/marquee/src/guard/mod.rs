//! Route access guard.
//!
//! Gates a protected surface behind an authorization decision. The guard
//! owns no policy about where credentials come from: it talks to an
//! injectable [`Credentials`] capability for the session checks and to a
//! [`Navigator`] for the redirect side effect, so it can be exercised with
//! fakes.
//!
//! Each call to [`AccessGuard::evaluate`] runs the full check sequence. A new
//! evaluation supersedes any still in flight; a late-resolving stale check can
//! neither overwrite the committed decision nor trigger navigation.

mod decision;
mod middleware;

pub use decision::{AccessDecision, DenyReason, HOME_PATH, LOGIN_PATH};
pub use middleware::{RequestCredentials, access_middleware, extract_token, protect};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error};

/// Session-check capabilities consumed by the guard.
#[async_trait]
pub trait Credentials: Send + Sync {
    /// Synchronous check for the presence of a local session.
    fn is_authenticated(&self) -> bool;

    /// Confirm the stored token is still valid with its issuing authority.
    async fn validate_token(&self) -> Result<bool>;

    /// Check the elevated role, available after validation.
    async fn is_admin(&self) -> Result<bool>;
}

/// Navigation capability used on the unauthorized path.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Per-usage guard parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardConfig {
    /// Whether authentication is required at all.
    pub require_auth: bool,
    /// Whether the elevated role is required.
    pub require_admin: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            require_admin: false,
        }
    }
}

impl GuardConfig {
    /// No checks at all; resolves authorized without touching any capability.
    pub fn public() -> Self {
        Self {
            require_auth: false,
            require_admin: false,
        }
    }

    /// Requires a validated session.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Requires a validated session and an elevated role.
    pub fn admin() -> Self {
        Self {
            require_auth: true,
            require_admin: true,
        }
    }
}

/// The route access guard.
pub struct AccessGuard {
    credentials: Arc<dyn Credentials>,
    navigator: Arc<dyn Navigator>,
    generation: AtomicU64,
    decision: RwLock<(u64, AccessDecision)>,
}

impl AccessGuard {
    pub fn new(credentials: Arc<dyn Credentials>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            credentials,
            navigator,
            generation: AtomicU64::new(0),
            decision: RwLock::new((0, AccessDecision::Pending)),
        }
    }

    /// The currently committed decision. `Pending` while a check is in flight.
    pub fn decision(&self) -> AccessDecision {
        self.decision.read().expect("decision lock poisoned").1
    }

    /// Run the full check sequence for the given configuration.
    ///
    /// Commits the result and performs at most one navigation, but only if no
    /// newer evaluation has started in the meantime; superseded evaluations
    /// are discarded silently. Any error inside the sequence fails closed.
    pub async fn evaluate(&self, config: GuardConfig) -> AccessDecision {
        // The generation bump and the Pending reset are a single locked step;
        // the slot's generation is therefore monotonic.
        let generation = {
            let mut slot = self.decision.write().expect("decision lock poisoned");
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *slot = (generation, AccessDecision::Pending);
            generation
        };

        let decision = match self.run_checks(config).await {
            Ok(decision) => decision,
            Err(err) => {
                error!(error = ?err, "access check sequence failed, denying access");
                AccessDecision::Unauthorized(DenyReason::Unexpected)
            }
        };

        self.commit(generation, decision);
        decision
    }

    async fn run_checks(&self, config: GuardConfig) -> Result<AccessDecision> {
        if !config.require_auth {
            return Ok(AccessDecision::Authorized);
        }

        if !self.credentials.is_authenticated() {
            return Ok(AccessDecision::Unauthorized(DenyReason::NotAuthenticated));
        }

        if !self.credentials.validate_token().await? {
            return Ok(AccessDecision::Unauthorized(DenyReason::ValidationFailed));
        }

        if config.require_admin && !self.credentials.is_admin().await? {
            return Ok(AccessDecision::Unauthorized(DenyReason::InsufficientRole));
        }

        Ok(AccessDecision::Authorized)
    }

    /// Store the decision and fire the redirect, unless superseded.
    fn commit(&self, generation: u64, decision: AccessDecision) {
        let mut slot = self.decision.write().expect("decision lock poisoned");
        if slot.0 != generation {
            debug!(generation, "discarding superseded access decision");
            return;
        }
        *slot = (generation, decision);

        if let AccessDecision::Unauthorized(reason) = decision {
            self.navigator.navigate_to(reason.redirect_target());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeCredentials {
        authenticated: bool,
        validate_result: Option<bool>,
        admin_result: Option<bool>,
        presence_calls: AtomicUsize,
        validate_calls: AtomicUsize,
        admin_calls: AtomicUsize,
    }

    impl FakeCredentials {
        fn new(authenticated: bool, validate: Option<bool>, admin: Option<bool>) -> Arc<Self> {
            Arc::new(Self {
                authenticated,
                validate_result: validate,
                admin_result: admin,
                ..Default::default()
            })
        }

        fn total_calls(&self) -> usize {
            self.presence_calls.load(Ordering::SeqCst)
                + self.validate_calls.load(Ordering::SeqCst)
                + self.admin_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Credentials for FakeCredentials {
        fn is_authenticated(&self) -> bool {
            self.presence_calls.fetch_add(1, Ordering::SeqCst);
            self.authenticated
        }

        async fn validate_token(&self) -> Result<bool> {
            self.validate_calls.fetch_add(1, Ordering::SeqCst);
            self.validate_result
                .ok_or_else(|| anyhow::anyhow!("validation call rejected"))
        }

        async fn is_admin(&self) -> Result<bool> {
            self.admin_calls.fetch_add(1, Ordering::SeqCst);
            self.admin_result
                .ok_or_else(|| anyhow::anyhow!("role check rejected"))
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        paths: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn paths(&self) -> Vec<String> {
            self.paths.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    fn guard(
        credentials: Arc<FakeCredentials>,
    ) -> (AccessGuard, Arc<RecordingNavigator>) {
        let nav = Arc::new(RecordingNavigator::default());
        (AccessGuard::new(credentials, nav.clone()), nav)
    }

    #[tokio::test]
    async fn auth_not_required_authorizes_without_any_capability_call() {
        let creds = FakeCredentials::new(false, None, None);
        let (guard, nav) = guard(creds.clone());

        let decision = guard.evaluate(GuardConfig::public()).await;

        assert_eq!(decision, AccessDecision::Authorized);
        assert_eq!(creds.total_calls(), 0);
        assert!(nav.paths().is_empty());
    }

    #[tokio::test]
    async fn missing_session_navigates_to_login_exactly_once() {
        let creds = FakeCredentials::new(false, Some(true), Some(true));
        let (guard, nav) = guard(creds.clone());

        let decision = guard.evaluate(GuardConfig::authenticated()).await;

        assert_eq!(
            decision,
            AccessDecision::Unauthorized(DenyReason::NotAuthenticated)
        );
        assert_eq!(nav.paths(), vec![LOGIN_PATH.to_string()]);
        assert_eq!(creds.validate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_validation_behaves_like_missing_session() {
        let creds = FakeCredentials::new(true, Some(false), Some(true));
        let (guard, nav) = guard(creds);

        let decision = guard.evaluate(GuardConfig::authenticated()).await;

        assert_eq!(
            decision,
            AccessDecision::Unauthorized(DenyReason::ValidationFailed)
        );
        assert_eq!(nav.paths(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn validation_error_fails_closed_to_login() {
        let creds = FakeCredentials::new(true, None, Some(true));
        let (guard, nav) = guard(creds);

        let decision = guard.evaluate(GuardConfig::authenticated()).await;

        assert_eq!(decision, AccessDecision::Unauthorized(DenyReason::Unexpected));
        assert_eq!(nav.paths(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn missing_role_navigates_home_not_login() {
        let creds = FakeCredentials::new(true, Some(true), Some(false));
        let (guard, nav) = guard(creds);

        let decision = guard.evaluate(GuardConfig::admin()).await;

        assert_eq!(
            decision,
            AccessDecision::Unauthorized(DenyReason::InsufficientRole)
        );
        assert_eq!(nav.paths(), vec![HOME_PATH.to_string()]);
    }

    #[tokio::test]
    async fn role_check_error_fails_closed_to_login() {
        let creds = FakeCredentials::new(true, Some(true), None);
        let (guard, nav) = guard(creds);

        let decision = guard.evaluate(GuardConfig::admin()).await;

        assert_eq!(decision, AccessDecision::Unauthorized(DenyReason::Unexpected));
        assert_eq!(nav.paths(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn full_success_authorizes_without_navigation() {
        let creds = FakeCredentials::new(true, Some(true), Some(true));
        let (guard, nav) = guard(creds.clone());

        let decision = guard.evaluate(GuardConfig::admin()).await;

        assert_eq!(decision, AccessDecision::Authorized);
        assert!(nav.paths().is_empty());
        assert_eq!(guard.decision(), AccessDecision::Authorized);
    }

    #[tokio::test]
    async fn role_not_required_skips_role_check() {
        let creds = FakeCredentials::new(true, Some(true), None);
        let (guard, nav) = guard(creds.clone());

        let decision = guard.evaluate(GuardConfig::authenticated()).await;

        assert_eq!(decision, AccessDecision::Authorized);
        assert_eq!(creds.admin_calls.load(Ordering::SeqCst), 0);
        assert!(nav.paths().is_empty());
    }

    /// Credentials whose validation call blocks until released, so a second
    /// evaluation can overtake the first.
    struct StalledCredentials {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl Credentials for StalledCredentials {
        fn is_authenticated(&self) -> bool {
            true
        }

        async fn validate_token(&self) -> Result<bool> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(false)
        }

        async fn is_admin(&self) -> Result<bool> {
            Ok(true)
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn parallel_evaluations_settle_to_a_terminal_decision() {
        let creds = FakeCredentials::new(true, Some(true), Some(true));
        let nav = Arc::new(RecordingNavigator::default());
        let guard = Arc::new(AccessGuard::new(creds, nav.clone()));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let guard = guard.clone();
                tokio::spawn(async move { guard.evaluate(GuardConfig::authenticated()).await })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap(), AccessDecision::Authorized);
        }

        // No interleaving may leave a stale Pending in the committed slot.
        assert!(!guard.decision().is_pending());
        assert!(nav.paths().is_empty());
    }

    #[tokio::test]
    async fn stale_check_cannot_override_newer_decision() {
        let creds = Arc::new(StalledCredentials {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let nav = Arc::new(RecordingNavigator::default());
        let guard = Arc::new(AccessGuard::new(creds.clone(), nav.clone()));

        let stalled = {
            let guard = guard.clone();
            tokio::spawn(async move { guard.evaluate(GuardConfig::authenticated()).await })
        };

        // Wait until the first evaluation is parked inside the validation call,
        // then start a newer one with different requirements.
        creds.entered.notified().await;
        let newer = guard.evaluate(GuardConfig::public()).await;
        assert_eq!(newer, AccessDecision::Authorized);

        creds.release.notify_one();
        stalled.await.unwrap();

        // The stale denial neither replaced the decision nor navigated.
        assert_eq!(guard.decision(), AccessDecision::Authorized);
        assert!(nav.paths().is_empty());
    }
}
