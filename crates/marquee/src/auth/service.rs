//! Token issuing and validation.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, info};

use crate::auth::AdminType;

use super::config::{AuthConfig, DemoUser};
use super::error::AuthError;
use super::session::{SessionRecord, SessionStore};
use super::Claims;

/// Issues session tokens and validates them against the session registry.
///
/// This is the authority the access guard's `validate_token` capability talks
/// to: a token is valid only while it decodes, has not expired, and still has a
/// live session behind it.
#[derive(Clone)]
pub struct AuthService {
    inner: Arc<Inner>,
}

struct Inner {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    sessions: Arc<dyn SessionStore>,
    /// Live user registry, seeded from the configured demo accounts.
    users: DashMap<String, DemoUser>,
}

impl AuthService {
    /// Build the service from validated configuration.
    pub fn new(config: AuthConfig, sessions: Arc<dyn SessionStore>) -> Result<Self, AuthError> {
        config
            .validate()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let secret = config
            .resolve_jwt_secret()
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| AuthError::Internal("jwt secret missing after validation".to_string()))?;

        let users = DashMap::new();
        for user in &config.demo_users {
            users.insert(user.id.clone(), user.clone());
        }

        Ok(Self {
            inner: Arc::new(Inner {
                encoding_key: EncodingKey::from_secret(secret.as_bytes()),
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
                config,
                sessions,
                users,
            }),
        })
    }

    /// The configured demo accounts.
    pub fn demo_users(&self) -> &[DemoUser] {
        &self.inner.config.demo_users
    }

    /// Configured token lifetime in seconds.
    pub fn token_ttl_secs(&self) -> i64 {
        self.inner.config.token_ttl_secs
    }

    /// Allowed CORS origins.
    pub fn allowed_origins(&self) -> &[String] {
        &self.inner.config.allowed_origins
    }

    /// The session registry this service writes to.
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.inner.sessions
    }

    /// Number of registered users, demo accounts included.
    pub fn user_count(&self) -> usize {
        self.inner.users.len()
    }

    /// Look up a registered user by ID.
    pub fn user(&self, id: &str) -> Option<DemoUser> {
        self.inner.users.get(id).map(|entry| entry.clone())
    }

    /// Check a username/password pair against the user registry.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Option<DemoUser> {
        self.inner
            .users
            .get(username)
            .filter(|user| user.verify_password(password))
            .map(|entry| entry.clone())
    }

    /// Register a new account. New users start as regular members.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        name: &str,
        email: &str,
    ) -> Result<DemoUser, AuthError> {
        if username.len() < 3 || !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(AuthError::InvalidRegistration(
                "username must be at least 3 characters, alphanumeric or '-'".to_string(),
            ));
        }
        if password.len() < 6 {
            return Err(AuthError::InvalidRegistration(
                "password must be at least 6 characters".to_string(),
            ));
        }
        let display_name = if name.is_empty() { username } else { name };

        // Uniqueness check and insert are one atomic entry operation.
        match self.inner.users.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AuthError::UsernameTaken(username.to_string())),
            Entry::Vacant(slot) => {
                let user =
                    DemoUser::new(username, display_name, email, password, AdminType::None, None);
                slot.insert(user.clone());
                info!(user_id = %username, "user registered");
                Ok(user)
            }
        }
    }

    /// Issue a token for a user and register the session.
    pub fn issue_token(&self, user: &DemoUser) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            admin_type: user.admin_type,
            managed_cinema_id: user.managed_cinema_id,
            exp: (now + chrono::Duration::seconds(self.inner.config.token_ttl_secs)).timestamp(),
            iat: Some(now.timestamp()),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.inner.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token encoding failed: {}", e)))?;

        self.inner.sessions.insert(
            token.clone(),
            SessionRecord {
                user_id: user.id.clone(),
                admin_type: user.admin_type,
                created_at: now,
            },
        );

        info!(user_id = %user.id, "session created");
        Ok(token)
    }

    /// Decode a token without consulting the session registry.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.inner.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }

    /// Confirm a token is still valid with the authority that issued it.
    ///
    /// A token that fails to decode or has lost its session resolves to
    /// `false`; the dead session is dropped from the registry so later checks
    /// short-circuit on the local presence test.
    pub fn validate_token(&self, token: &str) -> Result<bool, AuthError> {
        match self.decode_claims(token) {
            Ok(_) => {}
            Err(AuthError::TokenExpired) | Err(AuthError::InvalidToken(_)) => {
                if self.inner.sessions.remove(token) {
                    debug!("dropped session for unvalidatable token");
                }
                return Ok(false);
            }
            Err(e) => return Err(e),
        }

        Ok(self.inner.sessions.get(token).is_some())
    }

    /// End the session behind a token.
    pub fn logout(&self, token: &str) {
        if self.inner.sessions.remove(token) {
            info!("session ended");
        }
    }
}
