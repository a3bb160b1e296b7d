//! Authentication configuration.

use super::AdminType;
use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT secret for HS256 token signing.
    ///
    /// Supports `env:VAR_NAME` syntax to read the secret from the environment.
    pub jwt_secret: Option<String>,

    /// Token lifetime in seconds.
    pub token_ttl_secs: i64,

    /// Demo accounts available for login. Passwords are stored as bcrypt hashes.
    pub demo_users: Vec<DemoUser>,

    /// Allowed CORS origins.
    pub allowed_origins: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: 60 * 60 * 24,
            demo_users: Vec::new(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8080".to_string(),
            ],
        }
    }
}

impl AuthConfig {
    /// Resolve the JWT secret, expanding `env:VAR_NAME` syntax.
    pub fn resolve_jwt_secret(&self) -> Result<Option<String>, ConfigValidationError> {
        match &self.jwt_secret {
            None => Ok(None),
            Some(value) => {
                if let Some(var_name) = value.strip_prefix("env:") {
                    match std::env::var(var_name) {
                        Ok(secret) if !secret.is_empty() => Ok(Some(secret)),
                        Ok(_) => Err(ConfigValidationError::EnvVarEmpty(var_name.to_string())),
                        Err(_) => Err(ConfigValidationError::EnvVarNotFound(var_name.to_string())),
                    }
                } else {
                    Ok(Some(value.clone()))
                }
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let secret = self.resolve_jwt_secret()?;

        match secret {
            None => Err(ConfigValidationError::MissingJwtSecret),
            Some(secret) if secret.len() < 32 => Err(ConfigValidationError::JwtSecretTooShort),
            Some(_) => Ok(()),
        }
    }

    /// Generate a random JWT secret using the OS-backed RNG.
    pub fn generate_jwt_secret() -> String {
        use rand::Rng;

        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
        const SECRET_LENGTH: usize = 64;

        let mut rng = rand::rng();
        (0..SECRET_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// The demo accounts shipped with the template.
    ///
    /// Hashing happens at startup so no password material is checked in.
    pub fn default_demo_users() -> Vec<DemoUser> {
        vec![
            DemoUser::new(
                "moviefan",
                "Movie Fan",
                "fan@example.com",
                "fanpassword123",
                AdminType::None,
                None,
            ),
            DemoUser::new(
                "cinema-admin",
                "Cinema Admin",
                "cinema@example.com",
                "cinemapassword123",
                AdminType::Cinema,
                Some(1),
            ),
            DemoUser::new(
                "sysadmin",
                "System Admin",
                "admin@example.com",
                "adminpassword123",
                AdminType::System,
                None,
            ),
        ]
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// JWT secret is required.
    MissingJwtSecret,
    /// JWT secret is too short (minimum 32 characters).
    JwtSecretTooShort,
    /// Environment variable not found (for `env:VAR_NAME` syntax).
    EnvVarNotFound(String),
    /// Environment variable is empty (for `env:VAR_NAME` syntax).
    EnvVarEmpty(String),
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingJwtSecret => {
                write!(
                    f,
                    "JWT secret is required. Set auth.jwt_secret in the config file or the MARQUEE__AUTH__JWT_SECRET environment variable."
                )
            }
            Self::JwtSecretTooShort => {
                write!(f, "JWT secret must be at least 32 characters long.")
            }
            Self::EnvVarNotFound(var) => {
                write!(
                    f,
                    "Environment variable '{}' not found (referenced via env:{} in config).",
                    var, var
                )
            }
            Self::EnvVarEmpty(var) => {
                write!(
                    f,
                    "Environment variable '{}' is empty (referenced via env:{} in config).",
                    var, var
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// A demo account configured for the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoUser {
    /// User ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password hash (bcrypt).
    pub password_hash: String,
    /// Administrator tier.
    pub admin_type: AdminType,
    /// Managed cinema, for cinema administrators.
    pub managed_cinema_id: Option<u64>,
}

impl DemoUser {
    /// Build a demo user, hashing the given password.
    pub fn new(
        id: &str,
        name: &str,
        email: &str,
        password: &str,
        admin_type: AdminType,
        managed_cinema_id: Option<u64>,
    ) -> Self {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .expect("bcrypt hashing of a static password cannot fail");
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            admin_type,
            managed_cinema_id,
        }
    }

    /// Verify a password against this user's hash.
    pub fn verify_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.password_hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(config.jwt_secret.is_none());
        assert!(config.demo_users.is_empty());
        assert_eq!(config.token_ttl_secs, 86400);
    }

    #[test]
    fn test_demo_user_password_verification() {
        let user = DemoUser::new(
            "test",
            "Test",
            "test@example.com",
            "correctpassword",
            AdminType::None,
            None,
        );

        assert!(user.password_hash.starts_with("$2"));
        assert!(user.verify_password("correctpassword"));
        assert!(!user.verify_password("wrongpassword"));
        assert!(!user.verify_password(""));
    }

    #[test]
    fn test_config_validation_no_secret() {
        let config = AuthConfig::default();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigValidationError::MissingJwtSecret
        );
    }

    #[test]
    fn test_config_validation_short_secret() {
        let config = AuthConfig {
            jwt_secret: Some("tooshort".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigValidationError::JwtSecretTooShort
        );
    }

    #[test]
    fn test_config_validation_valid() {
        let config = AuthConfig {
            jwt_secret: Some("a-long-enough-secret-for-hs256-signing-keys".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_jwt_secret_env_var() {
        // SAFETY: test-only environment variable with a unique name
        unsafe {
            std::env::set_var("MARQUEE_TEST_SECRET_93152", "secret-from-env");
        }

        let config = AuthConfig {
            jwt_secret: Some("env:MARQUEE_TEST_SECRET_93152".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_jwt_secret().unwrap(),
            Some("secret-from-env".to_string())
        );

        // SAFETY: cleaning up test environment variable
        unsafe {
            std::env::remove_var("MARQUEE_TEST_SECRET_93152");
        }
    }

    #[test]
    fn test_resolve_jwt_secret_env_var_not_found() {
        let config = AuthConfig {
            jwt_secret: Some("env:MARQUEE_NONEXISTENT_93152".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_jwt_secret().unwrap_err(),
            ConfigValidationError::EnvVarNotFound("MARQUEE_NONEXISTENT_93152".to_string())
        );
    }

    #[test]
    fn test_generate_jwt_secret() {
        let secret = AuthConfig::generate_jwt_secret();
        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_default_demo_users_tiers() {
        let users = AuthConfig::default_demo_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].admin_type, AdminType::None);
        assert_eq!(users[1].admin_type, AdminType::Cinema);
        assert_eq!(users[1].managed_cinema_id, Some(1));
        assert_eq!(users[2].admin_type, AdminType::System);
    }
}
