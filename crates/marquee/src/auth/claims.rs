//! JWT claims and administrator tiers.

use serde::{Deserialize, Serialize};

/// Administrator tier attached to an account.
///
/// Regular moviegoers carry `None`. Cinema administrators manage a single
/// cinema; system administrators manage the whole platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminType {
    /// Regular user, no elevated permissions.
    #[default]
    None,
    /// Administrator of a single cinema.
    Cinema,
    /// Platform-wide administrator.
    System,
}

impl std::fmt::Display for AdminType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminType::None => write!(f, "none"),
            AdminType::Cinema => write!(f, "cinema"),
            AdminType::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for AdminType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(AdminType::None),
            "cinema" => Ok(AdminType::Cinema),
            "system" => Ok(AdminType::System),
            _ => Err(format!("unknown admin type: {}", s)),
        }
    }
}

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Administrator tier.
    #[serde(default)]
    pub admin_type: AdminType,

    /// ID of the cinema this user manages, for cinema administrators.
    #[serde(default)]
    pub managed_cinema_id: Option<u64>,

    /// Expiration time (Unix timestamp).
    pub exp: i64,

    /// Issued at (Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
}

impl Claims {
    /// Whether this user holds any elevated role.
    pub fn is_admin(&self) -> bool {
        self.admin_type != AdminType::None
    }

    /// Whether this user is a platform-wide administrator.
    pub fn is_system_admin(&self) -> bool {
        self.admin_type == AdminType::System
    }

    /// Display name, falling back to the subject.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.sub)
    }
}
