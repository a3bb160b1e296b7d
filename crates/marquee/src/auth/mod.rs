//! Authentication module.
//!
//! Provides session state and the validation capability consumed by the
//! access guard:
//! - JWT claims with administrator tiers
//! - an injectable session registry
//! - token issuing and validation against the registry

mod claims;
mod config;
mod error;
mod service;
mod session;

pub use claims::{AdminType, Claims};
pub use config::{AuthConfig, ConfigValidationError, DemoUser};
pub use error::AuthError;
pub use service::AuthService;
pub use session::{MemorySessionStore, SessionRecord, SessionStore};
