//! Session registry.
//!
//! Holds the tokens of logged-in users. Created at login, read by the access
//! guard on every protected request, removed on logout or failed validation.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::AdminType;

/// A live session record, keyed by its token.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// User ID the token was issued to.
    pub user_id: String,
    /// Administrator tier at login time.
    pub admin_type: AdminType,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

/// Storage for live sessions.
///
/// The guard only ever reads this store; login and logout flows write it.
pub trait SessionStore: Send + Sync {
    /// Look up a session by token.
    fn get(&self, token: &str) -> Option<SessionRecord>;

    /// Register a session for a freshly issued token.
    fn insert(&self, token: String, record: SessionRecord);

    /// Drop a session. Returns true if the token was present.
    fn remove(&self, token: &str) -> bool;

    /// Number of live sessions.
    fn len(&self) -> usize;

    /// Whether the store holds no sessions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory session store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: dashmap::DashMap<String, SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, token: &str) -> Option<SessionRecord> {
        self.sessions.get(token).map(|entry| entry.clone())
    }

    fn insert(&self, token: String, record: SessionRecord) {
        self.sessions.insert(token, record);
    }

    fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: &str) -> SessionRecord {
        SessionRecord {
            user_id: user_id.to_string(),
            admin_type: AdminType::None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_get_remove() {
        let store = MemorySessionStore::new();
        assert!(store.is_empty());

        store.insert("tok1".to_string(), record("alice"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("tok1").unwrap().user_id, "alice");
        assert!(store.get("tok2").is_none());

        assert!(store.remove("tok1"));
        assert!(!store.remove("tok1"));
        assert!(store.is_empty());
    }
}
