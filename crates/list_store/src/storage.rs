//! Session storage trait and the in-memory implementation

use crate::error::{Result, StoreError};
use crate::structs::SessionState;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Session storage, keyed by the opaque per-browser session key.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load a session
    async fn load_session(&self, session_key: &str) -> Result<SessionState>;

    /// Save a session
    async fn save_session(&self, session_key: &str, state: &SessionState) -> Result<()>;

    /// Check if a session exists
    async fn session_exists(&self, session_key: &str) -> bool;

    /// Delete a session
    async fn delete_session(&self, session_key: &str) -> Result<()>;
}

struct StoredBlob {
    blob: String,
    touched: DateTime<Utc>,
}

/// In-memory session storage with a time-to-live.
///
/// Each session is held as an opaque JSON blob. An entry older than the
/// TTL is treated as absent on load, and [`purge_expired`](Self::purge_expired)
/// drops all such entries. Nothing survives process shutdown.
pub struct MemorySessionStorage {
    ttl: Duration,
    sessions: RwLock<HashMap<String, StoredBlob>>,
}

impl MemorySessionStorage {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::seconds(3600)),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn is_expired(&self, entry: &StoredBlob) -> bool {
        Utc::now() - entry.touched > self.ttl
    }

    /// Drop every expired session. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let ttl = self.ttl;
        sessions.retain(|_, entry| Utc::now() - entry.touched <= ttl);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!("Purged {} expired session(s)", purged);
        }
        purged
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load_session(&self, session_key: &str) -> Result<SessionState> {
        let sessions = self.sessions.read().await;
        match sessions.get(session_key) {
            Some(entry) if !self.is_expired(entry) => {
                let state: SessionState = serde_json::from_str(&entry.blob)?;
                Ok(state)
            }
            _ => Err(StoreError::SessionNotFound),
        }
    }

    async fn save_session(&self, session_key: &str, state: &SessionState) -> Result<()> {
        let blob = serde_json::to_string(state)?;
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            session_key.to_string(),
            StoredBlob {
                blob,
                touched: Utc::now(),
            },
        );
        Ok(())
    }

    async fn session_exists(&self, session_key: &str) -> bool {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_key)
            .map_or(false, |entry| !self.is_expired(entry))
    }

    async fn delete_session(&self, session_key: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> MemorySessionStorage {
        MemorySessionStorage::new(std::time::Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let storage = storage();

        let mut state = SessionState::new();
        state.create_list("Groceries").unwrap();
        storage.save_session("test", &state).await.unwrap();

        let loaded = storage.load_session("test").await.unwrap();
        assert_eq!(loaded.lists, state.lists);
    }

    #[tokio::test]
    async fn test_load_missing_session() {
        let storage = storage();

        let result = storage.load_session("nonexistent").await;
        assert!(matches!(result, Err(StoreError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let storage = storage();

        storage
            .save_session("test", &SessionState::new())
            .await
            .unwrap();
        assert!(storage.session_exists("test").await);

        storage.delete_session("test").await.unwrap();
        assert!(!storage.session_exists("test").await);
    }

    #[tokio::test]
    async fn test_expired_session_is_absent() {
        let storage = MemorySessionStorage::new(std::time::Duration::ZERO);

        storage
            .save_session("test", &SessionState::new())
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        assert!(!storage.session_exists("test").await);
        let result = storage.load_session("test").await;
        assert!(matches!(result, Err(StoreError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let storage = MemorySessionStorage::new(std::time::Duration::ZERO);

        storage
            .save_session("a", &SessionState::new())
            .await
            .unwrap();
        storage
            .save_session("b", &SessionState::new())
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        assert_eq!(storage.purge_expired().await, 2);
        assert_eq!(storage.purge_expired().await, 0);
    }
}
