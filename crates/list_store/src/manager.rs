//! Multi-session manager - the per-request facade over session storage.
//!
//! Every operation loads the session at the start, applies one mutation
//! and persists the result, so request handlers never hold state across
//! calls. Two concurrent requests on the same session are not serialized;
//! the last write to the blob wins.

use crate::error::{Result, StoreError};
use crate::storage::SessionStorage;
use crate::structs::{Flash, SessionState};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct SessionManager<S: SessionStorage> {
    storage: Arc<S>,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Shared handle to the underlying storage.
    pub fn storage(&self) -> Arc<S> {
        Arc::clone(&self.storage)
    }

    /// Get the session for a key, creating it empty on first touch.
    pub async fn state(&self, session_key: &str) -> Result<SessionState> {
        match self.storage.load_session(session_key).await {
            Ok(state) => Ok(state),
            Err(StoreError::SessionNotFound) => {
                let state = SessionState::new();
                self.storage.save_session(session_key, &state).await?;
                Ok(state)
            }
            Err(e) => Err(e),
        }
    }

    /// Load the session and consume its pending flash in one step, for
    /// rendering a view. The cleared flash is persisted immediately.
    pub async fn state_for_render(
        &self,
        session_key: &str,
    ) -> Result<(SessionState, Option<Flash>)> {
        let mut state = self.state(session_key).await?;
        let flash = state.take_flash();
        if flash.is_some() {
            self.persist(session_key, state.clone()).await?;
        }
        Ok((state, flash))
    }

    /// Store a one-shot flash message for the next rendered view.
    pub async fn set_flash(&self, session_key: &str, flash: Flash) -> Result<()> {
        let mut state = self.state(session_key).await?;
        state.set_flash(flash);
        self.persist(session_key, state).await
    }

    pub async fn create_list(&self, session_key: &str, name: &str) -> Result<Uuid> {
        let mut state = self.state(session_key).await?;
        let id = state.create_list(name)?;
        self.persist(session_key, state).await?;
        Ok(id)
    }

    pub async fn rename_list(&self, session_key: &str, list_id: Uuid, new_name: &str) -> Result<()> {
        let mut state = self.state(session_key).await?;
        state.rename_list(list_id, new_name)?;
        self.persist(session_key, state).await
    }

    pub async fn delete_list(&self, session_key: &str, list_id: Uuid) -> Result<()> {
        let mut state = self.state(session_key).await?;
        state.delete_list(list_id)?;
        self.persist(session_key, state).await
    }

    pub async fn add_todo(&self, session_key: &str, list_id: Uuid, text: &str) -> Result<Uuid> {
        let mut state = self.state(session_key).await?;
        let id = state.add_todo(list_id, text)?;
        self.persist(session_key, state).await?;
        Ok(id)
    }

    pub async fn set_todo_completion(
        &self,
        session_key: &str,
        list_id: Uuid,
        todo_id: Uuid,
        completed: bool,
    ) -> Result<()> {
        let mut state = self.state(session_key).await?;
        state.set_todo_completion(list_id, todo_id, completed)?;
        self.persist(session_key, state).await
    }

    pub async fn delete_todo(&self, session_key: &str, list_id: Uuid, todo_id: Uuid) -> Result<()> {
        let mut state = self.state(session_key).await?;
        state.delete_todo(list_id, todo_id)?;
        self.persist(session_key, state).await
    }

    pub async fn complete_all(&self, session_key: &str, list_id: Uuid) -> Result<()> {
        let mut state = self.state(session_key).await?;
        state.complete_all(list_id)?;
        self.persist(session_key, state).await
    }

    async fn persist(&self, session_key: &str, mut state: SessionState) -> Result<()> {
        state.last_updated = Utc::now();
        self.storage.save_session(session_key, &state).await
    }
}
