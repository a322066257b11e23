//! Conversation state
//!
//! One `ConversationState` per chat session, owned by the policy engine
//! for the session's lifetime. The `SessionStore` keeps live sessions for
//! the API surface; nothing survives process shutdown.

use crate::models::{ContactFields, Step};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Mutable session record: current step, collected fields, reply-variation
/// counters, and the cooperative processing guard.
#[derive(Debug, Clone)]
pub struct ConversationState {
    pub step: Step,
    pub fields: ContactFields,
    pub greeting_count: u32,
    pub gibberish_count: u32,
    pub vulgarity_count: u32,
    /// Set the first time vulgar input triggers the guardian joke.
    pub guardian_joke_fired: bool,
    /// Cooperative mutex: input arriving while a reply sequence is being
    /// delivered is dropped, not queued.
    pub is_processing: bool,
    /// Whether the contact record has already been handed to the sink.
    pub submitted: bool,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            step: Step::Initial,
            fields: ContactFields::default(),
            greeting_count: 0,
            gibberish_count: 0,
            vulgarity_count: 0,
            guardian_joke_fired: false,
            is_processing: false,
            submitted: false,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store of live sessions, keyed by session id.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ConversationState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Load a session, creating a fresh one on first sight of the id.
    pub async fn get_or_create(&self, session_id: Uuid) -> ConversationState {
        {
            let sessions = self.sessions.read().await;
            if let Some(state) = sessions.get(&session_id) {
                return state.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id)
            .or_insert_with(ConversationState::new)
            .clone()
    }

    /// Run `f` against a session while holding the store's write lock,
    /// creating the session on first sight of the id. Concurrent turns for
    /// the same session serialize here instead of racing a load-mutate-save
    /// round trip.
    pub async fn with_session<F, T>(&self, session_id: Uuid, f: F) -> T
    where
        F: FnOnce(&mut ConversationState) -> T,
    {
        let mut sessions = self.sessions.write().await;
        let state = sessions
            .entry(session_id)
            .or_insert_with(ConversationState::new);
        f(state)
    }

    pub async fn save(&self, session_id: Uuid, state: ConversationState) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, state);
    }

    pub async fn remove(&self, session_id: Uuid) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&session_id);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_invariants() {
        let state = ConversationState::new();
        assert_eq!(state.step, Step::Initial);
        assert!(!state.is_processing);
        assert!(!state.guardian_joke_fired);
        assert_eq!(state.greeting_count, 0);
    }

    #[tokio::test]
    async fn test_store_round_trip() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        let mut state = store.get_or_create(id).await;
        state.step = Step::AskEmail;
        state.fields.name = Some("Maya".into());
        store.save(id, state).await;

        let reloaded = store.get_or_create(id).await;
        assert_eq!(reloaded.step, Step::AskEmail);
        assert_eq!(reloaded.fields.name.as_deref(), Some("Maya"));

        store.remove(id).await;
        let fresh = store.get_or_create(id).await;
        assert_eq!(fresh.step, Step::Initial);
    }
}
