//! Session store
//!
//! The only mutable shared state in the engine. Sessions are keyed by a
//! generated identifier; the backing `DashMap` serializes mutation per key
//! while letting turns for different sessions proceed in parallel. Reads
//! hand out snapshots so no lock is held while a caller serializes one.
//!
//! A session is either present (active) or absent; there is no internal
//! "expired" state. TTL expiry is an external policy: a supervisor calls
//! [`SessionStore::idle_session_ids`] and resets what it finds (the server
//! crate runs such a sweeper).

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tourbot_core::{Error, GuideId, Language, Result, TurnRecord};

/// Per-conversation mutable state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Current language; switched explicitly or by a high-confidence
    /// detection signal
    pub language: Language,
    /// Active tour guide persona
    pub guide: GuideId,
    /// Bounded conversation history, oldest first
    pub history: Vec<TurnRecord>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last processed turn or mutation
    pub last_interaction: DateTime<Utc>,
}

impl Session {
    fn new(user_id: impl Into<String>, language: Language) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            language,
            guide: GuideId::default(),
            history: Vec::new(),
            created_at: now,
            last_interaction: now,
        }
    }

    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}

/// Concurrent, capacity-capped session store
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    history_cap: usize,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(history_cap: usize, max_sessions: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            history_cap,
            max_sessions,
        }
    }

    /// Create a session and return its generated identifier.
    pub fn create(&self, user_id: &str, language: Language) -> Result<String> {
        if self.sessions.len() >= self.max_sessions {
            return Err(Error::SessionLimitReached(self.sessions.len()));
        }

        let session = Session::new(user_id, language);
        let id = session.id.clone();
        self.sessions.insert(id.clone(), session);

        tracing::info!(session_id = %id, user_id, "created session");
        Ok(id)
    }

    /// Snapshot a session. Lookups never create sessions.
    pub fn get(&self, id: &str) -> Result<Session> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    /// Append a turn, then truncate history FIFO to the cap and stamp the
    /// interaction time. Bounded memory regardless of conversation length.
    pub fn append_turn(&self, id: &str, record: TurnRecord) -> Result<()> {
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))?;

        entry.history.push(record);
        let len = entry.history.len();
        if len > self.history_cap {
            entry.history.drain(0..len - self.history_cap);
        }
        entry.last_interaction = Utc::now();
        Ok(())
    }

    /// Switch the session language. Returns false when the session does not
    /// exist; never creates one as a side effect.
    pub fn set_language(&self, id: &str, language: Language) -> bool {
        match self.sessions.get_mut(id) {
            Some(mut entry) => {
                entry.language = language;
                entry.last_interaction = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Switch the active guide persona. Same contract as [`set_language`].
    ///
    /// [`set_language`]: SessionStore::set_language
    pub fn set_guide(&self, id: &str, guide: GuideId) -> bool {
        match self.sessions.get_mut(id) {
            Some(mut entry) => {
                entry.guide = guide;
                entry.last_interaction = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Destroy a session. Returns false when it was already absent.
    pub fn reset(&self, id: &str) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::info!(session_id = %id, "reset session");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Sessions whose last interaction is older than `max_idle`, for the
    /// external TTL sweeper.
    pub fn idle_session_ids(&self, max_idle: Duration) -> Vec<String> {
        let cutoff = Utc::now() - max_idle;
        self.sessions
            .iter()
            .filter(|entry| entry.last_interaction < cutoff)
            .map(|entry| entry.key().clone())
            .collect()
    }
}
