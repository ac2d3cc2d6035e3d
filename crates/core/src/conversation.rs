//! Conversation types: per-turn records and the exposed turn contract

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, IntentKind, Language};

/// One completed turn as stored in session history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// When the turn was processed
    pub timestamp: DateTime<Utc>,
    /// Raw user utterance
    pub user_message: String,
    /// Language the detector reported for this utterance
    pub language: Language,
    /// Winning intent
    pub intent: IntentKind,
    /// Entities extracted from the utterance
    pub entities: Vec<Entity>,
    /// The reply that was sent back
    pub reply: String,
}

impl TurnRecord {
    pub fn new(
        user_message: impl Into<String>,
        language: Language,
        intent: IntentKind,
        entities: Vec<Entity>,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_message: user_message.into(),
            language,
            intent,
            entities,
            reply: reply.into(),
        }
    }
}

/// The per-turn output contract exposed to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReply {
    pub session_id: String,
    /// Final, personalized reply text
    pub reply: String,
    /// The session's resolved language after this turn
    pub language: Language,
    pub intent: IntentKind,
    pub confidence: f32,
    pub entities: Vec<Entity>,
}
