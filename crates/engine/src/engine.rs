//! The per-turn conversation pipeline
//!
//! One synchronous pass per turn: validate → resolve session → resolve
//! language → recognize intent → extract entities → dispatch → record.
//! Every failure is a typed result value; nothing propagates an unhandled
//! fault past the turn boundary.

use chrono::Duration;

use tourbot_config::Settings;
use tourbot_core::{
    Error, GuideId, Language, Result, TurnRecord, TurnReply,
};
use tourbot_nlu::{EntityExtractor, IntentRecognizer, LanguageDetector};

use crate::dispatch::ResponseDispatcher;
use crate::personality::Personalizer;
use crate::session::{Session, SessionStore};

/// The conversation engine: NLU components plus session state and dispatch.
///
/// All components are immutable after construction except the
/// [`SessionStore`], which serializes mutation per session key. Turns for
/// the same session must be delivered in order by the caller; the engine
/// does not reorder or deduplicate them.
pub struct ChatEngine {
    detector: LanguageDetector,
    recognizer: IntentRecognizer,
    extractor: EntityExtractor,
    store: SessionStore,
    dispatcher: ResponseDispatcher,
    default_language: Language,
    switch_threshold: f32,
}

impl ChatEngine {
    pub fn new(settings: &Settings) -> Self {
        let default_language = settings.engine.default_language();
        Self {
            detector: LanguageDetector::new(default_language),
            recognizer: IntentRecognizer::new(),
            extractor: EntityExtractor::new(),
            store: SessionStore::new(settings.engine.history_cap, settings.engine.max_sessions),
            dispatcher: ResponseDispatcher::new(Personalizer::new(&settings.personalization)),
            default_language,
            switch_threshold: settings.engine.language_switch_threshold,
        }
    }

    /// Create a conversation session for a user.
    pub fn create_session(&self, user_id: &str, language: Option<Language>) -> Result<String> {
        if user_id.trim().is_empty() {
            return Err(Error::InvalidInput("empty user id".into()));
        }
        self.store
            .create(user_id, language.unwrap_or(self.default_language))
    }

    /// Snapshot a session for inspection.
    pub fn session(&self, session_id: &str) -> Result<Session> {
        self.store.get(session_id)
    }

    /// Process one turn end to end.
    pub fn process_turn(
        &self,
        session_id: &str,
        text: &str,
        language_override: Option<Language>,
    ) -> Result<TurnReply> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("empty utterance".into()));
        }

        let mut session = self.store.get(session_id)?;

        // Language resolution: an explicit override wins outright; otherwise
        // a detection signal switches the session only above the threshold,
        // so the carried session language survives ambiguous turns.
        let turn_language = match language_override {
            Some(language) => {
                if session.language != language {
                    self.store.set_language(session_id, language);
                    session.language = language;
                }
                language
            }
            None => {
                let signal = self.detector.detect(trimmed);
                if signal.confidence > self.switch_threshold && signal.language != session.language
                {
                    tracing::debug!(
                        session_id,
                        from = session.language.code(),
                        to = signal.language.code(),
                        confidence = signal.confidence,
                        "switching session language"
                    );
                    self.store.set_language(session_id, signal.language);
                    session.language = signal.language;
                }
                signal.language
            }
        };

        let intent = self.recognizer.recognize(trimmed, session.language);
        let entities = self.extractor.extract(trimmed);
        let reply = self.dispatcher.dispatch(&session, &intent, &entities);

        self.store.append_turn(
            session_id,
            TurnRecord::new(text, turn_language, intent.kind, entities.clone(), &reply),
        )?;

        tracing::debug!(
            session_id,
            intent = intent.kind.as_str(),
            confidence = intent.confidence,
            entities = entities.len(),
            language = session.language.code(),
            "processed turn"
        );

        Ok(TurnReply {
            session_id: session_id.to_string(),
            reply,
            language: session.language,
            intent: intent.kind,
            confidence: intent.confidence,
            entities,
        })
    }

    /// Explicitly switch a session's language.
    pub fn set_language(&self, session_id: &str, language: Language) -> Result<()> {
        if self.store.set_language(session_id, language) {
            Ok(())
        } else {
            Err(Error::SessionNotFound(session_id.to_string()))
        }
    }

    /// Switch the active guide persona.
    pub fn set_guide(&self, session_id: &str, guide: GuideId) -> Result<()> {
        if self.store.set_guide(session_id, guide) {
            Ok(())
        } else {
            Err(Error::SessionNotFound(session_id.to_string()))
        }
    }

    /// Destroy a session. Returns false when it was already absent.
    pub fn reset(&self, session_id: &str) -> bool {
        self.store.reset(session_id)
    }

    /// Reset every session idle past `max_idle`; returns how many were
    /// removed. Called by the supervising sweeper, not by the pipeline.
    pub fn sweep_idle(&self, max_idle: Duration) -> usize {
        let idle = self.store.idle_session_ids(max_idle);
        let mut removed = 0;
        for id in idle {
            if self.store.reset(&id) {
                removed += 1;
            }
        }
        if removed > 0 {
            tracing::info!(removed, remaining = self.store.len(), "idle session sweep");
        }
        removed
    }

    pub fn active_sessions(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
