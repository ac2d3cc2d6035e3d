//! Fixed tuning constants of the detection and recognition pipeline
//!
//! These are algorithmic calibration values, not deployment knobs, so they
//! live here rather than in the settings file. Deployment-level knobs
//! (history cap, switch threshold, TTLs) are in [`crate::Settings`].

/// Language detection scoring
pub mod detection {
    /// Cap on the script-ratio component of a language score
    pub const SCRIPT_SCORE_CAP: f32 = 0.8;

    /// Cap on the keyword-fraction component of a language score
    pub const KEYWORD_SCORE_CAP: f32 = 0.6;

    /// Flat bonus when any greeting pattern of the language matches
    pub const GREETING_BONUS: f32 = 0.4;

    /// Winning scores below this floor are overridden to the default language
    pub const CONFIDENCE_FLOOR: f32 = 0.3;

    /// Confidence reported when detection falls back to the default language
    pub const FALLBACK_CONFIDENCE: f32 = 0.5;
}

/// Intent recognition scoring
pub mod recognition {
    /// Fixed confidence of the follow-up contextual rule
    pub const FOLLOW_UP_CONFIDENCE: f32 = 0.8;

    /// Fixed confidence of the clarification contextual rule
    pub const CLARIFICATION_CONFIDENCE: f32 = 0.9;

    /// Per-hit score step of the keyword-only secondary pass
    pub const SECONDARY_PASS_STEP: f32 = 0.3;

    /// Alternatives below this fused score are discarded as noise
    pub const ALTERNATIVE_MIN_SCORE: f32 = 0.3;

    /// Maximum number of reported alternative intents
    pub const ALTERNATIVES_MAX: usize = 3;
}

/// Entity extraction
pub mod extraction {
    /// Confidence assigned to every pattern-matched entity
    pub const ENTITY_CONFIDENCE: f32 = 0.8;
}
