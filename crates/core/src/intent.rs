//! Intent classification types

use serde::{Deserialize, Serialize};

/// The closed set of things a visitor can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Greeting,
    Farewell,
    AttractionInquiry,
    FoodInquiry,
    TransportInquiry,
    AccommodationInquiry,
    WeatherInquiry,
    HelpInquiry,
    /// Continuation of the previous topic ("also", "what else", ...)
    FollowUp,
    /// The visitor did not understand the last reply
    Clarification,
    #[default]
    Unknown,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::AttractionInquiry => "attraction_inquiry",
            Self::FoodInquiry => "food_inquiry",
            Self::TransportInquiry => "transport_inquiry",
            Self::AccommodationInquiry => "accommodation_inquiry",
            Self::WeatherInquiry => "weather_inquiry",
            Self::HelpInquiry => "help_inquiry",
            Self::FollowUp => "follow_up",
            Self::Clarification => "clarification",
            Self::Unknown => "unknown",
        }
    }

    /// All recognizable intents, in declaration order.
    ///
    /// Declaration order is also the tie-break order during score fusion, so
    /// recognition stays deterministic when two intents score identically.
    pub fn all() -> &'static [IntentKind] {
        &[
            Self::Greeting,
            Self::Farewell,
            Self::AttractionInquiry,
            Self::FoodInquiry,
            Self::TransportInquiry,
            Self::AccommodationInquiry,
            Self::WeatherInquiry,
            Self::HelpInquiry,
            Self::FollowUp,
            Self::Clarification,
        ]
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A competing intent with its fused score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredIntent {
    pub kind: IntentKind,
    pub score: f32,
}

/// Result of intent recognition for one utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedIntent {
    /// Winning intent
    pub kind: IntentKind,
    /// Normalized confidence in [0, 1] reflecting cross-detector agreement
    pub confidence: f32,
    /// Runner-up intents, ranked descending, capped at 3
    pub alternatives: Vec<ScoredIntent>,
}

impl RecognizedIntent {
    /// The terminal "no signal" classification. Not an error: dispatch
    /// handles it with a generic fallback reply.
    pub fn unknown() -> Self {
        Self {
            kind: IntentKind::Unknown,
            confidence: 0.0,
            alternatives: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == IntentKind::Unknown
    }
}
