//! Extracted entity types

use serde::{Deserialize, Serialize};

/// Kinds of domain entities the extractor recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A city or town
    Location,
    /// A named sight (Sigiriya, Galle Fort, ...)
    Attraction,
    /// A point or range in time
    Time,
    /// A spending level or amount
    Budget,
    /// A trip length
    Duration,
    /// A dish or cuisine term
    Food,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Attraction => "attraction",
            Self::Time => "time",
            Self::Budget => "budget",
            Self::Duration => "duration",
            Self::Food => "food",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed span of the utterance carrying a domain value.
///
/// Offsets index into the lowercased utterance the extractor scanned. Span
/// ordering is preserved in extractor output but carries no meaning beyond
/// presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f32,
}

impl Entity {
    pub fn new(
        kind: EntityKind,
        value: impl Into<String>,
        start: usize,
        end: usize,
        confidence: f32,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            start,
            end,
            confidence,
        }
    }
}
