//! Pattern-based entity extraction
//!
//! Each entity kind carries a fixed regex set run over the lowercased
//! utterance. Matches become entities with a fixed confidence and their
//! character span; candidates are ordered by span start and deduplicated on
//! (kind, value), first occurrence winning. Cross-kind duplicates are kept:
//! "sigiriya" is both a location and an attraction.

use std::collections::HashSet;

use regex::Regex;

use tourbot_config::constants::extraction;
use tourbot_core::{Entity, EntityKind};

/// Regex sources per entity kind. City and attraction gazetteers cover the
/// destinations the assistant can talk about.
fn pattern_sources() -> [(EntityKind, &'static [&'static str]); 6] {
    [
        (
            EntityKind::Location,
            &[
                r"\b(colombo|kandy|galle|jaffna|batticaloa|matara|negombo|nuwara eliya|ella|sigiriya|dambulla|anuradhapura|polonnaruwa|trincomalee|bentota|hikkaduwa|mirissa|unawatuna|arugam bay)\b",
            ],
        ),
        (
            EntityKind::Attraction,
            &[
                r"\b(sigiriya|temple of (?:the )?tooth|galle fort|yala national park|horton plains|adams peak|nine arch bridge|royal botanical gardens|pinnawala elephant orphanage|dambulla cave temple)\b",
            ],
        ),
        (
            EntityKind::Time,
            &[
                r"\b(today|tomorrow|yesterday|next week|this week|weekend)\b",
                r"\b(morning|afternoon|evening|night)\b",
                r"\b(january|february|march|april|may|june|july|august|september|october|november|december)\b",
            ],
        ),
        (
            EntityKind::Budget,
            &[
                r"\b(budget|cheap|expensive|luxury|mid-range|affordable)\b",
                r"\b(?:under|less than|around|about) \$?\d+\b",
                r"\$\d+|\b\d+ dollars\b|\b\d+ rupees\b|\blkr \d+\b",
            ],
        ),
        (
            EntityKind::Duration,
            &[
                r"\b\d+\s+(?:day|days|week|weeks|month|months)\b",
                r"\b(few days|several days|one week|two weeks)\b",
            ],
        ),
        (
            EntityKind::Food,
            &[
                r"\b(rice and curry|string hoppers?|hoppers?|kottu|roti|sambol|curry)\b",
            ],
        ),
    ]
}

/// Pattern-driven extractor over the fixed entity tables
pub struct EntityExtractor {
    patterns: Vec<(EntityKind, Vec<Regex>)>,
}

impl EntityExtractor {
    /// Build the extractor, compiling every pattern once. A malformed
    /// pattern is skipped with a warning and simply yields no matches.
    pub fn new() -> Self {
        let patterns = pattern_sources()
            .into_iter()
            .map(|(kind, sources)| {
                let compiled = sources
                    .iter()
                    .filter_map(|source| match Regex::new(source) {
                        Ok(re) => Some(re),
                        Err(e) => {
                            tracing::warn!(
                                kind = kind.as_str(),
                                pattern = source,
                                "skipping malformed entity pattern: {e}"
                            );
                            None
                        }
                    })
                    .collect();
                (kind, compiled)
            })
            .collect();

        Self { patterns }
    }

    /// Extract all entities from an utterance, ordered by span start.
    ///
    /// Never fails: unmatched input yields an empty vector. Deterministic
    /// and idempotent.
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let lowered = text.to_lowercase();
        let mut found = Vec::new();

        for (kind, regexes) in &self.patterns {
            for re in regexes {
                for m in re.find_iter(&lowered) {
                    found.push(Entity::new(
                        *kind,
                        m.as_str(),
                        m.start(),
                        m.end(),
                        extraction::ENTITY_CONFIDENCE,
                    ));
                }
            }
        }

        found.sort_by_key(|entity| (entity.start, entity.end));

        let mut seen: HashSet<(EntityKind, String)> = HashSet::new();
        found.retain(|entity| seen.insert((entity.kind, entity.value.clone())));

        found
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
