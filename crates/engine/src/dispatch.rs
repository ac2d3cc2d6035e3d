//! Intent-to-response dispatch
//!
//! Maps (intent, language, entities, session) to a reply: a fixed match
//! selects the response family, the family selects the language variant
//! (degrading to English where unauthored), entities parameterize the text,
//! and the personalization layer wraps the result.

use tourbot_core::{Entity, EntityKind, IntentKind, RecognizedIntent};

use crate::personality::Personalizer;
use crate::session::Session;
use crate::templates;

/// Deterministic template selection plus probabilistic framing
pub struct ResponseDispatcher {
    personalizer: Personalizer,
}

impl ResponseDispatcher {
    pub fn new(personalizer: Personalizer) -> Self {
        Self { personalizer }
    }

    /// Build the reply for a recognized turn.
    pub fn dispatch(
        &self,
        session: &Session,
        intent: &RecognizedIntent,
        entities: &[Entity],
    ) -> String {
        let language = session.language;
        let guide = session.guide.profile();

        let base = match intent.kind {
            IntentKind::Greeting => templates::GREETING.select(language).to_string(),
            IntentKind::AttractionInquiry => attraction_reply(language, entities),
            IntentKind::FoodInquiry => templates::FOOD.select(language).to_string(),
            IntentKind::TransportInquiry => templates::TRANSPORT.select(language).to_string(),
            IntentKind::AccommodationInquiry => {
                templates::ACCOMMODATION.select(language).to_string()
            }
            IntentKind::WeatherInquiry => templates::WEATHER.select(language).to_string(),
            IntentKind::HelpInquiry => templates::HELP.select(language).to_string(),
            IntentKind::FollowUp => templates::FOLLOW_UP.select(language).to_string(),
            IntentKind::Clarification => templates::CLARIFICATION.select(language).to_string(),
            IntentKind::Farewell => templates::FAREWELL
                .select(language)
                .replace("{guide}", guide.display_name),
            // Terminal no-signal classification: generic fallback, not an error
            IntentKind::Unknown => templates::UNKNOWN.select(language).to_string(),
        };

        self.personalizer.personalize(
            &base,
            intent.kind,
            language,
            guide,
            !session.history.is_empty(),
        )
    }
}

/// A location or attraction entity parameterizes the detail template; its
/// absence selects the generic overview instead of erroring.
fn attraction_reply(language: tourbot_core::Language, entities: &[Entity]) -> String {
    let place = entities
        .iter()
        .find(|entity| matches!(entity.kind, EntityKind::Location | EntityKind::Attraction));

    match place {
        Some(entity) => templates::ATTRACTION_DETAIL
            .select(language)
            .replace("{location}", &title_case(&entity.value)),
        None => templates::ATTRACTION_OVERVIEW.select(language).to_string(),
    }
}

/// Capitalize each ASCII word of a gazetteer value ("nuwara eliya" ->
/// "Nuwara Eliya"). Non-Latin values pass through unchanged.
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tourbot_config::PersonalizationConfig;
    use tourbot_core::{GuideId, Language};

    fn dispatcher() -> ResponseDispatcher {
        ResponseDispatcher::new(Personalizer::new(&PersonalizationConfig {
            seed: Some(99),
            ..Default::default()
        }))
    }

    fn session(language: Language) -> Session {
        Session {
            id: "test".into(),
            user_id: "u".into(),
            language,
            guide: GuideId::Saru,
            history: Vec::new(),
            created_at: Utc::now(),
            last_interaction: Utc::now(),
        }
    }

    fn recognized(kind: IntentKind) -> RecognizedIntent {
        RecognizedIntent {
            kind,
            confidence: 0.9,
            alternatives: vec![],
        }
    }

    #[test]
    fn test_attraction_with_location_is_parameterized() {
        let reply = dispatcher().dispatch(
            &session(Language::English),
            &recognized(IntentKind::AttractionInquiry),
            &[Entity::new(EntityKind::Location, "nuwara eliya", 0, 12, 0.8)],
        );
        assert!(reply.contains("Nuwara Eliya"));
        assert!(!reply.contains("{location}"));
    }

    #[test]
    fn test_attraction_without_entities_is_generic() {
        let reply = dispatcher().dispatch(
            &session(Language::English),
            &recognized(IntentKind::AttractionInquiry),
            &[],
        );
        assert!(reply.contains("Sigiriya"));
    }

    #[test]
    fn test_farewell_signed_by_guide() {
        let reply = dispatcher().dispatch(
            &session(Language::English),
            &recognized(IntentKind::Farewell),
            &[],
        );
        assert!(reply.contains("Saru"));
        assert!(!reply.contains("{guide}"));
    }

    #[test]
    fn test_unknown_intent_gets_fallback_reply() {
        let reply = dispatcher().dispatch(
            &session(Language::English),
            &recognized(IntentKind::Unknown),
            &[],
        );
        assert!(reply.contains("not sure I understand"));
    }

    #[test]
    fn test_sinhala_reply_is_localized() {
        let reply = dispatcher().dispatch(
            &session(Language::Sinhala),
            &recognized(IntentKind::FoodInquiry),
            &[],
        );
        assert!(reply.contains("ආප්ප"));
    }

    #[test]
    fn test_french_food_degrades_to_english() {
        let reply = dispatcher().dispatch(
            &session(Language::French),
            &recognized(IntentKind::FoodInquiry),
            &[],
        );
        assert!(reply.contains("Sri Lankan cuisine"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("kandy"), "Kandy");
        assert_eq!(title_case("nuwara eliya"), "Nuwara Eliya");
        assert_eq!(title_case("galle fort"), "Galle Fort");
    }
}
