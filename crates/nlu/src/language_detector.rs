//! Heuristic language detection
//!
//! Scores every supported language from three signals and picks the best:
//! - fraction of alphabetic characters in the language's distinctive script
//!   (capped at 0.8; zero for Latin-script languages, which share their
//!   character range with romanized text in every language)
//! - fraction of the language's keyword list present in the lowercased text
//!   (capped at 0.6)
//! - a flat 0.4 bonus when a greeting pattern of the language matches
//!
//! Short or ambiguous text degrades to the default language at confidence
//! 0.5 rather than to a low-confidence non-default guess.

use regex::Regex;
use serde::{Deserialize, Serialize};

use tourbot_config::constants::detection;
use tourbot_core::{Language, Script};

/// A detected language with its confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageSignal {
    pub language: Language,
    pub confidence: f32,
}

struct LanguageProfile {
    language: Language,
    script: Option<Script>,
    keywords: &'static [&'static str],
    greetings: Vec<Regex>,
}

/// Pure, table-driven language detector
pub struct LanguageDetector {
    profiles: Vec<LanguageProfile>,
    default_language: Language,
}

/// Keyword and greeting sources per language. Keywords are stored lowercased
/// and matched as substrings of the lowercased utterance.
fn profile_sources() -> [(Language, &'static [&'static str], &'static [&'static str]); 5] {
    [
        (
            Language::Sinhala,
            &["ආයුබෝවන්", "ස්තූතියි", "මට", "ඔබට", "කොහෙද", "කවදා"],
            &["ආයුබෝවන්", "කොහොමද"],
        ),
        (
            Language::Tamil,
            &["வணக்கம்", "நன்றி", "எனக்கு", "உங்களுக்கு", "எங்கே", "எப்போது"],
            &["வணக்கம்", "எப்படி"],
        ),
        (
            Language::Chinese,
            &["你好", "旅游", "哪里", "什么", "谢谢"],
            &["你好", "您好"],
        ),
        (
            Language::French,
            &["bonjour", "salut", "merci", "voyage", "où", "quand"],
            &[r"\b(bonjour|salut|bonsoir)\b"],
        ),
        (
            Language::English,
            &["hello", "thank", "please", "where", "when", "how", "what"],
            &[r"\b(hello|hi|hey|good morning|good afternoon|good evening)\b"],
        ),
    ]
}

impl LanguageDetector {
    /// Build the detector, compiling the greeting patterns once.
    ///
    /// A pattern that fails to compile is skipped with a warning; a broken
    /// entry degrades that one signal to silence instead of taking the
    /// detector down.
    pub fn new(default_language: Language) -> Self {
        let profiles = profile_sources()
            .into_iter()
            .map(|(language, keywords, greeting_sources)| {
                let greetings = greeting_sources
                    .iter()
                    .filter_map(|source| match Regex::new(source) {
                        Ok(re) => Some(re),
                        Err(e) => {
                            tracing::warn!(
                                language = language.code(),
                                pattern = source,
                                "skipping malformed greeting pattern: {e}"
                            );
                            None
                        }
                    })
                    .collect();
                LanguageProfile {
                    language,
                    script: language.distinctive_script(),
                    keywords,
                    greetings,
                }
            })
            .collect();

        Self {
            profiles,
            default_language,
        }
    }

    /// Detect the language of an utterance.
    ///
    /// Pure function over the static tables: no side effects, identical
    /// input always yields identical output.
    pub fn detect(&self, text: &str) -> LanguageSignal {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.fallback();
        }

        let lowered = trimmed.to_lowercase();
        let mut scores: Vec<(Language, f32)> = self
            .profiles
            .iter()
            .map(|profile| (profile.language, self.score_language(profile, &lowered)))
            .collect();

        // Compensating boost: when nothing else clears the floor, the
        // default language absorbs the ambiguity at moderate confidence.
        let best_other = scores
            .iter()
            .filter(|(language, _)| *language != self.default_language)
            .map(|(_, score)| *score)
            .fold(0.0f32, f32::max);
        if best_other < detection::CONFIDENCE_FLOOR {
            for (language, score) in scores.iter_mut() {
                if *language == self.default_language {
                    *score = score.max(detection::FALLBACK_CONFIDENCE);
                }
            }
        }

        // Arg-max; ties keep the earlier profile so detection is stable.
        let mut best = (self.default_language, 0.0f32);
        for (language, score) in scores {
            if score > best.1 {
                best = (language, score);
            }
        }

        if best.1 < detection::CONFIDENCE_FLOOR {
            return self.fallback();
        }

        LanguageSignal {
            language: best.0,
            confidence: best.1,
        }
    }

    fn fallback(&self) -> LanguageSignal {
        LanguageSignal {
            language: self.default_language,
            confidence: detection::FALLBACK_CONFIDENCE,
        }
    }

    fn score_language(&self, profile: &LanguageProfile, text: &str) -> f32 {
        let mut score = 0.0f32;

        if let Some(script) = profile.script {
            let total = text.chars().filter(|c| c.is_alphabetic()).count();
            if total > 0 {
                let in_script = text.chars().filter(|c| script.contains_char(*c)).count();
                if in_script > 0 {
                    score += (in_script as f32 / total as f32).min(detection::SCRIPT_SCORE_CAP);
                }
            }
        }

        let keyword_hits = profile
            .keywords
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count();
        if keyword_hits > 0 {
            score += (keyword_hits as f32 / profile.keywords.len() as f32)
                .min(detection::KEYWORD_SCORE_CAP);
        }

        if profile.greetings.iter().any(|re| re.is_match(text)) {
            score += detection::GREETING_BONUS;
        }

        score.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> LanguageDetector {
        LanguageDetector::new(Language::English)
    }

    #[test]
    fn test_empty_text_falls_back() {
        let signal = detector().detect("");
        assert_eq!(signal.language, Language::English);
        assert_eq!(signal.confidence, 0.5);

        let signal = detector().detect("   \t ");
        assert_eq!(signal.language, Language::English);
    }

    #[test]
    fn test_greeting_clears_floor_in_every_language() {
        let cases = [
            ("Hello", Language::English),
            ("ආයුබෝවන්", Language::Sinhala),
            ("வணக்கம்", Language::Tamil),
            ("你好", Language::Chinese),
            ("Bonjour", Language::French),
        ];
        for (text, expected) in cases {
            let signal = detector().detect(text);
            assert_eq!(signal.language, expected, "text: {text}");
            assert!(
                signal.confidence >= 0.4,
                "greeting bonus alone should clear the floor for {text}"
            );
        }
    }

    #[test]
    fn test_plain_ascii_defaults_to_english() {
        let signal = detector().detect("zxqv frobnitz blorp");
        assert_eq!(signal.language, Language::English);
        assert_eq!(signal.confidence, 0.5);
    }

    #[test]
    fn test_sinhala_script_dominates() {
        let signal = detector().detect("මට සීගිරිය බලන්න ඕනේ");
        assert_eq!(signal.language, Language::Sinhala);
        assert!(signal.confidence > 0.5);
    }

    #[test]
    fn test_mixed_script_favors_dominant_tamil() {
        // Latin substring "Sigiriya" must not drown out the Tamil content
        let signal = detector().detect("எனக்கு Sigiriya எங்கே என்று சொல்லுங்கள்");
        assert_eq!(signal.language, Language::Tamil);
    }

    #[test]
    fn test_confidence_bounded() {
        let signal = detector().detect("ආයුබෝවන් ආයුබෝවන් ස්තූතියි මට ඔබට කොහෙද කවදා");
        assert!(signal.confidence <= 1.0);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let d = detector();
        let a = d.detect("Bonjour, where is Kandy?");
        let b = d.detect("Bonjour, where is Kandy?");
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_english_default() {
        let d = LanguageDetector::new(Language::Sinhala);
        let signal = d.detect("qwerty asdf");
        assert_eq!(signal.language, Language::Sinhala);
        assert_eq!(signal.confidence, 0.5);
    }
}
