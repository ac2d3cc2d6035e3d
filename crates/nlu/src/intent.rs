//! Intent recognition by multi-detector score fusion
//!
//! Three independent detectors run over every utterance:
//! - a per-language regex pattern detector,
//! - a keyword detector over fixed per-intent word lists,
//! - a contextual detector of hand-coded rules (follow-ups, clarifications).
//!
//! Their outputs are fused into a single intent score map; the winner's
//! confidence is its cumulative score divided by the sum of all contributing
//! scores, so confidence reflects agreement across detectors rather than raw
//! magnitude. Recognition is fully deterministic: no randomness, and score
//! ties resolve by intent declaration order.

use std::collections::HashMap;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use tourbot_config::constants::recognition;
use tourbot_core::{IntentKind, Language, RecognizedIntent, ScoredIntent};

struct IntentPatterns {
    kind: IntentKind,
    by_language: HashMap<Language, Vec<Regex>>,
}

/// Deterministic intent recognizer
pub struct IntentRecognizer {
    patterns: Vec<IntentPatterns>,
    keywords: &'static [(IntentKind, &'static [&'static str])],
}

/// Regex pattern sources per intent and language. Languages without authored
/// patterns for an intent fall back to the English set at match time.
fn pattern_sources() -> Vec<(IntentKind, Vec<(Language, Vec<&'static str>)>)> {
    use IntentKind::*;
    use Language::*;
    vec![
        (
            Greeting,
            vec![
                (
                    English,
                    vec![
                        r"\b(hello|hi|hey|good morning|good afternoon|good evening)\b",
                        r"\b(how are you|how do you do)\b",
                    ],
                ),
                (
                    Sinhala,
                    vec![r"(ආයුබෝවන්|කොහොමද|සුභ දවසක්|සුභ උදෑසනක්|සුභ සවසක්)"],
                ),
                (Tamil, vec![r"(வணக்கம்|எப்படி இருக்கிறீர்கள்|காலை வணக்கம்|மாலை வணக்கம்)"]),
                (Chinese, vec![r"(你好|您好|早上好|下午好|晚上好)"]),
                (French, vec![r"\b(bonjour|salut|bonsoir|comment allez-vous)\b"]),
            ],
        ),
        (
            Farewell,
            vec![
                (
                    English,
                    vec![r"\b(goodbye|bye|see you|farewell|thanks|thank you|exit|quit)\b"],
                ),
                (Sinhala, vec![r"(ගිහින් එන්නම්|බයි|ආයේ හමුවෙමු|ස්තූතියි|ස්තූති|යන්නම්)"]),
                (Tamil, vec![r"(விடைபெறுகிறேன்|பை|மீண்டும் சந்திப்போம்|நன்றி|வெளியேறு)"]),
                (Chinese, vec![r"(再见|拜拜|再会|谢谢|退出)"]),
                (French, vec![r"\b(au revoir|bye|à bientôt|merci|sortir|quitter)\b"]),
            ],
        ),
        (
            AttractionInquiry,
            vec![
                (
                    English,
                    vec![
                        r"\b(where|what|tell me about|show me|find|visit|see|attraction|place|destination|tourist spot)\b",
                        r"\b(temple|beach|mountain|fort|palace|museum|park|garden)\b",
                        r"\b(sigiriya|kandy|galle|ella|nuwara eliya|anuradhapura|polonnaruwa)\b",
                    ],
                ),
                (
                    Sinhala,
                    vec![
                        r"(කොහෙද|මොකද|කියන්න|පෙන්වන්න|හොයන්න|බලන්න|ගමන් කරන්න|ස්ථානය|ප්‍රදේශය)",
                        r"(දේවාලය|වෙරළ|කන්ද|කොටුව|මාලිගය|කෞතුකාගාරය|උයන)",
                        r"(සීගිරිය|මහනුවර|ගාල්ල|ඇල්ල|නුවරඑළිය|අනුරාධපුරය|පොළොන්නරුව)",
                    ],
                ),
                (
                    Tamil,
                    vec![
                        r"(எங்கே|என்ன|சொல்லுங்கள்|காட்டுங்கள்|தேடு|பார்வையிடு|இடம்|சுற்றுலா)",
                        r"(கோயில்|கடற்கரை|மலை|கோட்டை|அரண்மனை|அருங்காட்சியகம்|பூங்கா)",
                    ],
                ),
                (
                    Chinese,
                    vec![
                        r"(哪里|什么|告诉我|显示|寻找|参观|景点|地方|旅游景点)",
                        r"(寺庙|海滩|山|堡垒|宫殿|博物馆|公园)",
                    ],
                ),
                (
                    French,
                    vec![
                        r"\b(où|quoi|dites-moi|montrez-moi|trouver|visiter|lieu|attraction|destination)\b",
                        r"\b(temple|plage|montagne|fort|palais|musée|parc|jardin)\b",
                    ],
                ),
            ],
        ),
        (
            FoodInquiry,
            vec![
                (
                    English,
                    vec![
                        r"\b(food|eat|meal|dish|cuisine|restaurant|hungry|taste|spicy|curry|rice)\b",
                        r"\b(hopper|kottu|string hopper|roti|sambol|traditional food)\b",
                    ],
                ),
                (
                    Sinhala,
                    vec![
                        r"(ආහාර|කන්න|කෑම|ව්‍යංජන|ආපනශාලා|බඩගිනි|රස|බත්)",
                        r"(ආප්ප|කොත්තු|ඉදිආප්ප|රොටි|සම්බෝල)",
                    ],
                ),
                (Tamil, vec![r"(உணவு|சாப்பிட|உணவகம்|பசி|சுவை|காரம்|சாதம்|கறி)"]),
                (Chinese, vec![r"(食物|吃|餐|菜|餐厅|饿|味道|辣|咖喱|米饭)"]),
                (
                    French,
                    vec![r"\b(nourriture|manger|repas|plat|cuisine|restaurant|faim|goût|épicé|curry|riz)\b"],
                ),
            ],
        ),
        (
            TransportInquiry,
            vec![
                (
                    English,
                    vec![
                        r"\b(transport|travel|how to get|go to|bus|train|taxi|tuk tuk|flight|airport)\b",
                        r"\b(ticket|booking|schedule|timetable|fare)\b",
                    ],
                ),
                (
                    Sinhala,
                    vec![
                        r"(ප්‍රවාහනය|ගමන්|යන්නේ කොහොමද|බස්|දුම්රිය|ටැක්සි|ත්‍රීරෝදය|ගුවන්තොටුපළ)",
                        r"(ටිකට්|කාලසටහන|ගාස්තු)",
                    ],
                ),
                (
                    Tamil,
                    vec![r"(போக்குவரத்து|பயணம்|எப்படி செல்வது|பேரூந்து|ரயில்|டாக்ஸி|ஆட்டோ|விமானம்|விமான நிலையம்)"],
                ),
                (Chinese, vec![r"(交通|旅行|怎么去|公交|火车|出租车|嘟嘟车|飞机|机场)"]),
                (
                    French,
                    vec![r"\b(transport|voyage|comment aller|bus|train|taxi|tuk tuk|vol|aéroport)\b"],
                ),
            ],
        ),
        (
            AccommodationInquiry,
            vec![
                (
                    English,
                    vec![
                        r"\b(hotel|accommodation|stay|room|booking|guesthouse|resort|lodge)\b",
                        r"\b(where to stay|place to sleep|budget hotel|luxury hotel)\b",
                    ],
                ),
                (
                    Sinhala,
                    vec![
                        r"(හෝටලය|නවාතැන්|ඉන්න|කාමරය|ගෘහ නවාතැන්|නිකේතනය)",
                        r"(ඉන්න තැන|නිදන තැන|අඩු මිල හෝටල්|සුඛෝපභෝගී හෝටල්)",
                    ],
                ),
                (Tamil, vec![r"(ஹோட்டல்|தங்குமிடம்|தங்க|அறை|முன்பதிவு|விருந்தினர் இல்லம்|ரிசார்ட்)"]),
                (Chinese, vec![r"(酒店|住宿|房间|预订|客栈|度假村)"]),
                (
                    French,
                    vec![r"\b(hôtel|hébergement|rester|chambre|réservation|pension|resort)\b"],
                ),
            ],
        ),
        (
            WeatherInquiry,
            vec![
                (
                    English,
                    vec![
                        r"\b(weather|climate|temperature|rain|sunny|hot|cold|season|monsoon)\b",
                        r"\b(what's the weather|how's the weather|weather forecast)\b",
                    ],
                ),
                (
                    Sinhala,
                    vec![
                        r"(කාලගුණය|දේශගුණය|උෂ්ණත්වය|වර්ෂාව|අව්ව|උණුසුම්|සීතල|මෝසම්)",
                        r"(කාලගුණය කොහොමද|කාලගුණ අනාවැකිය)",
                    ],
                ),
                (Tamil, vec![r"(வானிலை|காலநிலை|வெப்பநிலை|மழை|வெயில்|சூடு|குளிர்|பருவமழை)"]),
                (Chinese, vec![r"(天气|气候|温度|雨|晴天|热|冷|季节|季风)"]),
                (
                    French,
                    vec![r"\b(météo|climat|température|pluie|ensoleillé|chaud|froid|saison|mousson)\b"],
                ),
            ],
        ),
        (
            HelpInquiry,
            vec![
                (
                    English,
                    vec![
                        r"\b(help|assist|support|guide|confused|lost|don't know|problem)\b",
                        r"\b(can you help|need help|what can you do)\b",
                    ],
                ),
                (
                    Sinhala,
                    vec![
                        r"(උදව්|සහාය|මග පෙන්වන්න|අවුල්|දන්නේ නෑ|ප්‍රශ්නය)",
                        r"(උදව් කරන්න පුළුවන්ද|උදව් ඕනේ|මොනාද කරන්න පුළුවන්)",
                    ],
                ),
                (Tamil, vec![r"(உதவி|ஆதரவு|வழிகாட்டி|குழப்பம்|தெரியாது|பிரச்சனை)"]),
                (Chinese, vec![r"(帮助|协助|支持|指导|困惑|迷路|不知道|问题)"]),
                (
                    French,
                    vec![r"\b(aide|assister|soutien|guide|confus|perdu|ne sais pas|problème)\b"],
                ),
            ],
        ),
    ]
}

/// Keyword lists per intent. Single words match on Unicode word boundaries,
/// multi-word phrases by containment.
static KEYWORDS: &[(IntentKind, &[&str])] = &[
    (
        IntentKind::Greeting,
        &["hello", "hi", "hey", "good morning", "ayubowan", "vanakkam"],
    ),
    (
        IntentKind::Farewell,
        &["bye", "goodbye", "farewell", "thanks", "thank you", "see you"],
    ),
    (
        IntentKind::AttractionInquiry,
        &[
            "visit",
            "attraction",
            "place",
            "temple",
            "beach",
            "fort",
            "museum",
            "sigiriya",
            "kandy",
            "galle",
            "ella",
        ],
    ),
    (
        IntentKind::FoodInquiry,
        &[
            "food",
            "eat",
            "meal",
            "restaurant",
            "cuisine",
            "curry",
            "rice",
            "hungry",
            "kottu",
            "hopper",
        ],
    ),
    (
        IntentKind::TransportInquiry,
        &[
            "bus", "train", "taxi", "transport", "travel", "airport", "ticket", "tuk tuk",
        ],
    ),
    (
        IntentKind::AccommodationInquiry,
        &[
            "hotel",
            "stay",
            "room",
            "accommodation",
            "guesthouse",
            "resort",
            "booking",
        ],
    ),
    (
        IntentKind::WeatherInquiry,
        &[
            "weather",
            "rain",
            "temperature",
            "climate",
            "sunny",
            "monsoon",
            "season",
        ],
    ),
    (
        IntentKind::HelpInquiry,
        &[
            "help", "assist", "support", "guide", "confused", "lost", "problem",
        ],
    ),
];

/// Follow-up markers: single words matched on word boundaries, phrases by
/// containment.
const FOLLOW_UP_MARKERS: &[&str] = &["also", "too", "as well", "additionally"];

const CLARIFICATION_PHRASES: &[&str] = &[
    "what do you mean",
    "can you explain",
    "i don't understand",
    "explain again",
];

impl IntentRecognizer {
    /// Build the recognizer, compiling every pattern once.
    ///
    /// A pattern that fails to compile is skipped with a warning so one bad
    /// entry can never abort fused recognition.
    pub fn new() -> Self {
        let patterns = pattern_sources()
            .into_iter()
            .map(|(kind, languages)| {
                let by_language = languages
                    .into_iter()
                    .map(|(language, sources)| {
                        let compiled = sources
                            .into_iter()
                            .filter_map(|source| match Regex::new(source) {
                                Ok(re) => Some(re),
                                Err(e) => {
                                    tracing::warn!(
                                        intent = kind.as_str(),
                                        language = language.code(),
                                        pattern = source,
                                        "skipping malformed intent pattern: {e}"
                                    );
                                    None
                                }
                            })
                            .collect::<Vec<_>>();
                        (language, compiled)
                    })
                    .collect();
                IntentPatterns { kind, by_language }
            })
            .collect();

        Self {
            patterns,
            keywords: KEYWORDS,
        }
    }

    /// Recognize the intent of an utterance in the given language.
    pub fn recognize(&self, text: &str, language: Language) -> RecognizedIntent {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return RecognizedIntent::unknown();
        }
        let lowered = trimmed.to_lowercase();

        let outputs: Vec<ScoredIntent> = [
            self.detect_by_patterns(&lowered, language),
            self.detect_by_keywords(&lowered),
            self.detect_by_context(&lowered),
        ]
        .into_iter()
        .flatten()
        .collect();

        if outputs.is_empty() {
            return self.secondary_keyword_pass(&lowered);
        }

        // Fuse: the same intent reported by several detectors accumulates.
        // Accumulation walks the declaration order so score ties always
        // resolve the same way.
        let mut fused: Vec<(IntentKind, f32)> = Vec::new();
        for kind in IntentKind::all() {
            let sum: f32 = outputs
                .iter()
                .filter(|output| output.kind == *kind)
                .map(|output| output.score)
                .sum();
            if sum > 0.0 {
                fused.push((*kind, sum));
            }
        }
        let total: f32 = fused.iter().map(|(_, score)| score).sum();

        // Arg-max; strictly-greater keeps ties on the earlier declaration.
        let mut winner = fused[0];
        for candidate in &fused[1..] {
            if candidate.1 > winner.1 {
                winner = *candidate;
            }
        }

        let confidence = if total > 0.0 { winner.1 / total } else { 0.0 };

        let mut alternatives: Vec<ScoredIntent> = Vec::new();
        for output in outputs {
            if output.kind == winner.0 || output.score < recognition::ALTERNATIVE_MIN_SCORE {
                continue;
            }
            match alternatives.iter_mut().find(|alt| alt.kind == output.kind) {
                Some(alt) => alt.score = alt.score.max(output.score),
                None => alternatives.push(output),
            }
        }
        alternatives.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        alternatives.truncate(recognition::ALTERNATIVES_MAX);

        tracing::debug!(
            intent = winner.0.as_str(),
            confidence,
            alternatives = alternatives.len(),
            "recognized intent"
        );

        RecognizedIntent {
            kind: winner.0,
            confidence,
            alternatives,
        }
    }

    /// Pattern detector: per intent, the matched-pattern fraction of the
    /// per-language regex set (English set when the language has none).
    fn detect_by_patterns(&self, text: &str, language: Language) -> Option<ScoredIntent> {
        let mut best: Option<ScoredIntent> = None;
        for entry in &self.patterns {
            let Some(regexes) = entry
                .by_language
                .get(&language)
                .filter(|set| !set.is_empty())
                .or_else(|| entry.by_language.get(&Language::English))
            else {
                continue;
            };
            if regexes.is_empty() {
                continue;
            }
            let matched = regexes.iter().filter(|re| re.is_match(text)).count();
            if matched == 0 {
                continue;
            }
            let score = matched as f32 / regexes.len() as f32;
            if best.map_or(true, |b| score > b.score) {
                best = Some(ScoredIntent {
                    kind: entry.kind,
                    score,
                });
            }
        }
        best
    }

    /// Keyword detector: per intent, hit fraction of the fixed keyword list.
    fn detect_by_keywords(&self, text: &str) -> Option<ScoredIntent> {
        let words: std::collections::HashSet<&str> = text.unicode_words().collect();
        let mut best: Option<ScoredIntent> = None;
        for (kind, list) in self.keywords {
            let hits = list
                .iter()
                .filter(|keyword| keyword_present(keyword, text, &words))
                .count();
            if hits == 0 {
                continue;
            }
            let score = hits as f32 / list.len() as f32;
            if best.map_or(true, |b| score > b.score) {
                best = Some(ScoredIntent { kind: *kind, score });
            }
        }
        best
    }

    /// Contextual detector: hand-coded rules with fixed confidences.
    fn detect_by_context(&self, text: &str) -> Option<ScoredIntent> {
        let words: std::collections::HashSet<&str> = text.unicode_words().collect();

        if FOLLOW_UP_MARKERS
            .iter()
            .any(|marker| keyword_present(marker, text, &words))
        {
            return Some(ScoredIntent {
                kind: IntentKind::FollowUp,
                score: recognition::FOLLOW_UP_CONFIDENCE,
            });
        }

        if CLARIFICATION_PHRASES
            .iter()
            .any(|phrase| text.contains(phrase))
        {
            return Some(ScoredIntent {
                kind: IntentKind::Clarification,
                score: recognition::CLARIFICATION_CONFIDENCE,
            });
        }

        None
    }

    /// Relaxed keyword pass used when no detector fires: plain substring
    /// containment, 0.3 per hit, capped at 1.0.
    fn secondary_keyword_pass(&self, text: &str) -> RecognizedIntent {
        let mut best: Option<ScoredIntent> = None;
        for (kind, list) in self.keywords {
            let hits = list.iter().filter(|keyword| text.contains(**keyword)).count();
            if hits == 0 {
                continue;
            }
            let score = (hits as f32 * recognition::SECONDARY_PASS_STEP).min(1.0);
            if best.map_or(true, |b| score > b.score) {
                best = Some(ScoredIntent { kind: *kind, score });
            }
        }

        match best {
            Some(scored) => RecognizedIntent {
                kind: scored.kind,
                confidence: scored.score,
                alternatives: Vec::new(),
            },
            None => RecognizedIntent::unknown(),
        }
    }
}

impl Default for IntentRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Single words match on Unicode word boundaries (so "too" never fires
/// inside "kottu"); multi-word phrases match by containment.
fn keyword_present(keyword: &str, text: &str, words: &std::collections::HashSet<&str>) -> bool {
    if keyword.contains(' ') {
        text.contains(keyword)
    } else {
        words.contains(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> IntentRecognizer {
        IntentRecognizer::new()
    }

    #[test]
    fn test_greeting() {
        let result = recognizer().recognize("Hello", Language::English);
        assert_eq!(result.kind, IntentKind::Greeting);
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn test_attraction_inquiry() {
        let result = recognizer().recognize("tell me about Sigiriya", Language::English);
        assert_eq!(result.kind, IntentKind::AttractionInquiry);
        assert!(result.confidence > 0.5);
    }

    #[test]
    fn test_sinhala_patterns() {
        let result = recognizer().recognize("සීගිරිය ගැන කියන්න", Language::Sinhala);
        assert_eq!(result.kind, IntentKind::AttractionInquiry);
    }

    #[test]
    fn test_english_text_in_tamil_session_still_resolves() {
        // The keyword detector is language-agnostic, so an English utterance
        // arriving in a Tamil session still gets classified.
        let result = recognizer().recognize("where can I eat kottu", Language::Tamil);
        assert!(matches!(
            result.kind,
            IntentKind::FoodInquiry | IntentKind::AttractionInquiry
        ));
    }

    #[test]
    fn test_follow_up_contextual_rule() {
        let result = recognizer().recognize("and the beaches near Galle also", Language::English);
        // The contextual detector fires on "also"; the pattern detector on
        // "beaches"/"galle". Either way the follow-up signal must be present.
        let saw_follow_up = result.kind == IntentKind::FollowUp
            || result
                .alternatives
                .iter()
                .any(|alt| alt.kind == IntentKind::FollowUp);
        assert!(saw_follow_up);
    }

    #[test]
    fn test_clarification_contextual_rule() {
        let result = recognizer().recognize("sorry, what do you mean", Language::English);
        assert_eq!(result.kind, IntentKind::Clarification);
    }

    #[test]
    fn test_no_signal_yields_unknown() {
        let result = recognizer().recognize("zzz qqq xxx", Language::English);
        assert_eq!(result.kind, IntentKind::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        for text in [
            "Hello",
            "where is the best beach hotel",
            "I'm hungry, any good curry and rice nearby? thanks",
            "bus or train to Ella tomorrow",
        ] {
            let result = recognizer().recognize(text, Language::English);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence out of range for: {text}"
            );
        }
    }

    #[test]
    fn test_alternatives_ranked_and_capped() {
        let result = recognizer().recognize(
            "hello, also where can I eat rice and curry near the temple",
            Language::English,
        );
        assert!(result.alternatives.len() <= 3);
        for pair in result.alternatives.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for alt in &result.alternatives {
            assert!(alt.score >= 0.3);
            assert_ne!(alt.kind, result.kind);
        }
    }

    #[test]
    fn test_deterministic() {
        let r = recognizer();
        let text = "hello, where can I eat";
        let a = r.recognize(text, Language::English);
        let b = r.recognize(text, Language::English);
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_word_boundary_keywords() {
        // "kottu" must not trigger the follow-up rule via its "too" substring
        let result = recognizer().recognize("kottu", Language::English);
        assert_eq!(result.kind, IntentKind::FoodInquiry);
    }

    #[test]
    fn test_empty_text_is_unknown() {
        let result = recognizer().recognize("   ", Language::English);
        assert!(result.is_unknown());
    }
}
