//! Persona-flavored response framing
//!
//! Wraps the deterministic base template with phrases drawn from small
//! per-situation pools, so replies vary turn to turn without being required
//! to. Base template selection stays deterministic; only this layer draws
//! from the RNG, and the RNG is injected at construction so tests can pin a
//! seed and assert exact output.
//!
//! Framing rules and their probabilities:
//! - greeting framing: the guide's own greeting line, always, on `greeting`
//! - enthusiasm prefix: always, on `attraction_inquiry`/`food_inquiry`
//! - helpful prefix: always, on `transport_inquiry`/`accommodation_inquiry`
//!   (English pool only)
//! - cultural-insight footer: always, on `attraction_inquiry`/`food_inquiry`
//!   when the language has an authored tip pool
//! - personal-touch footer: probability 0.3 once history is non-empty
//! - encouragement footer: probability 0.4, every intent except `farewell`

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tourbot_config::PersonalizationConfig;
use tourbot_core::{Guide, IntentKind, Language};

/// Per-language phrase pool; languages without authored phrases skip the
/// framing entirely, as in the original guide scripts.
struct PhrasePool {
    en: &'static [&'static str],
    si: &'static [&'static str],
    ta: &'static [&'static str],
}

impl PhrasePool {
    fn get(&self, language: Language) -> Option<&'static [&'static str]> {
        let pool = match language {
            Language::English => self.en,
            Language::Sinhala => self.si,
            Language::Tamil => self.ta,
            Language::Chinese | Language::French => &[],
        };
        if pool.is_empty() {
            None
        } else {
            Some(pool)
        }
    }
}

static ENTHUSIASM: PhrasePool = PhrasePool {
    en: &[
        "Oh, that's a fantastic choice!",
        "Excellent question! Let me tell you all about it.",
        "I'm so excited you asked about that!",
        "That's one of my favorite topics!",
    ],
    si: &[
        "ඔව්, ඒක නියම තේරීමක්!",
        "පුදුම ප්‍රශ්නයක්! මම ඒ ගැන සියල්ලම කියන්නම්.",
        "ඔබ ඒ ගැන ඇසූ නිසා මට ගොඩක් සතුටක්!",
    ],
    ta: &[
        "ஆம், அது ஒரு அருமையான தேர்வு!",
        "சிறந்த கேள்வி! அதைப் பற்றி எல்லாம் சொல்கிறேன்.",
        "நீங்கள் அதைப் பற்றி கேட்டதில் நான் மிகவும் மகிழ்ச்சியடைகிறேன்!",
    ],
};

static HELPFUL: PhrasePool = PhrasePool {
    en: &[
        "Let me help you with that!",
        "I'm here to make your trip easier!",
        "Here's what you need to know:",
        "Let me give you the inside scoop:",
    ],
    si: &[],
    ta: &[],
};

static LOCAL_TIPS: PhrasePool = PhrasePool {
    en: &[
        "Pro tip: Visit early morning to avoid crowds!",
        "Local secret: Try the street food near the temple!",
        "Insider tip: Ask for the 'local price', not the tourist price!",
        "My recommendation: Go during the off-season for better deals!",
    ],
    si: &[
        "වෘත්තීය උපදෙස්: බහුල ජනයා වළක්වා ගැනීමට උදෑසන ගොස් බලන්න!",
        "ස්ථානීය රහස: දේවාලය අසල තිබෙන වීදි ආහාර උත්සාහ කරන්න!",
    ],
    ta: &[
        "தொழில் குறிப்பு: கூட்டத்தைத் தவிர்க்க காலையில் செல்லுங்கள்!",
        "உள்ளூர் இரகசியம்: கோவிலுக்கு அருகே உள்ள தெரு உணவை முயற்சிக்கவும்!",
    ],
};

static PERSONAL_TOUCH: PhrasePool = PhrasePool {
    en: &[
        "I remember when I first visited there...",
        "Let me share a little secret with you...",
        "From my experience as a local guide...",
        "I always recommend this to my friends...",
    ],
    si: &[
        "මම මුලින්ම එතැනට ගිය විට මතකයි...",
        "මම ඔබට කුඩා රහසක් කියන්නම්...",
    ],
    ta: &[
        "நான் முதலில் அங்கு சென்றபோது நினைவிருக்கிறது...",
        "நான் உங்களுடன் ஒரு சிறிய இரகசியத்தை பகிர்கிறேன்...",
    ],
};

static ENCOURAGEMENT: PhrasePool = PhrasePool {
    en: &[
        "You're going to love it!",
        "Trust me, you won't be disappointed!",
        "This is definitely worth your time!",
        "I guarantee you'll have an amazing experience!",
    ],
    si: &[
        "ඔබට ඒක ගොඩක් ආස වෙයි!",
        "මාව විශ්වාස කරන්න, ඔබට කලකිරීමක් නොවේවි!",
        "මෙය නිසැකවම ඔබේ කාලය වටිනවා!",
    ],
    ta: &[
        "நீங்கள் அதை விரும்புவீர்கள்!",
        "என்னை நம்புங்கள், நீங்கள் ஏமாற்றமடைய மாட்டீர்கள்!",
        "இது நிச்சயமாக உங்கள் நேரத்திற்கு மதிப்புள்ளது!",
    ],
};

/// Probabilistic framing layer around base templates
pub struct Personalizer {
    rng: Mutex<StdRng>,
    personal_touch_probability: f64,
    encouragement_probability: f64,
}

impl Personalizer {
    /// Build from configuration. A configured seed pins the RNG for
    /// reproducible replies; otherwise the RNG is entropy-seeded.
    pub fn new(config: &PersonalizationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
            personal_touch_probability: config.personal_touch_probability,
            encouragement_probability: config.encouragement_probability,
        }
    }

    /// Wrap a base reply with persona framing.
    pub fn personalize(
        &self,
        base: &str,
        intent: IntentKind,
        language: Language,
        guide: &Guide,
        has_history: bool,
    ) -> String {
        let mut rng = self.rng.lock();
        let mut reply = base.to_string();

        match intent {
            IntentKind::Greeting => {
                reply = format!("{} {}", guide.greeting(language), reply);
            }
            IntentKind::AttractionInquiry | IntentKind::FoodInquiry => {
                if let Some(pool) = ENTHUSIASM.get(language) {
                    reply = format!("{} {}", pick(&mut rng, pool), reply);
                }
            }
            IntentKind::TransportInquiry | IntentKind::AccommodationInquiry => {
                if let Some(pool) = HELPFUL.get(language) {
                    reply = format!("{} {}", pick(&mut rng, pool), reply);
                }
            }
            _ => {}
        }

        if matches!(
            intent,
            IntentKind::AttractionInquiry | IntentKind::FoodInquiry
        ) {
            if let Some(pool) = LOCAL_TIPS.get(language) {
                reply = format!("{}\n\n{}", reply, pick(&mut rng, pool));
            }
        }

        if has_history {
            if let Some(pool) = PERSONAL_TOUCH.get(language) {
                if rng.gen_bool(self.personal_touch_probability) {
                    reply = format!("{}\n\n{}", reply, pick(&mut rng, pool));
                }
            }
        }

        if intent != IntentKind::Farewell {
            if let Some(pool) = ENCOURAGEMENT.get(language) {
                if rng.gen_bool(self.encouragement_probability) {
                    reply = format!("{}\n\n{}", reply, pick(&mut rng, pool));
                }
            }
        }

        reply
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
