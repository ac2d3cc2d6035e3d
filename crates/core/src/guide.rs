//! Virtual tour guide personas
//!
//! Guides are static, read-only configuration: a session references one by
//! identifier and the dispatcher pulls greeting text and display data from
//! here. Sessions never mutate guide records.

use serde::{Deserialize, Serialize};

use crate::Language;

/// Identifier of a tour guide persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GuideId {
    /// Cultural expert, the default voice
    #[default]
    Saru,
    /// Nature and wildlife specialist
    Anjali,
}

impl GuideId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saru => "saru",
            Self::Anjali => "anjali",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "saru" => Some(Self::Saru),
            "anjali" => Some(Self::Anjali),
            _ => None,
        }
    }

    pub fn all() -> &'static [GuideId] {
        &[Self::Saru, Self::Anjali]
    }

    pub fn profile(&self) -> &'static Guide {
        Guide::get(*self)
    }
}

impl std::fmt::Display for GuideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static persona record
#[derive(Debug, Clone, Serialize)]
pub struct Guide {
    pub id: GuideId,
    pub display_name: &'static str,
    pub personality: &'static str,
    pub specialties: &'static [&'static str],
}

static SARU: Guide = Guide {
    id: GuideId::Saru,
    display_name: "Saru",
    personality: "friendly, enthusiastic, cultural expert",
    specialties: &["temples", "cultural sites", "festivals", "etiquette"],
};

static ANJALI: Guide = Guide {
    id: GuideId::Anjali,
    display_name: "Anjali",
    personality: "adventurous, nature-loving, practical",
    specialties: &["nature", "wildlife", "trekking", "beaches"],
};

impl Guide {
    /// Look up the static record for a guide
    pub fn get(id: GuideId) -> &'static Guide {
        match id {
            GuideId::Saru => &SARU,
            GuideId::Anjali => &ANJALI,
        }
    }

    /// Greeting line in the given language, falling back to English when the
    /// language has no authored text for this guide.
    pub fn greeting(&self, language: Language) -> &'static str {
        match (self.id, language) {
            (GuideId::Saru, Language::English) => {
                "Hello! I'm Saru, your friendly Sri Lankan tour guide! \
                 I love sharing our beautiful culture and history."
            }
            (GuideId::Saru, Language::Sinhala) => {
                "ආයුබෝවන්! මම සරු, ඔබේ මිත්‍රශීලී ශ්‍රී ලාංකික ගමන් මාර්ගදර්ශකයා! \
                 අපේ සුන්දර සංස්කෘතිය සහ ඉතිහාසය බෙදා ගැනීමට මම ආදරෙයි."
            }
            (GuideId::Saru, Language::Tamil) => {
                "வணக்கம்! நான் சரு, உங்கள் நட்புரீதியான இலங்கை சுற்றுலா வழிகாட்டி! \
                 எங்கள் அழகான கலாச்சாரம் மற்றும் வரலாற்றைப் பகிர்ந்து கொள்ள நான் விரும்புகிறேன்."
            }
            (GuideId::Saru, Language::Chinese) => {
                "你好！我是萨鲁，你友好的斯里兰卡导游！我喜欢分享我们美丽的文化和历史。"
            }
            (GuideId::Saru, Language::French) => {
                "Bonjour! Je suis Saru, votre guide touristique sri-lankaise amicale! \
                 J'adore partager notre belle culture et histoire."
            }
            (GuideId::Anjali, Language::English) => {
                "Hi there! I'm Anjali, and I'm passionate about Sri Lanka's \
                 incredible nature and wildlife!"
            }
            (GuideId::Anjali, Language::Sinhala) => {
                "හෙලෝ! මම අංජලි, ශ්‍රී ලංකාවේ විස්මයජනක ස්වභාවික පරිසරය සහ \
                 වන්‍යජීවීන් ගැන ඉතා උනන්දුයි!"
            }
            (GuideId::Anjali, Language::Tamil) => {
                "வணக்கம்! நான் அஞ்சலி, இலங்கையின் நம்பமுடியாத இயற்கை மற்றும் \
                 வனவிலங்குகள் மீது நான் ஆர்வமாக உள்ளேன்!"
            }
            (GuideId::Anjali, Language::Chinese) => {
                "嗨！我是安贾莉，我对斯里兰卡令人难以置信的自然和野生动物充满热情！"
            }
            (GuideId::Anjali, Language::French) => {
                "Salut! Je suis Anjali, et je suis passionnée par la nature et \
                 la faune incroyables du Sri Lanka!"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_lookup() {
        let guide = Guide::get(GuideId::Anjali);
        assert_eq!(guide.display_name, "Anjali");
        assert!(guide.specialties.contains(&"wildlife"));
    }

    #[test]
    fn test_guide_from_str() {
        assert_eq!(GuideId::from_str_loose("Saru"), Some(GuideId::Saru));
        assert_eq!(GuideId::from_str_loose("ANJALI"), Some(GuideId::Anjali));
        assert_eq!(GuideId::from_str_loose("kamal"), None);
    }

    #[test]
    fn test_greeting_per_language() {
        let saru = Guide::get(GuideId::Saru);
        assert!(saru.greeting(Language::English).contains("Saru"));
        assert!(saru.greeting(Language::Sinhala).contains("ආයුබෝවන්"));
        assert!(saru.greeting(Language::Tamil).contains("வணக்கம்"));
    }

    #[test]
    fn test_default_guide() {
        assert_eq!(GuideId::default(), GuideId::Saru);
    }
}
