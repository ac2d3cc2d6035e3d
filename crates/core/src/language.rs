//! Language definitions for the tourism assistant
//!
//! Supports the five visitor languages of the original service: English,
//! Sinhala, Tamil, Chinese and French.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Sinhala,
    Tamil,
    Chinese,
    French,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Sinhala => "si",
            Self::Tamil => "ta",
            Self::Chinese => "zh",
            Self::French => "fr",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Sinhala => "Sinhala",
            Self::Tamil => "Tamil",
            Self::Chinese => "Chinese",
            Self::French => "French",
        }
    }

    /// Get the script this language is written in
    pub fn script(&self) -> Script {
        match self {
            Self::English | Self::French => Script::Latin,
            Self::Sinhala => Script::Sinhala,
            Self::Tamil => Script::Tamil,
            Self::Chinese => Script::Han,
        }
    }

    /// Script that identifies this language on sight, if any.
    ///
    /// English and French share Latin with each other (and with romanized
    /// place names in every language), so character ranges carry no signal
    /// for them and detection must rely on keywords and greetings alone.
    pub fn distinctive_script(&self) -> Option<Script> {
        match self {
            Self::Sinhala => Some(Script::Sinhala),
            Self::Tamil => Some(Script::Tamil),
            Self::Chinese => Some(Script::Han),
            Self::English | Self::French => None,
        }
    }

    /// Parse from string (case-insensitive, accepts codes and names)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "si" | "sin" | "sinhala" => Some(Self::Sinhala),
            "ta" | "tam" | "tamil" => Some(Self::Tamil),
            "zh" | "zho" | "chinese" | "mandarin" => Some(Self::Chinese),
            "fr" | "fra" | "french" => Some(Self::French),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Sinhala,
            Self::Tamil,
            Self::Chinese,
            Self::French,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems used by the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Sinhala,
    Tamil,
    Han,
}

impl Script {
    /// Get Unicode range for this script (primary block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0041, 0x007A),
            Self::Sinhala => (0x0D80, 0x0DFF),
            Self::Tamil => (0x0B80, 0x0BFF),
            Self::Han => (0x4E00, 0x9FFF),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Detect the dominant script of a text, if any alphabetic content exists
    pub fn detect(text: &str) -> Option<Self> {
        let mut counts = std::collections::HashMap::new();

        for c in text.chars() {
            for script in &[Self::Sinhala, Self::Tamil, Self::Han, Self::Latin] {
                if script.contains_char(c) {
                    *counts.entry(*script).or_insert(0usize) += 1;
                    break;
                }
            }
        }

        counts.into_iter().max_by_key(|(_, v)| *v).map(|(k, _)| k)
    }
}
