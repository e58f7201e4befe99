//! Supported conversation languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the concierge can reply and speak in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default; fallback for unconfigured tables)
    #[default]
    En,
    /// Tagalog / Filipino
    Tl,
    /// Mandarin Chinese
    Zh,
    /// Japanese
    Ja,
    /// Korean
    Ko,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Tl,
        Language::Zh,
        Language::Ja,
        Language::Ko,
    ];

    /// The language used when a table has no entry for the requested one.
    pub const FALLBACK: Language = Language::En;

    /// ISO 639-1 style code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tl => "tl",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
        }
    }

    /// BCP-47 tag used by speech recognition and synthesis.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Tl => "fil-PH",
            Language::Zh => "zh-CN",
            Language::Ja => "ja-JP",
            Language::Ko => "ko-KR",
        }
    }

    /// English display name, used in prompts to the generative service.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tl => "Tagalog",
            Language::Zh => "Chinese",
            Language::Ja => "Japanese",
            Language::Ko => "Korean",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "tl" | "fil" | "tagalog" | "filipino" => Ok(Language::Tl),
            "zh" | "chinese" => Ok(Language::Zh),
            "ja" | "japanese" => Ok(Language::Ja),
            "ko" | "korean" => Ok(Language::Ko),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}
