use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "gu")]
    Gujarati,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Gujarati,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
        }
    }

    /// Name shown in the language picker, in the language's own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Marathi => "मराठी",
            Language::Gujarati => "ગુજરાતી",
        }
    }

    /// BCP 47 tag handed to `SpeechRecognition.lang`.
    pub fn recognition_locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
            Language::Marathi => "mr-IN",
            Language::Gujarati => "gu-IN",
        }
    }

    /// Voice language codes tried in order when picking a synthesis voice.
    pub fn voice_codes(self) -> &'static [&'static str] {
        match self {
            Language::English => &["en", "en-US", "en-GB"],
            Language::Hindi => &["hi", "hi-IN"],
            Language::Marathi => &["mr", "mr-IN"],
            Language::Gujarati => &["gu", "gu-IN"],
        }
    }

    /// Lenient lookup used by the speech layer: unknown codes map to English.
    pub fn from_code_or_default(code: &str) -> Language {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            "mr" | "marathi" => Ok(Language::Marathi),
            "gu" | "gujarati" => Ok(Language::Gujarati),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    pub fn is_bot(&self) -> bool {
        matches!(self.role, Role::Bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
        assert_eq!(" GU ".parse::<Language>(), Ok(Language::Gujarati));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code_or_default("xx"), Language::English);
        assert_eq!(Language::from_code_or_default("mr"), Language::Marathi);
    }

    #[test]
    fn test_recognition_locales() {
        assert_eq!(Language::English.recognition_locale(), "en-US");
        assert_eq!(Language::Hindi.recognition_locale(), "hi-IN");
        assert_eq!(Language::Marathi.recognition_locale(), "mr-IN");
        assert_eq!(Language::Gujarati.recognition_locale(), "gu-IN");
    }
}
