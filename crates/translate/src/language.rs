use std::fmt;
use std::str::FromStr;

use batchform_core::errors::FormError;
use serde::{Deserialize, Serialize};

/// A language the page can be translated into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Arabic,
    French,
    Spanish,
    Persian,
    Russian,
    Portuguese,
    Chinese,
    Indonesian,
    Malay,
    Hausa,
}

const ALL: [Language; 11] = [
    Language::English,
    Language::Arabic,
    Language::French,
    Language::Spanish,
    Language::Persian,
    Language::Russian,
    Language::Portuguese,
    Language::Chinese,
    Language::Indonesian,
    Language::Malay,
    Language::Hausa,
];

impl Language {
    /// Every supported language, in switcher order.
    pub fn all() -> &'static [Language] {
        &ALL
    }

    /// Language code understood by the translation service.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Persian => "fa",
            Language::Russian => "ru",
            Language::Portuguese => "pt",
            Language::Chinese => "zh-CN",
            Language::Indonesian => "id",
            Language::Malay => "ms",
            Language::Hausa => "ha",
        }
    }

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Persian => "Persian",
            Language::Russian => "Russian",
            Language::Portuguese => "Portuguese",
            Language::Chinese => "Chinese",
            Language::Indonesian => "Indonesian",
            Language::Malay => "Malay",
            Language::Hausa => "Hausa",
        }
    }

    /// Name in the language itself, as shown in the switcher.
    pub fn local_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "العربية",
            Language::French => "Français",
            Language::Spanish => "Español",
            Language::Persian => "فارسی",
            Language::Russian => "Русский",
            Language::Portuguese => "Português",
            Language::Chinese => "中文",
            Language::Indonesian => "Bahasa Indonesia",
            Language::Malay => "Bahasa Melayu",
            Language::Hausa => "Hausa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ALL.into_iter().find(|language| language.code() == code)
    }

    /// Value of the translation cookie selecting this language: the page is
    /// authored in English, so it is always `/en/<code>`.
    pub fn cookie_value(self) -> String {
        format!("/en/{}", self.code())
    }

    /// Comma-separated codes of every supported language.
    pub fn included_codes() -> String {
        ALL.iter().map(|language| language.code()).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| FormError::UnsupportedLanguage(s.to_string()))
    }
}

/// The language currently chosen in the switcher. Starts on English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageSelection {
    current: Language,
}

impl LanguageSelection {
    pub fn new(current: Language) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn set(&mut self, language: Language) {
        self.current = language;
    }

    /// Selects by code; an unknown code leaves the selection unchanged.
    pub fn set_code(&mut self, code: &str) -> Result<Language, FormError> {
        let language: Language = code.parse()?;
        self.current = language;
        Ok(language)
    }
}
