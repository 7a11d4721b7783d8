//! Stemming configuration: which Snowball language to use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable consulted by [`StemConfig::from_env`].
pub const LANGUAGE_ENV: &str = "TEXTSTEM_LANGUAGE";

/// Languages with a Snowball stemming algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    Danish,
    Dutch,
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl Language {
    /// Every supported language, in alphabetical order.
    pub const ALL: [Language; 18] = [
        Self::Arabic,
        Self::Danish,
        Self::Dutch,
        Self::English,
        Self::Finnish,
        Self::French,
        Self::German,
        Self::Greek,
        Self::Hungarian,
        Self::Italian,
        Self::Norwegian,
        Self::Portuguese,
        Self::Romanian,
        Self::Russian,
        Self::Spanish,
        Self::Swedish,
        Self::Tamil,
        Self::Turkish,
    ];

    /// Lowercase English name, e.g. `"english"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::English => "english",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::German => "german",
            Self::Greek => "greek",
            Self::Hungarian => "hungarian",
            Self::Italian => "italian",
            Self::Norwegian => "norwegian",
            Self::Portuguese => "portuguese",
            Self::Romanian => "romanian",
            Self::Russian => "russian",
            Self::Spanish => "spanish",
            Self::Swedish => "swedish",
            Self::Tamil => "tamil",
            Self::Turkish => "turkish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.name() == wanted)
            .ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

/// Top-level stemming configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemConfig {
    /// Snowball algorithm used when no stemmer is supplied explicitly.
    #[serde(default)]
    pub language: Language,
}

impl StemConfig {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Create configuration from `TEXTSTEM_LANGUAGE`, falling back to English.
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(LANGUAGE_ENV).ok();
        Self::from_language_setting(value.as_deref())
    }

    /// Build a config from an optional language setting. Blank means default.
    pub fn from_language_setting(value: Option<&str>) -> Result<Self> {
        let language = match value.map(str::trim) {
            None | Some("") => Language::default(),
            Some(name) => name.parse::<Language>().map_err(|_| {
                Error::Config(format!("{} names no known language: {:?}", LANGUAGE_ENV, name))
            })?,
        };
        Ok(Self { language })
    }
}
