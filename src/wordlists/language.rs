//! Supported languages and list variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Game language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-br")]
    PtBr,
    #[serde(rename = "en-us")]
    EnUs,
    #[serde(rename = "fr")]
    Fr,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::PtBr, Self::EnUs, Self::Fr];

    /// Code used for file names and storage keys
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PtBr => "pt-br",
            Self::EnUs => "en-us",
            Self::Fr => "fr",
        }
    }

    /// Short display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PtBr => "PT",
            Self::EnUs => "EN",
            Self::Fr => "FR",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    /// Next language, in label order
    #[must_use]
    pub const fn next(self) -> Self {
        // EN, FR, PT
        match self {
            Self::EnUs => Self::Fr,
            Self::Fr => Self::PtBr,
            Self::PtBr => Self::EnUs,
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
        Self::from_code(s).ok_or_else(|| {
            format!("Unknown language '{s}', expected one of: pt-br, en-us, fr")
        })
    }
}

/// Which list random words are drawn from
///
/// Guesses are always checked against the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListVariant {
    #[default]
    Full,
    Common,
}

impl ListVariant {
    /// File stem for a language, e.g. `en-us-common`
    #[must_use]
    pub fn file_stem(self, language: Language) -> String {
        match self {
            Self::Full => language.code().to_string(),
            Self::Common => format!("{}-common", language.code()),
        }
    }
}

impl FromStr for ListVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "all" => Ok(Self::Full),
            "common" => Ok(Self::Common),
            _ => Err(format!("Unknown word list '{s}', expected 'full' or 'common'")),
        }
    }
}
