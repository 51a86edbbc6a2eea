//! Supported display languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A language the help pages are authored in.
///
/// The set is closed. Anything else a host passes in is treated as
/// unrecognized by the resolver rather than mapped onto one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Fr,
    Ar,
    En,
}

impl LanguageCode {
    /// Every supported language, in catalog order
    pub const ALL: [LanguageCode; 3] = [LanguageCode::Fr, LanguageCode::Ar, LanguageCode::En];

    /// The two-letter code
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::Fr => "fr",
            LanguageCode::Ar => "ar",
            LanguageCode::En => "en",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(LanguageCode::Fr),
            "ar" => Ok(LanguageCode::Ar),
            "en" => Ok(LanguageCode::En),
            _ => Err(CatalogError::UnknownLanguage(s.to_string())),
        }
    }
}
