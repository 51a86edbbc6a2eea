//! Translation keys used by the help pages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable identifier for a piece of UI text.
///
/// The wire name (see [`TranslationKey::as_str`]) is what the resolver echoes
/// back when no text is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationKey {
    AboutTitle,
    AboutDesc,
    ContactTitle,
    ContactDesc,
    SupportTitle,
    SupportDesc,
    Faq,
    ChatSupport,
    HelpCenter,
    TechnicalSpec,
    UserGuide,
    AdminGuide,
    ApiDoc,
    VideoTutorials,
    TechnicalDoc,
    Deployment,
    SectionNotFound,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 17] = [
        TranslationKey::AboutTitle,
        TranslationKey::AboutDesc,
        TranslationKey::ContactTitle,
        TranslationKey::ContactDesc,
        TranslationKey::SupportTitle,
        TranslationKey::SupportDesc,
        TranslationKey::Faq,
        TranslationKey::ChatSupport,
        TranslationKey::HelpCenter,
        TranslationKey::TechnicalSpec,
        TranslationKey::UserGuide,
        TranslationKey::AdminGuide,
        TranslationKey::ApiDoc,
        TranslationKey::VideoTutorials,
        TranslationKey::TechnicalDoc,
        TranslationKey::Deployment,
        TranslationKey::SectionNotFound,
    ];

    /// The key's wire name, e.g. `aboutTitle`
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationKey::AboutTitle => "aboutTitle",
            TranslationKey::AboutDesc => "aboutDesc",
            TranslationKey::ContactTitle => "contactTitle",
            TranslationKey::ContactDesc => "contactDesc",
            TranslationKey::SupportTitle => "supportTitle",
            TranslationKey::SupportDesc => "supportDesc",
            TranslationKey::Faq => "faq",
            TranslationKey::ChatSupport => "chatSupport",
            TranslationKey::HelpCenter => "helpCenter",
            TranslationKey::TechnicalSpec => "technicalSpec",
            TranslationKey::UserGuide => "userGuide",
            TranslationKey::AdminGuide => "adminGuide",
            TranslationKey::ApiDoc => "apiDoc",
            TranslationKey::VideoTutorials => "videoTutorials",
            TranslationKey::TechnicalDoc => "technicalDoc",
            TranslationKey::Deployment => "deployment",
            TranslationKey::SectionNotFound => "sectionNotFound",
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TranslationKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for key in TranslationKey::ALL {
            assert_eq!(key.as_str().parse::<TranslationKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_serde_matches_wire_name() {
        for key in TranslationKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            "notAKey".parse::<TranslationKey>(),
            Err(CatalogError::UnknownKey(k)) if k == "notAKey"
        ));
    }
}
