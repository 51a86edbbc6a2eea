//! Top-level help section identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which help area a host asked for.
///
/// Parsing is total: any identifier outside the known set is kept in
/// [`SectionId::Unknown`] so it can be rendered as a not-found page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionId {
    About,
    Contact,
    TechnicalSupport,
    Unknown(UnknownSection),
}

/// An identifier outside the known sections.
///
/// Only built by parsing, so it never holds a known identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownSection(String);

impl UnknownSection {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SectionId {
    pub fn as_str(&self) -> &str {
        match self {
            SectionId::About => "about",
            SectionId::Contact => "contact",
            SectionId::TechnicalSupport => "technical-support",
            SectionId::Unknown(id) => id.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SectionId::Unknown(_))
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        match id {
            "about" => SectionId::About,
            "contact" => SectionId::Contact,
            "technical-support" => SectionId::TechnicalSupport,
            other => SectionId::Unknown(UnknownSection(other.to_string())),
        }
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        SectionId::from(id.as_str())
    }
}

impl From<SectionId> for String {
    fn from(section: SectionId) -> Self {
        section.as_str().to_string()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
