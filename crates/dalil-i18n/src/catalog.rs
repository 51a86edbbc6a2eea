//! Translation catalog data structures and lookup

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{CatalogError, Result};
use crate::{LanguageCode, TranslationKey};

/// Authored shape of a catalog file: `language -> key -> text`
type RawCatalog = BTreeMap<String, BTreeMap<String, String>>;

/// Immutable mapping from language to per-key display text.
///
/// Tables may be partial. Every lookup is total: a miss yields the key's
/// wire name, never another language's text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationCatalog {
    tables: HashMap<LanguageCode, HashMap<TranslationKey, String>>,
}

impl TranslationCatalog {
    /// Start assembling a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The complete catalog shipped with the help pages
    pub fn builtin() -> &'static TranslationCatalog {
        &crate::builtin::BUILTIN_CATALOG
    }

    /// Look up the authored text, if any.
    ///
    /// Empty text counts as a miss.
    pub fn get(&self, language: LanguageCode, key: TranslationKey) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(&key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Resolve a key for a language, echoing the key's wire name on a miss
    pub fn resolve(&self, language: LanguageCode, key: TranslationKey) -> &str {
        match self.get(language, key) {
            Some(text) => text,
            None => {
                trace!(%language, %key, "No translation, echoing key");
                key.as_str()
            }
        }
    }

    /// Resolve from raw strings as a host would hold them.
    ///
    /// An unrecognized language, an unknown key and a missing entry all
    /// return `key` unmodified.
    pub fn resolve_raw<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        let (Ok(language), Ok(parsed)) = (
            language.parse::<LanguageCode>(),
            key.parse::<TranslationKey>(),
        ) else {
            trace!(language, key, "Unrecognized language or key, echoing key");
            return key;
        };
        self.get(language, parsed).unwrap_or(key)
    }

    /// Languages that have at least one entry
    pub fn languages(&self) -> Vec<LanguageCode> {
        let mut languages: Vec<_> = self.tables.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Keys with no entry for `language`
    pub fn missing_keys(&self, language: LanguageCode) -> Vec<TranslationKey> {
        TranslationKey::ALL
            .into_iter()
            .filter(|key| self.get(language, *key).is_none())
            .collect()
    }

    /// Number of authored entries across all languages
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a catalog authored as YAML
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let raw: RawCatalog = serde_yaml::from_str(source)?;
        Self::from_raw(raw)
    }

    /// Parse a catalog authored as JSON
    pub fn from_json_str(source: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(source)?;
        Self::from_raw(raw)
    }

    /// Load a catalog file, choosing the format from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            Some("json") => Self::from_json_str(&source),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    fn from_raw(raw: RawCatalog) -> Result<Self> {
        let mut builder = Self::builder();
        for (language, entries) in raw {
            let language: LanguageCode = language.parse()?;
            for (key, text) in entries {
                builder = builder.insert(language, key.parse()?, text);
            }
        }
        let catalog = builder.build();
        debug!(entries = catalog.len(), "Loaded translation catalog");
        Ok(catalog)
    }
}

/// Builder for [`TranslationCatalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    tables: HashMap<LanguageCode, HashMap<TranslationKey, String>>,
}

impl CatalogBuilder {
    /// Add or replace a single entry
    pub fn insert(
        mut self,
        language: LanguageCode,
        key: TranslationKey,
        text: impl Into<String>,
    ) -> Self {
        self.tables
            .entry(language)
            .or_default()
            .insert(key, text.into());
        self
    }

    /// Add a whole table for one language
    pub fn table<'t>(
        mut self,
        language: LanguageCode,
        entries: impl IntoIterator<Item = (TranslationKey, &'t str)>,
    ) -> Self {
        let table = self.tables.entry(language).or_default();
        for (key, text) in entries {
            table.insert(key, text.to_string());
        }
        self
    }

    /// Freeze the catalog
    pub fn build(self) -> TranslationCatalog {
        TranslationCatalog {
            tables: self.tables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial_catalog() -> TranslationCatalog {
        TranslationCatalog::builder()
            .insert(LanguageCode::Fr, TranslationKey::Faq, "FAQ")
            .insert(LanguageCode::Ar, TranslationKey::AboutTitle, "حول")
            .build()
    }

    #[test]
    fn test_resolve_hit() {
        let catalog = partial_catalog();
        assert_eq!(catalog.resolve(LanguageCode::Ar, TranslationKey::AboutTitle), "حول");
    }

    #[test]
    fn test_resolve_miss_echoes_key() {
        let catalog = partial_catalog();
        assert_eq!(
            catalog.resolve(LanguageCode::Ar, TranslationKey::Faq),
            "faq"
        );
        assert_eq!(
            catalog.resolve(LanguageCode::En, TranslationKey::ContactDesc),
            "contactDesc"
        );
    }

    #[test]
    fn test_no_cross_language_fallback() {
        let catalog = partial_catalog();
        // fr has "FAQ" but ar must not borrow it
        assert_eq!(catalog.get(LanguageCode::Ar, TranslationKey::Faq), None);
        assert_ne!(catalog.resolve(LanguageCode::Ar, TranslationKey::Faq), "FAQ");
    }

    #[test]
    fn test_resolve_raw_unknown_inputs() {
        let catalog = partial_catalog();
        assert_eq!(catalog.resolve_raw("de", "faq"), "faq");
        assert_eq!(catalog.resolve_raw("fr", "whatever"), "whatever");
        assert_eq!(catalog.resolve_raw("fr", "faq"), "FAQ");
    }

    #[test]
    fn test_missing_keys() {
        let catalog = partial_catalog();
        let missing = catalog.missing_keys(LanguageCode::Fr);
        assert_eq!(missing.len(), TranslationKey::ALL.len() - 1);
        assert!(!missing.contains(&TranslationKey::Faq));
    }

    #[test]
    fn test_table_and_len() {
        let catalog = TranslationCatalog::builder()
            .table(
                LanguageCode::En,
                [(TranslationKey::Faq, "FAQ"), (TranslationKey::ApiDoc, "API Documentation")],
            )
            .build();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.languages(), vec![LanguageCode::En]);
        assert!(TranslationCatalog::default().is_empty());
    }

    #[test]
    fn test_from_yaml() {
        let catalog = TranslationCatalog::from_yaml_str(
            "en:\n  aboutTitle: About us\nfr:\n  aboutTitle: Qui sommes-nous\n",
        )
        .unwrap();
        assert_eq!(
            catalog.resolve(LanguageCode::En, TranslationKey::AboutTitle),
            "About us"
        );
        assert_eq!(
            catalog.resolve(LanguageCode::Fr, TranslationKey::AboutTitle),
            "Qui sommes-nous"
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_language() {
        let err = TranslationCatalog::from_json_str(r#"{"de": {"faq": "FAQ"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLanguage(code) if code == "de"));
    }

    #[test]
    fn test_from_json_rejects_unknown_key() {
        let err = TranslationCatalog::from_json_str(r#"{"en": {"nope": "x"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownKey(key) if key == "nope"));
    }
}
