//! Catalog bound to the language of a single render

use crate::{LanguageCode, TranslationCatalog, TranslationKey};

/// Resolves keys against one catalog in one language.
///
/// Built from the raw language string a host passes in; an unrecognized code
/// is kept as `None` and every lookup then echoes the key.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a TranslationCatalog,
    language: Option<LanguageCode>,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a TranslationCatalog, language: &str) -> Self {
        Self {
            catalog,
            language: language.parse().ok(),
        }
    }

    pub fn for_language(catalog: &'a TranslationCatalog, language: LanguageCode) -> Self {
        Self {
            catalog,
            language: Some(language),
        }
    }

    /// Translator over the built-in catalog
    pub fn builtin(language: &str) -> Translator<'static> {
        Translator::new(TranslationCatalog::builtin(), language)
    }

    /// The recognized language, if any
    pub fn language(&self) -> Option<LanguageCode> {
        self.language
    }

    pub fn text(&self, key: TranslationKey) -> &'a str {
        match self.language {
            Some(language) => self.catalog.resolve(language, key),
            None => key.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_language() {
        let translator = Translator::builtin("ar");
        assert_eq!(translator.language(), Some(LanguageCode::Ar));
        assert_eq!(translator.text(TranslationKey::ContactTitle), "اتصل بنا");
    }

    #[test]
    fn test_unrecognized_language_echoes() {
        let translator = Translator::builtin("de");
        assert_eq!(translator.language(), None);
        for key in TranslationKey::ALL {
            assert_eq!(translator.text(key), key.as_str());
        }
    }
}
