//! Dalil i18n
//!
//! Flat key-to-string localization for the Dalil help pages:
//! - A closed set of languages (`fr`, `ar`, `en`) and translation keys
//! - An immutable [`TranslationCatalog`] with a built-in, complete table
//! - Total lookups: a missing entry or unknown language echoes the key
//!
//! # Examples
//!
//! ```
//! use dalil_i18n::{LanguageCode, TranslationCatalog, TranslationKey};
//!
//! let catalog = TranslationCatalog::builtin();
//! assert_eq!(catalog.resolve(LanguageCode::En, TranslationKey::AboutTitle), "About");
//!
//! // Unknown languages never fall back to another table
//! assert_eq!(catalog.resolve_raw("de", "aboutTitle"), "aboutTitle");
//! ```

mod builtin;
pub mod catalog;
pub mod error;
pub mod key;
pub mod language;
pub mod translator;

pub use catalog::{CatalogBuilder, TranslationCatalog};
pub use error::{CatalogError, Result};
pub use key::TranslationKey;
pub use language::LanguageCode;
pub use translator::Translator;
