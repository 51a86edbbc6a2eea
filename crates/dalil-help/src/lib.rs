//! Dalil Help Sections
//!
//! This crate drives the help pages of Dalil.dz:
//! - Section dispatch (about, contact, technical support, or a not-found page)
//! - Tab navigation inside technical support, with a nested documentation strip
//! - Localized labels through [`dalil_i18n`]
//! - A ratatui view and configuration for the `dalil-help` terminal viewer
//!
//! # Examples
//!
//! ```
//! use dalil_help::{ContentBlock, Navigator, SectionId, TabId};
//! use dalil_i18n::Translator;
//!
//! let mut navigator = Navigator::new();
//! navigator.select_tab(TabId::Chat);
//!
//! let translator = Translator::builtin("en");
//! let descriptor = navigator.render(&SectionId::from("technical-support"), &translator);
//! assert_eq!(descriptor.block(), Some(ContentBlock::Chat));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod render;
pub mod section;
pub mod view;

pub use config::{ConfigLoader, HelpConfig};
pub use content::{BlockContent, ContentBlock, ContentEntry, ContentRegistry};
pub use error::{HelpError, Result};
pub use navigation::{NavAction, Navigator, NavigatorState, NestedTabId, TabId, TabKind};
pub use render::{render, ContentDescriptor, SectionHeader, SupportBody, TabLabel, TabStrip};
pub use section::{SectionId, UnknownSection};
pub use view::HelpView;
