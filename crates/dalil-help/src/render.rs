//! Section dispatch into renderable content descriptors

use dalil_i18n::{TranslationKey, Translator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::ContentBlock;
use crate::navigation::{NavigatorState, NestedTabId, TabId, TabKind};
use crate::section::SectionId;

/// Localized title and subtitle shown above a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeader {
    pub title: String,
    pub description: String,
}

impl SectionHeader {
    fn resolve(
        translator: &Translator<'_>,
        title: TranslationKey,
        description: TranslationKey,
    ) -> Self {
        Self {
            title: translator.text(title).to_string(),
            description: translator.text(description).to_string(),
        }
    }
}

/// One entry of a tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabLabel<T> {
    pub id: T,
    pub label: String,
    pub active: bool,
}

/// A full strip of tabs with exactly one marked active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStrip<T> {
    pub tabs: Vec<TabLabel<T>>,
}

impl<T: TabKind> TabStrip<T> {
    fn build(active: T, translator: &Translator<'_>) -> Self {
        let tabs = T::ALL
            .iter()
            .map(|tab| TabLabel {
                id: *tab,
                label: translator.text(tab.label_key()).to_string(),
                active: *tab == active,
            })
            .collect();
        Self { tabs }
    }

    /// The tab marked active
    pub fn active(&self) -> Option<T> {
        self.tabs.iter().find(|tab| tab.active).map(|tab| tab.id)
    }

    /// Position of the active tab
    pub fn active_index(&self) -> usize {
        self.tabs.iter().position(|tab| tab.active).unwrap_or(0)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|tab| tab.label.as_str()).collect()
    }
}

/// Body of the technical support section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SupportBody {
    Block {
        block: ContentBlock,
    },
    TechnicalDoc {
        tabs: TabStrip<NestedTabId>,
        block: ContentBlock,
    },
}

/// What a host should display for a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentDescriptor {
    About {
        header: SectionHeader,
        block: ContentBlock,
    },
    Contact {
        header: SectionHeader,
        block: ContentBlock,
    },
    TechnicalSupport {
        header: SectionHeader,
        tabs: TabStrip<TabId>,
        body: SupportBody,
    },
    NotFound {
        section: String,
        message: String,
    },
}

impl ContentDescriptor {
    pub fn header(&self) -> Option<&SectionHeader> {
        match self {
            ContentDescriptor::About { header, .. }
            | ContentDescriptor::Contact { header, .. }
            | ContentDescriptor::TechnicalSupport { header, .. } => Some(header),
            ContentDescriptor::NotFound { .. } => None,
        }
    }

    /// The innermost content block on display
    pub fn block(&self) -> Option<ContentBlock> {
        match self {
            ContentDescriptor::About { block, .. } | ContentDescriptor::Contact { block, .. } => {
                Some(*block)
            }
            ContentDescriptor::TechnicalSupport { body, .. } => match body {
                SupportBody::Block { block } | SupportBody::TechnicalDoc { block, .. } => {
                    Some(*block)
                }
            },
            ContentDescriptor::NotFound { .. } => None,
        }
    }

    /// Top-level tab strip, only present for technical support
    pub fn tabs(&self) -> Option<&TabStrip<TabId>> {
        match self {
            ContentDescriptor::TechnicalSupport { tabs, .. } => Some(tabs),
            _ => None,
        }
    }

    /// Documentation tab strip, only present under the technical doc tab
    pub fn nested_tabs(&self) -> Option<&TabStrip<NestedTabId>> {
        match self {
            ContentDescriptor::TechnicalSupport {
                body: SupportBody::TechnicalDoc { tabs, .. },
                ..
            } => Some(tabs),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentDescriptor::NotFound { .. })
    }
}

/// Block shown for a top-level tab other than technical documentation
fn tab_block(tab: TabId) -> Option<ContentBlock> {
    match tab {
        TabId::Faq => Some(ContentBlock::Faq),
        TabId::Chat => Some(ContentBlock::Chat),
        TabId::UserGuide => Some(ContentBlock::UserGuide),
        TabId::VideoTutorials => Some(ContentBlock::VideoTutorials),
        TabId::AdminGuide => Some(ContentBlock::AdminGuide),
        TabId::TechnicalDoc => None,
    }
}

fn nested_block(tab: NestedTabId) -> ContentBlock {
    match tab {
        NestedTabId::Overview => ContentBlock::TechnicalSpecification,
        NestedTabId::ApiDoc => ContentBlock::ApiDocumentation,
        NestedTabId::Deployment => ContentBlock::DeploymentGuide,
    }
}

fn support_body(state: &NavigatorState, translator: &Translator<'_>) -> SupportBody {
    match tab_block(state.active_tab) {
        Some(block) => SupportBody::Block { block },
        None => SupportBody::TechnicalDoc {
            tabs: TabStrip::build(state.active_nested_tab, translator),
            block: nested_block(state.active_nested_tab),
        },
    }
}

/// Select the content for `section` given the navigator state.
///
/// About and contact ignore `state`. Unknown sections produce
/// [`ContentDescriptor::NotFound`].
pub fn render(
    section: &SectionId,
    state: &NavigatorState,
    translator: &Translator<'_>,
) -> ContentDescriptor {
    match section {
        SectionId::About => ContentDescriptor::About {
            header: SectionHeader::resolve(
                translator,
                TranslationKey::AboutTitle,
                TranslationKey::AboutDesc,
            ),
            block: ContentBlock::About,
        },
        SectionId::Contact => ContentDescriptor::Contact {
            header: SectionHeader::resolve(
                translator,
                TranslationKey::ContactTitle,
                TranslationKey::ContactDesc,
            ),
            block: ContentBlock::Contact,
        },
        SectionId::TechnicalSupport => ContentDescriptor::TechnicalSupport {
            header: SectionHeader::resolve(
                translator,
                TranslationKey::SupportTitle,
                TranslationKey::SupportDesc,
            ),
            tabs: TabStrip::build(state.active_tab, translator),
            body: support_body(state, translator),
        },
        SectionId::Unknown(id) => {
            debug!(section = %id, "Unknown help section");
            ContentDescriptor::NotFound {
                section: id.as_str().to_string(),
                message: translator.text(TranslationKey::SectionNotFound).to_string(),
            }
        }
    }
}
