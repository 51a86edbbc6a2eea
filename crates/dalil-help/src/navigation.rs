//! Tab navigation state for the technical support section

use std::fmt;
use std::str::FromStr;

use dalil_i18n::{TranslationKey, Translator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HelpError;
use crate::render::{self, ContentDescriptor};
use crate::section::SectionId;

/// A closed set of tabs rendered as one strip
pub trait TabKind: Copy + Eq + fmt::Debug + 'static {
    /// Every tab, in strip order
    const ALL: &'static [Self];

    /// Wire identifier, e.g. `user-guide`
    fn as_str(self) -> &'static str;

    /// Key of the tab's label
    fn label_key(self) -> TranslationKey;

    /// Position in the strip
    fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    /// Next tab, wrapping at the end
    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping at the start
    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Tabs of the technical support section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    #[default]
    Faq,
    Chat,
    UserGuide,
    VideoTutorials,
    AdminGuide,
    TechnicalDoc,
}

impl TabKind for TabId {
    const ALL: &'static [TabId] = &[
        TabId::Faq,
        TabId::Chat,
        TabId::UserGuide,
        TabId::VideoTutorials,
        TabId::AdminGuide,
        TabId::TechnicalDoc,
    ];

    fn as_str(self) -> &'static str {
        match self {
            TabId::Faq => "faq",
            TabId::Chat => "chat",
            TabId::UserGuide => "user-guide",
            TabId::VideoTutorials => "video-tutorials",
            TabId::AdminGuide => "admin-guide",
            TabId::TechnicalDoc => "technical-doc",
        }
    }

    fn label_key(self) -> TranslationKey {
        match self {
            TabId::Faq => TranslationKey::Faq,
            TabId::Chat => TranslationKey::ChatSupport,
            TabId::UserGuide => TranslationKey::UserGuide,
            TabId::VideoTutorials => TranslationKey::VideoTutorials,
            TabId::AdminGuide => TranslationKey::AdminGuide,
            TabId::TechnicalDoc => TranslationKey::TechnicalDoc,
        }
    }
}

/// Tabs nested inside the technical documentation tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestedTabId {
    #[default]
    Overview,
    ApiDoc,
    Deployment,
}

impl TabKind for NestedTabId {
    const ALL: &'static [NestedTabId] = &[
        NestedTabId::Overview,
        NestedTabId::ApiDoc,
        NestedTabId::Deployment,
    ];

    fn as_str(self) -> &'static str {
        match self {
            NestedTabId::Overview => "overview",
            NestedTabId::ApiDoc => "api-doc",
            NestedTabId::Deployment => "deployment",
        }
    }

    fn label_key(self) -> TranslationKey {
        match self {
            NestedTabId::Overview => TranslationKey::TechnicalSpec,
            NestedTabId::ApiDoc => TranslationKey::ApiDoc,
            NestedTabId::Deployment => TranslationKey::Deployment,
        }
    }
}

macro_rules! impl_tab_text {
    ($tab:ty, $err:ident) => {
        impl fmt::Display for $tab {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $tab {
            type Err = HelpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$tab as TabKind>::ALL
                    .iter()
                    .copied()
                    .find(|tab| tab.as_str() == s)
                    .ok_or_else(|| HelpError::$err(s.to_string()))
            }
        }
    };
}

impl_tab_text!(TabId, UnknownTab);
impl_tab_text!(NestedTabId, UnknownNestedTab);

/// A navigation event raised by a tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tab", rename_all = "kebab-case")]
pub enum NavAction {
    SelectTab(TabId),
    SelectNestedTab(NestedTabId),
}

/// Which tabs are active.
///
/// The two fields are independent: the nested tab keeps its value while
/// another top-level tab is shown and may be changed at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigatorState {
    pub active_tab: TabId,
    pub active_nested_tab: NestedTabId,
}

impl NavigatorState {
    /// Apply one transition
    pub fn reduce(self, action: NavAction) -> Self {
        match action {
            NavAction::SelectTab(tab) => Self {
                active_tab: tab,
                ..self
            },
            NavAction::SelectNestedTab(tab) => Self {
                active_nested_tab: tab,
                ..self
            },
        }
    }
}

/// Mutable holder of [`NavigatorState`] owned by a hosting view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    state: NavigatorState,
}

impl Navigator {
    /// Navigator on the FAQ tab with the overview documentation tab
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: NavigatorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn active_tab(&self) -> TabId {
        self.state.active_tab
    }

    pub fn active_nested_tab(&self) -> NestedTabId {
        self.state.active_nested_tab
    }

    pub fn dispatch(&mut self, action: NavAction) {
        let next = self.state.reduce(action);
        if next != self.state {
            debug!(?action, "Navigation changed");
        }
        self.state = next;
    }

    pub fn select_tab(&mut self, tab: TabId) {
        self.dispatch(NavAction::SelectTab(tab));
    }

    pub fn select_nested_tab(&mut self, tab: NestedTabId) {
        self.dispatch(NavAction::SelectNestedTab(tab));
    }

    /// Describe what to show for `section` in the current state
    pub fn render(&self, section: &SectionId, translator: &Translator<'_>) -> ContentDescriptor {
        render::render(section, &self.state, translator)
    }
}
