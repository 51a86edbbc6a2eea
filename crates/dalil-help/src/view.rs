//! Terminal view of the help sections

use crossterm::event::{KeyCode, KeyEvent};
use dalil_i18n::Translator;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::{
    ContentBlock, ContentDescriptor, ContentRegistry, NavAction, Navigator, SectionHeader,
    SectionId, SupportBody, TabId, TabKind, TabStrip,
};

/// Help view: a section, its tab navigation and the content registry
pub struct HelpView<'a> {
    navigator: Navigator,
    section: SectionId,
    translator: Translator<'a>,
    registry: ContentRegistry,
    scroll_offset: u16,
}

impl<'a> HelpView<'a> {
    /// Create a new help view
    pub fn new(section: SectionId, translator: Translator<'a>, registry: ContentRegistry) -> Self {
        Self {
            navigator: Navigator::new(),
            section,
            translator,
            registry,
            scroll_offset: 0,
        }
    }

    pub fn with_navigator(mut self, navigator: Navigator) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn section(&self) -> &SectionId {
        &self.section
    }

    /// Switch to another section; tab selection is kept
    pub fn set_section(&mut self, section: SectionId) {
        self.section = section;
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Descriptor for the current section and navigation state
    pub fn descriptor(&self) -> ContentDescriptor {
        self.navigator.render(&self.section, &self.translator)
    }

    /// Map a key to a tab transition.
    ///
    /// Only the strips on screen react: top-level keys in technical support,
    /// `[`/`]` only while the documentation tab is shown.
    pub fn action_for_key(&self, key: KeyEvent) -> Option<NavAction> {
        if self.section != SectionId::TechnicalSupport {
            return None;
        }
        let tab = self.navigator.active_tab();
        let nested = self.navigator.active_nested_tab();

        match key.code {
            KeyCode::Right | KeyCode::Tab => Some(NavAction::SelectTab(tab.next())),
            KeyCode::Left | KeyCode::BackTab => Some(NavAction::SelectTab(tab.previous())),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                TabId::ALL.get(index).copied().map(NavAction::SelectTab)
            }
            KeyCode::Char(']') if tab == TabId::TechnicalDoc => {
                Some(NavAction::SelectNestedTab(nested.next()))
            }
            KeyCode::Char('[') if tab == TabId::TechnicalDoc => {
                Some(NavAction::SelectNestedTab(nested.previous()))
            }
            _ => None,
        }
    }

    /// Handle keyboard input, returning whether the key was used
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(action) = self.action_for_key(key) {
            self.navigator.dispatch(action);
            self.scroll_offset = 0;
            return true;
        }

        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                true
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                true
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                true
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                true
            }
            _ => false,
        }
    }

    /// Render the current section
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self.descriptor() {
            ContentDescriptor::About { header, block }
            | ContentDescriptor::Contact { header, block } => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(0)])
                    .split(area);
                self.render_header(frame, chunks[0], &header);
                self.render_block(frame, chunks[1], block);
            }
            ContentDescriptor::TechnicalSupport { header, tabs, body } => {
                let nested = match &body {
                    SupportBody::TechnicalDoc { tabs, .. } => Some(tabs),
                    SupportBody::Block { .. } => None,
                };
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(if nested.is_some() { 3 } else { 0 }),
                        Constraint::Min(0),
                    ])
                    .split(area);

                self.render_header(frame, chunks[0], &header);
                self.render_strip(frame, chunks[1], &tabs, Color::Green);
                if let Some(nested) = nested {
                    self.render_strip(frame, chunks[2], nested, Color::Blue);
                }
                let block = match body {
                    SupportBody::Block { block } | SupportBody::TechnicalDoc { block, .. } => block,
                };
                self.render_block(frame, chunks[3], block);
            }
            ContentDescriptor::NotFound { message, .. } => {
                let paragraph = Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(paragraph, area);
            }
        }
    }

    /// Render section title and description
    fn render_header(&self, frame: &mut Frame, area: Rect, header: &SectionHeader) {
        let lines = vec![
            Line::from(Span::styled(
                header.title.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                header.description.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    /// Render a tab strip
    fn render_strip<T: TabKind>(
        &self,
        frame: &mut Frame,
        area: Rect,
        strip: &TabStrip<T>,
        accent: Color,
    ) {
        let tabs = Tabs::new(strip.labels())
            .select(strip.active_index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            )
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }

    /// Render the registered content of a block
    fn render_block(&self, frame: &mut Frame, area: Rect, block: ContentBlock) {
        let (title, lines) = match self.registry.get(block) {
            Some(content) => (
                content.title.clone(),
                content.lines().into_iter().map(Line::from).collect::<Vec<_>>(),
            ),
            None => (
                block.to_string(),
                vec![Line::from(Span::styled(
                    format!("[{}]", block),
                    Style::default().fg(Color::DarkGray),
                ))],
            ),
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        frame.render_widget(paragraph, area);
    }
}
