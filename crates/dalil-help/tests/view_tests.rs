//! Rendering tests for the terminal view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dalil_help::{BlockContent, ContentBlock, ContentRegistry, HelpView, SectionId, TabId};
use dalil_i18n::Translator;
use ratatui::{backend::TestBackend, Terminal};

fn draw(view: &HelpView<'_>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render(frame, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_support_section_shows_strip_and_faq() {
    let view = HelpView::new(
        SectionId::TechnicalSupport,
        Translator::builtin("en"),
        ContentRegistry::dalil_defaults(),
    );
    let screen = draw(&view);

    assert!(screen.contains("Technical Support"));
    assert!(screen.contains("Chat Support"));
    assert!(screen.contains("Video Tutorials"));
    assert!(screen.contains("Comment créer un compte ?"));
}

#[test]
fn test_technical_doc_shows_nested_strip() {
    let mut view = HelpView::new(
        SectionId::TechnicalSupport,
        Translator::builtin("en"),
        ContentRegistry::dalil_defaults(),
    );
    view.handle_key(KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE));
    view.handle_key(KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE));
    assert_eq!(view.navigator().active_tab(), TabId::TechnicalDoc);

    let screen = draw(&view);
    assert!(screen.contains("Technical Specification"));
    assert!(screen.contains("API Documentation"));
    assert!(screen.contains("Guide de Déploiement"));
}

#[test]
fn test_unregistered_block_placeholder() {
    let view = HelpView::new(
        SectionId::TechnicalSupport,
        Translator::builtin("en"),
        ContentRegistry::new(),
    );
    let screen = draw(&view);
    assert!(screen.contains("[faq]"));
}

#[test]
fn test_host_supplied_block() {
    let registry = ContentRegistry::new().with_block(
        ContentBlock::UserGuide,
        BlockContent::new("Getting started").add_entry("Search", "Use the main search bar"),
    );
    let mut view = HelpView::new(SectionId::TechnicalSupport, Translator::builtin("en"), registry);
    view.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));

    let screen = draw(&view);
    assert!(screen.contains("Getting started"));
    assert!(screen.contains("Use the main search bar"));
}

#[test]
fn test_not_found_section() {
    let view = HelpView::new(
        SectionId::from("pricing"),
        Translator::builtin("fr"),
        ContentRegistry::dalil_defaults(),
    );
    let screen = draw(&view);
    assert!(screen.contains("Section non trouvée"));
}

#[test]
fn test_about_section() {
    let view = HelpView::new(
        SectionId::About,
        Translator::builtin("en"),
        ContentRegistry::dalil_defaults(),
    );
    let screen = draw(&view);
    assert!(screen.contains("Information about Dalil.dz"));
    assert!(screen.contains("Partenaires institutionnels"));
}
