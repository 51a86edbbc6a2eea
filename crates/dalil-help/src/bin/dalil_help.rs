//! Dalil help viewer - browse the help sections in a terminal

use std::io::{self, Stdout, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dalil_help::{ConfigLoader, ContentRegistry, HelpView, Navigator, NestedTabId, SectionId, TabId};
use dalil_i18n::{LanguageCode, TranslationCatalog, Translator};
use ratatui::{backend::CrosstermBackend, Terminal};

#[derive(Parser)]
#[command(name = "dalil-help")]
#[command(about = "Browse the Dalil.dz help sections")]
struct Cli {
    /// Section to open (about, contact, technical-support)
    #[arg(short, long)]
    section: Option<String>,

    /// Display language (fr, ar, en)
    #[arg(short, long)]
    language: Option<String>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initially selected support tab
    #[arg(long)]
    tab: Option<TabId>,

    /// Initially selected documentation tab
    #[arg(long)]
    nested_tab: Option<NestedTabId>,

    /// Print the section descriptor as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_path(path.clone()),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    let language = cli.language.clone().unwrap_or_else(|| config.language.clone());
    let section = SectionId::from(cli.section.as_deref().unwrap_or(&config.section));

    let loaded = config.load_catalog()?;
    let catalog = loaded.as_ref().unwrap_or_else(|| TranslationCatalog::builtin());
    match language.parse::<LanguageCode>() {
        Ok(code) => {
            let missing = catalog.missing_keys(code);
            if !missing.is_empty() {
                tracing::warn!(
                    %code,
                    ?missing,
                    available = ?catalog.languages(),
                    "Catalog is missing translations"
                );
            }
        }
        Err(_) => tracing::warn!(%language, "Unrecognized language, labels will show keys"),
    }

    let mut navigator = Navigator::new();
    if let Some(tab) = cli.tab {
        navigator.select_tab(tab);
    }
    if let Some(tab) = cli.nested_tab {
        navigator.select_nested_tab(tab);
    }

    let translator = Translator::new(catalog, &language);

    if cli.dump {
        let descriptor = navigator.render(&section, &translator);
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    let mut view = HelpView::new(section, translator, ContentRegistry::dalil_defaults())
        .with_navigator(navigator);

    enable_raw_mode()?;
    let mut terminal = enter_screen(io::stdout(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let result = run(&mut terminal, &mut view);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Viewer error: {}", e);
    }
    result
}

/// Switch `out` to the alternate screen, calling `restore` if any step fails
fn enter_screen<W: Write>(
    mut out: W,
    restore: impl FnOnce(),
) -> Result<Terminal<CrosstermBackend<W>>> {
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        restore();
        return Err(e.into());
    }
    Terminal::new(CrosstermBackend::new(out)).map_err(|e| {
        restore();
        anyhow::Error::from(e)
    })
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, view: &mut HelpView<'_>) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            view.render(frame, area);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('a') => view.set_section(SectionId::About),
                KeyCode::Char('c') => view.set_section(SectionId::Contact),
                KeyCode::Char('s') => view.set_section(SectionId::TechnicalSupport),
                _ => {
                    view.handle_key(key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_enter_screen_restores_on_failure() {
        let mut restored = false;
        let result = enter_screen(BrokenPipe, || restored = true);
        assert!(result.is_err());
        assert!(restored);
    }
}
