// ABOUTME: Main entry point for the Museum Genesis Lab wizard
//
// Binary: genlab
// Usage: genlab [COMMAND]
// - No command: launches the wizard TUI
// - export: render the concept to markdown/plain text
// - reset: delete the saved concept
// - path: print the storage location

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

mod app;
mod cli;
mod components;
mod concept;
mod export;
mod steps;
mod summary;

use app::{AppState, EventHandler};
use components::LayoutComponent;
use concept::ConceptStore;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();
    let store_path = cli::store_path(&args)?;

    let result = match args.command {
        Some(cli::Commands::Export(export_args)) => cli::export::execute(export_args, &store_path),
        Some(cli::Commands::Reset(reset_args)) => cli::reset::execute(reset_args, &store_path),
        Some(cli::Commands::Path) => {
            println!("{}", store_path.display());
            Ok(())
        }
        Some(cli::Commands::Tui) | None => {
            let state = AppState::new(ConceptStore::open(store_path));
            run_tui(state)
        }
    };

    if result.is_err() {
        cleanup_terminal();
    }
    result
}

fn run_tui(mut state: AppState) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let layout = LayoutComponent::new();
    let result = run_tui_loop(&mut state, &layout, &mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_tui_loop(
    state: &mut AppState,
    layout: &LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Release events arrive on some terminals; only react to presses
                if key_event.kind != event::KeyEventKind::Release {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, state) {
                        EventHandler::process_event(app_event, state);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            state.tick();
            last_tick = Instant::now();
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = match ConceptStore::default_root() {
        Ok(root) => root.join("logs"),
        Err(_) => std::path::PathBuf::from(".genesis-lab/logs"),
    };
    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "genlab-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        // No log file, no logging; the wizard itself is unaffected
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before logging so the message is readable
        cleanup_terminal();
        error!("Panic: {}", panic_info);
        eprintln!("genlab crashed: {panic_info}");
    }));
}
