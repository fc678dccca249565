mod app;
mod config;
mod expense;
mod logging;
mod storage;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::expense::ExpenseStore;
use crate::storage::ExpenseStorage;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("Warning: file logging unavailable: {:#}", e);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let storage = ExpenseStorage::new(
        cfg.storage
            .data_file
            .clone()
            .unwrap_or_else(ExpenseStorage::default_path),
    );
    let history = storage.load();
    info!(
        "hydrated {} expenses from {}",
        history.len(),
        storage.path().display()
    );
    let mut state = AppState::new(cfg, ExpenseStore::new(history));

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (5 FPS)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::AddExpense {
                    amount,
                    description,
                } => match state.store.add(&amount, &description) {
                    Ok(expense) => {
                        let summary = format!(
                            "Added {}: {:.2} ({})",
                            expense.description, expense.amount, expense.category
                        );
                        info!("added expense {}", expense.id);
                        state.clear_form();
                        state.set_status(summary);
                        persist(&mut state, &storage);
                    }
                    Err(e) => {
                        state.set_status(e.to_string());
                    }
                },
                Action::DeleteExpense { id } => {
                    state.store.delete(&id);
                    state.clamp_selection();
                    state.dirty = true;
                    info!("deleted expense {}", id);
                    persist(&mut state, &storage);
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Serialize the full history after every mutation. Failures are reported
/// in the status bar but never abort the session.
fn persist(state: &mut AppState, storage: &ExpenseStorage) {
    if let Err(e) = storage.save(state.store.expenses()) {
        warn!("failed to persist expenses: {:#}", e);
        state.set_status(format!("Failed to save: {:#}", e));
    }
}
