//! A list-based TUI to-do tracker.
//!
//! Pass to-do items as command-line arguments to seed the list, then toggle
//! them done with mouse or keys.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::core::todo::TodoList;
use crate::ui::{layout::AppLayout, list_view::TodoListView, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "List-based to-do tracker")]
struct Cli {
    /// To-do items to seed the list with (one per argument).
    items: Vec<String>,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── build initial state ───────────────────────────────────
    let todos = TodoList::from_texts(cli.items);
    let user_config = config::AppConfig::load();
    let mut state = AppState::new(todos, user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── event loop ────────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(100));

    loop {
        // Draw first — the list is rebuilt from state on every frame.
        terminal.draw(|frame| {
            state.terminal_area = frame.area();
            let layout = AppLayout::from_area(frame.area());

            let list_block = Block::default()
                .title(format!(
                    " to-dos — {}/{} done ",
                    state.todos.done_count(),
                    state.todos.len()
                ))
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());

            // The paint pass never toggles; interactions route through the
            // event handlers.
            let on_toggle = |_: &str| {};
            let list_view = TodoListView::new(state.todos.items(), &on_toggle).block(list_block);
            frame.render_stateful_widget(list_view, layout.list_area, &mut state.list_state);

            let hint = if state.todos.is_empty() {
                "no to-dos — pass items on the command line".to_string()
            } else {
                state.config.status_bar_hint()
            };
            let status_text = state.status_message.as_deref().unwrap_or(&hint);
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        match events.recv().await {
            Some(AppEvent::Key(k)) => handler::handle_key(&mut state, k),
            Some(AppEvent::Mouse(m)) => handler::handle_mouse(&mut state, m),
            Some(AppEvent::Resize(..)) | Some(AppEvent::Tick) => {}
            None => break, // event reader gone
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
