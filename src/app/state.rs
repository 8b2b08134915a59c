//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::todo::TodoList;
use crate::ui::list_view::TodoListState;

/// Top-level application state.
pub struct AppState {
    /// The to-do records, in display order.
    pub todos: TodoList,
    /// Widget-level state (selection, scroll).
    pub list_state: TodoListState,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// User-configurable keybindings and mouse settings.
    pub config: AppConfig,
    /// Last left-clicked row's rendering key and click time, for double-click.
    pub last_left_click: Option<(String, Instant)>,
    /// Most recent terminal area, kept for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(todos: TodoList, config: AppConfig) -> Self {
        Self {
            todos,
            list_state: TodoListState::default(),
            should_quit: false,
            status_message: None,
            config,
            last_left_click: None,
            terminal_area: Rect::default(),
        }
    }
}
