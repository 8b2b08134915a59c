//! Input handling — maps key/mouse events to state mutations.
//!
//! Toggle requests travel through the view layer: a hit-test builds the list
//! view's children with a recording handler, the clicked child fires the
//! handler with its record's id, and the recorded id is applied to the list
//! afterwards.  The handlers never flip a done flag directly.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::ui::layout::AppLayout;
use crate::ui::list_view::TodoListView;

use super::state::AppState;

// ── keyboard ────────────────────────────────────────────────────

/// Process a key event against the configured bindings.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Navigation keys that should always work.
    match key.code {
        KeyCode::Home => {
            state.list_state.selected = 0;
            state.list_state.offset = 0;
            return;
        }
        KeyCode::End => {
            let len = state.todos.len();
            if len > 0 {
                state.list_state.selected = len - 1;
            }
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MoveUp => {
            state.list_state.select_prev();
        }
        Action::MoveDown => {
            state.list_state.select_next(state.todos.len());
        }
        Action::ToggleDone => {
            toggle_row(state, state.list_state.selected);
        }
    }
}

// ── mouse ───────────────────────────────────────────────────────

/// Process a mouse event.  A click selects a row; a repeat click on the same
/// row within the double-click window toggles it.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let layout = AppLayout::from_area(state.terminal_area);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !point_in_rect(layout.list_area, mouse.column, mouse.row) {
                return;
            }
            // Rows live between the block borders.
            let content_top = layout.list_area.y.saturating_add(1);
            let content_bottom = layout
                .list_area
                .y
                .saturating_add(layout.list_area.height.saturating_sub(1));
            if mouse.row < content_top || mouse.row >= content_bottom {
                return;
            }

            let clicked_row =
                mouse.row.saturating_sub(content_top) as usize + state.list_state.offset;
            let Some(key) = row_key(state, clicked_row) else {
                state.last_left_click = None;
                return;
            };
            state.list_state.selected = clicked_row;

            let now = Instant::now();
            let is_repeat_click = state
                .last_left_click
                .as_ref()
                .map(|(last_key, at)| {
                    *last_key == key
                        && now.duration_since(*at)
                            <= Duration::from_millis(state.config.double_click_ms)
                })
                .unwrap_or(false);

            if is_repeat_click {
                toggle_row(state, clicked_row);
                state.last_left_click = None;
            } else {
                state.last_left_click = Some((key, now));
            }
        }
        MouseEventKind::ScrollUp => {
            state.list_state.select_prev();
        }
        MouseEventKind::ScrollDown => {
            state.list_state.select_next(state.todos.len());
        }
        _ => {}
    }
}

// ── helpers ─────────────────────────────────────────────────────

/// Toggle the given row through the view layer, then apply the result.
fn toggle_row(state: &mut AppState, row: usize) {
    let Some(id) = request_toggle(state, row) else {
        return;
    };
    apply_toggle(state, id);
}

/// Rendering key of the row's item view, if the row exists.
fn row_key(state: &AppState, row: usize) -> Option<String> {
    let on_toggle = |_: &str| {};
    let view = TodoListView::new(state.todos.items(), &on_toggle);
    view.children().get(row).map(|item| item.key().to_string())
}

/// Run the delegation path: build the children with a recording handler and
/// let the row's item view fire it.  Returns the requested record id.
fn request_toggle(state: &AppState, row: usize) -> Option<String> {
    let requested: RefCell<Option<String>> = RefCell::new(None);
    {
        let on_toggle = |id: &str| {
            *requested.borrow_mut() = Some(id.to_string());
        };
        let view = TodoListView::new(state.todos.items(), &on_toggle);
        if let Some(item) = view.children().get(row) {
            item.toggle();
        }
    }
    requested.into_inner()
}

fn apply_toggle(state: &mut AppState, id: String) {
    match state.todos.toggle(&id) {
        Ok(done) => {
            tracing::debug!("toggle id={id} done={done}");
            state.status_message = None;
        }
        Err(err) => {
            state.status_message = Some(err.to_string());
        }
    }
}

fn point_in_rect(area: ratatui::layout::Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
