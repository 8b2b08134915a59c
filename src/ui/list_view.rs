//! The to-do list view — maps an ordered slice of records to one
//! [`TodoItemView`] child per record and paints them as a vertical list.
//!
//! The view is a pure mapping over its inputs: it borrows the records and
//! the caller's toggle handler for one pass, forwards both to every child
//! unchanged, and holds no memory between frames.  It never invokes the
//! handler itself — that is the item view's job.  Item views are keyed by
//! record id; ids are assumed unique, and when two rows share one,
//! id-addressed toggles land on the first matching record.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::todo::Todo;

use super::item_view::{TodoItemView, ToggleHandler};

// ───────────────────────────────────────── state ─────────────

/// Persistent host-side state for the list view (selected index, scroll
/// offset).  Owned by the application, not the view — the view itself is
/// rebuilt from scratch every frame.
#[derive(Debug, Default)]
pub struct TodoListState {
    /// Index of the currently highlighted row.
    pub selected: usize,
    /// Vertical scroll offset (first visible row).
    pub offset: usize,
}

impl TodoListState {
    pub fn select_next(&mut self, max: usize) {
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Ensure the selected row is visible within the viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected - height + 1;
        }
    }
}

// ───────────────────────────────────────── view ──────────────

/// The list view itself — created fresh each frame from `(records, handler)`.
pub struct TodoListView<'a> {
    todos: &'a [Todo],
    on_toggle: &'a ToggleHandler<'a>,
    block: Option<Block<'a>>,
}

impl<'a> TodoListView<'a> {
    pub fn new(todos: &'a [Todo], on_toggle: &'a ToggleHandler<'a>) -> Self {
        Self {
            todos,
            on_toggle,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Build one child view per record, in input order.  Every child gets
    /// the record and the same handler reference the caller passed in.
    ///
    /// This is the single construction pass behind both painting and input
    /// hit-testing.
    pub fn children(&self) -> Vec<TodoItemView<'a>> {
        self.todos
            .iter()
            .map(|todo| TodoItemView::new(todo, self.on_toggle))
            .collect()
    }
}

impl StatefulWidget for TodoListView<'_> {
    type State = TodoListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Resolve the inner area (inside the optional block border).
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        let children = self.children();
        state.clamp_scroll(inner.height as usize);

        let visible = children
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (row_idx, child)) in visible.enumerate() {
            let y = inner.y + i as u16;
            let line = child.line(row_idx == state.selected);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
