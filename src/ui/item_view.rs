//! Single to-do row — the child view the list renderer instantiates per
//! record.
//!
//! The view borrows its record and the caller-supplied toggle handler for
//! one render pass.  It never mutates the record; a toggle request goes
//! through [`TodoItemView::toggle`], which hands the record's id to the
//! handler and nothing more.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::todo::Todo;

use super::theme::Theme;

/// Caller-supplied toggle handler.  Invoked with a record id to request a
/// done-state change; fire-and-forget from the view's perspective.
pub type ToggleHandler<'h> = dyn Fn(&str) + 'h;

/// One rendered to-do row — created fresh each frame by the list view.
pub struct TodoItemView<'a> {
    pub(super) todo: &'a Todo,
    pub(super) on_toggle: &'a ToggleHandler<'a>,
}

impl<'a> TodoItemView<'a> {
    pub fn new(todo: &'a Todo, on_toggle: &'a ToggleHandler<'a>) -> Self {
        Self { todo, on_toggle }
    }

    /// Stable rendering key — the record's id.
    pub fn key(&self) -> &'a str {
        &self.todo.id
    }

    /// Request a toggle by invoking the forwarded handler with this record's
    /// id.  The view itself changes nothing.
    pub fn toggle(&self) {
        (self.on_toggle)(&self.todo.id);
    }

    /// Build the row's text line.  Done rows render dimmed and struck
    /// through; the selected row gets the selection style regardless.
    pub fn line(&self, selected: bool) -> Line<'a> {
        let mark = if self.todo.done { "[x] " } else { "[ ] " };
        let (mark_style, text_style) = if selected {
            (Theme::selected_style(), Theme::selected_style())
        } else if self.todo.done {
            (Theme::done_mark_style(), Theme::done_style())
        } else {
            (Theme::mark_style(), Theme::pending_style())
        };

        Line::from(vec![
            Span::styled(mark, mark_style),
            Span::styled(self.todo.text.as_str(), text_style),
        ])
    }
}

impl Widget for TodoItemView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &self.line(false), area.width);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn key_is_the_record_id() {
        let todo = Todo::new("42", "write tests");
        let on_toggle = |_: &str| {};
        let view = TodoItemView::new(&todo, &on_toggle);
        assert_eq!(view.key(), "42");
    }

    #[test]
    fn binds_the_exact_record_and_handler() {
        let todo = Todo::new("1", "a");
        let on_toggle = |_: &str| {};
        let handler: &ToggleHandler<'_> = &on_toggle;

        let view = TodoItemView::new(&todo, handler);
        assert!(std::ptr::eq(view.todo, &todo));
        assert!(std::ptr::eq(view.on_toggle, handler));
    }

    #[test]
    fn toggle_invokes_handler_with_id() {
        let todo = Todo::new("7", "water plants");
        let seen: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let on_toggle = |id: &str| seen.borrow_mut().push(id.to_string());

        let view = TodoItemView::new(&todo, &on_toggle);
        view.toggle();
        view.toggle();

        assert_eq!(*seen.borrow(), ["7", "7"]);
    }

    #[test]
    fn line_shows_done_marker() {
        let mut todo = Todo::new("1", "a");
        let on_toggle = |_: &str| {};

        let open = TodoItemView::new(&todo, &on_toggle).line(false);
        assert_eq!(open.spans[0].content, "[ ] ");
        assert_eq!(open.spans[1].content, "a");

        todo.done = true;
        let done = TodoItemView::new(&todo, &on_toggle).line(false);
        assert_eq!(done.spans[0].content, "[x] ");
    }

    #[test]
    fn selected_row_uses_selection_style() {
        let todo = Todo::new("1", "a");
        let on_toggle = |_: &str| {};
        let line = TodoItemView::new(&todo, &on_toggle).line(true);
        assert_eq!(line.spans[0].style, Theme::selected_style());
        assert_eq!(line.spans[1].style, Theme::selected_style());
    }
}
