//! In-memory to-do data model.
//!
//! A [`Todo`] is the fundamental unit — a stable string id, the task text,
//! and its done flag.  The [`TodoList`] wrapper keeps records in insertion
//! order and addresses them by id for toggling.

use thiserror::Error;

// ───────────────────────────────────────── record ────────────

/// One task.  The id is assigned by the caller and assumed unique within a
/// list; uniqueness is a convention, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
        }
    }
}

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("no to-do with id `{0}`")]
    UnknownId(String),
}

// ───────────────────────────────────────── list ──────────────

/// Ordered collection of to-dos.  Display order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from task texts, assigning sequential ids ("1", "2", …).
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for (i, text) in texts.into_iter().enumerate() {
            list.push(Todo::new((i + 1).to_string(), text));
        }
        list
    }

    /// Append a record.  The caller owns id assignment.
    pub fn push(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items marked done.
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|t| t.done).count()
    }

    /// Flip the done flag of the first item with the given id and return the
    /// new flag.  Duplicate ids address the first match.
    pub fn toggle(&mut self, id: &str) -> Result<bool, TodoError> {
        let item = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::UnknownId(id.to_string()))?;
        item.done = !item.done;
        Ok(item.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_texts_assigns_sequential_ids() {
        let list = TodoList::from_texts(["a", "b", "c"]);
        let ids: Vec<&str> = list.items().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(list.items().iter().all(|t| !t.done));
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut list = TodoList::from_texts(["a"]);
        assert!(list.toggle("1").unwrap());
        assert!(list.items()[0].done);
        assert!(!list.toggle("1").unwrap());
        assert!(!list.items()[0].done);
    }

    #[test]
    fn toggle_unknown_id_is_an_error() {
        let mut list = TodoList::from_texts(["a"]);
        let err = list.toggle("nope").unwrap_err();
        assert!(matches!(err, TodoError::UnknownId(id) if id == "nope"));
    }

    #[test]
    fn toggle_duplicate_id_addresses_first_match() {
        let mut list = TodoList::new();
        list.push(Todo::new("x", "first"));
        list.push(Todo::new("x", "second"));
        list.toggle("x").unwrap();
        assert!(list.items()[0].done);
        assert!(!list.items()[1].done);
    }

    #[test]
    fn done_count_counts_done_items() {
        let mut list = TodoList::from_texts(["a", "b", "c"]);
        assert_eq!(list.done_count(), 0);
        list.toggle("2").unwrap();
        assert_eq!(list.done_count(), 1);
    }
}
