//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into pixels on
//! the terminal.  No state mutation happens here.

pub mod item_view;
pub mod layout;
pub mod list_view;
pub mod theme;
