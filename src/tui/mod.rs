//! Terminal demo front-end (crossterm + ratatui).
//!
//! Kept behind the `tui` feature so the engines build without terminal
//! crates. The demo owns the data; the engines only report what happened.

pub mod app;
pub mod render;
pub mod terminal_guard;
pub mod view;
