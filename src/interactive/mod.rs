//! Interactive TUI interface
//!
//! Terminal front end: crossterm events are mapped to engine keys one at a
//! time and the screen is redrawn from the updated snapshot.

mod app;
pub mod rendering;

pub use app::{App, HIGHLIGHT_DURATION, KeyHighlight, Message, MessageStyle, Statistics, run_tui};
