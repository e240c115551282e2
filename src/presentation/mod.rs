//! Presentation layer handling terminal UI and user input.
//!
//! Renders the record-store screen and the picker dialog with ratatui and
//! maps key presses onto application actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
