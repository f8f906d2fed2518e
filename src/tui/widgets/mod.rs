//! Reusable widgets for the TUI

pub mod input;

pub use input::{render_input_with_cursor, TextInput};
