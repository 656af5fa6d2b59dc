//! Input adapters for the fractal explorer.
//!
//! Adapters receive input from a source and translate it into explorer commands.

#[cfg(feature = "gui")]
pub mod gui;
