//! Synchronous explorer for pan/zoom sessions.
//!
//! The controller owns the current view and turns [`ExplorerCommand`]s into view
//! changes, then renders a full frame on request. Input adapters (the GUI, the
//! headless renderer) only ever talk to it through commands and `render`.

mod command;
mod config;
mod controller;
mod errors;

pub use command::ExplorerCommand;
pub use config::{DEFAULT_DISPLAY_SIZE, DEFAULT_ZOOM_FACTOR, ExplorerConfig};
pub use controller::ExplorerController;
pub use errors::ExplorerError;
