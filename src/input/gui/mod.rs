//! Windowed explorer built on winit, pixels and egui.
//!
//! Clicks on the fractal and the controls in the bottom panel become
//! [`ExplorerCommand`](crate::controllers::explorer::ExplorerCommand)s, which are
//! dispatched synchronously; the resulting frame is pushed to the presenter.

pub mod app;
pub mod commands;
