use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// A user action on the explorer, fed to [`ExplorerController::handle`](super::ExplorerController::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerCommand {
    /// Return to the fractal's initial view.
    Reset,
    /// Recentre on the clicked pixel and zoom by the configured factor.
    ClickAt(Point),
    SelectColourMap(MandelbrotColourMapKinds),
}
