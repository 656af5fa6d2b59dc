use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub const DEFAULT_DISPLAY_SIZE: u32 = 800;
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Side length of the square display, in pixels.
    pub display_size: u32,
    /// Scale applied to the view on every click; below 1 zooms in.
    pub zoom_factor: f64,
    pub colour_map_kind: MandelbrotColourMapKinds,
    /// Fractal the front ends build; the controller itself accepts any generator.
    pub mandelbrot: MandelbrotConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            display_size: DEFAULT_DISPLAY_SIZE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            mandelbrot: MandelbrotConfig::default(),
        }
    }
}
