mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::render::CliRenderController;
pub use controllers::explorer::{
    DEFAULT_DISPLAY_SIZE, DEFAULT_ZOOM_FACTOR, ExplorerCommand, ExplorerConfig,
    ExplorerController, ExplorerError,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_pixel_buffer::{
    generate_pixel_buffer::{GeneratePixelBufferError, generate_pixel_buffer},
    ports::colour_map::{BoxedColourMap, ColourMap},
};
pub use crate::core::actions::generate_fractal::{
    generate_fractal_parallel_rayon::generate_fractal_parallel_rayon,
    generate_fractal_serial::generate_fractal_serial,
};
pub use crate::core::data::{
    colour::Colour,
    complex::Complex,
    complex_rect::{ComplexRect, ComplexRectError},
    escape_time::EscapeTime,
    pixel_buffer::{PixelBuffer, PixelBufferError},
    point::Point,
    resolution::{Resolution, ResolutionError},
};
pub use crate::core::fractals::fractal_generator::FractalGenerator;
pub use crate::core::fractals::iteration_state::{IterationState, UpdateRule};
pub use crate::core::fractals::mandelbrot::{
    algorithm::{DEFAULT_MAX_ITERATIONS, Mandelbrot, mandelbrot_step},
    colour_mapping::kinds::MandelbrotColourMapKinds,
    errors::MandelbrotError,
    mandelbrot_config::MandelbrotConfig,
};
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, get_coord, pixel_to_complex_coords,
};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
