use crate::controllers::explorer::command::ExplorerCommand;
use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::errors::ExplorerError;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::BoxedColourMap;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::fractals::mandelbrot::colour_mapping::{
    factory::mandelbrot_colour_map_factory, kinds::MandelbrotColourMapKinds,
};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::time::Instant;

pub struct ExplorerController<F: FractalGenerator + Sync> {
    fractal: F,
    resolution: Resolution,
    zoom_factor: f64,
    range: ComplexRect,
    colour_map_kind: MandelbrotColourMapKinds,
    colour_map: BoxedColourMap<EscapeTime>,
}

impl<F: FractalGenerator + Sync> ExplorerController<F> {
    pub fn new(fractal: F, config: &ExplorerConfig) -> Result<Self, ExplorerError> {
        let resolution = Resolution::new(config.display_size)?;

        if !(config.zoom_factor.is_finite() && config.zoom_factor > 0.0) {
            return Err(ExplorerError::InvalidZoomFactor(config.zoom_factor));
        }

        let colour_map =
            mandelbrot_colour_map_factory(config.colour_map_kind, fractal.max_iterations());
        let range = fractal.initial_range();

        Ok(Self {
            fractal,
            resolution,
            zoom_factor: config.zoom_factor,
            range,
            colour_map_kind: config.colour_map_kind,
            colour_map,
        })
    }

    #[must_use]
    pub fn fractal(&self) -> &F {
        &self.fractal
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn range(&self) -> ComplexRect {
        self.range
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.colour_map_kind
    }

    /// Applies a command to the current view without rendering.
    ///
    /// A rejected click, including one that would shrink or grow the view past what
    /// `f64` can represent, leaves the view untouched.
    pub fn handle(&mut self, command: ExplorerCommand) -> Result<(), ExplorerError> {
        log::debug!("Handling {:?}", command);

        match command {
            ExplorerCommand::Reset => {
                self.range = self.fractal.initial_range();
            }
            ExplorerCommand::ClickAt(point) => {
                let center = pixel_to_complex_coords(point, self.resolution, self.range)?;
                self.range = self
                    .fractal
                    .recenter_and_zoom(self.range, center, self.zoom_factor)?;
            }
            ExplorerCommand::SelectColourMap(kind) => {
                self.colour_map = mandelbrot_colour_map_factory(kind, self.fractal.max_iterations());
                self.colour_map_kind = kind;
            }
        }

        Ok(())
    }

    /// Runs a full raster pass over the current view and returns the escape times in
    /// row-major order.
    #[must_use]
    pub fn escape_times(&self) -> Vec<EscapeTime> {
        generate_fractal_parallel_rayon(&self.fractal, self.range, self.resolution)
    }

    /// Renders the current view to an RGB buffer. The pass always runs to completion.
    pub fn render(&self) -> Result<PixelBuffer, ExplorerError> {
        let start = Instant::now();
        let escape_times = self.escape_times();
        let buffer = generate_pixel_buffer(&escape_times, &self.colour_map, self.resolution)?;

        log::info!(
            "Rendered {} {}x{} (max iterations {}, view width {:e}) in {:?}",
            self.fractal.display_name(),
            self.resolution.size(),
            self.resolution.size(),
            self.fractal.max_iterations(),
            self.range.width(),
            start.elapsed()
        );

        Ok(buffer)
    }

    pub fn dispatch(&mut self, command: ExplorerCommand) -> Result<PixelBuffer, ExplorerError> {
        self.handle(command)?;
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::resolution::ResolutionError;
    use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

    const EPSILON: f64 = 1e-12;

    fn config(display_size: u32, max_iterations: u32) -> ExplorerConfig {
        ExplorerConfig {
            display_size,
            mandelbrot: MandelbrotConfig { max_iterations },
            ..ExplorerConfig::default()
        }
    }

    fn controller(display_size: u32, max_iterations: u32) -> ExplorerController<Mandelbrot> {
        let config = config(display_size, max_iterations);
        let fractal = config.mandelbrot.build_fractal().unwrap();

        ExplorerController::new(fractal, &config).unwrap()
    }

    #[test]
    fn new_controller_starts_at_initial_range() {
        let controller = controller(800, 100);

        assert_eq!(controller.range(), Mandelbrot::default().initial_range());
        assert_eq!(controller.resolution().size(), 800);
        assert_eq!(
            controller.colour_map_kind(),
            MandelbrotColourMapKinds::HueCycle
        );
    }

    #[test]
    fn new_rejects_zero_display_size() {
        let result = ExplorerController::new(Mandelbrot::default(), &config(0, 100));

        assert!(matches!(
            result,
            Err(ExplorerError::Resolution(ResolutionError::ZeroSize))
        ));
    }

    #[test]
    fn new_rejects_non_positive_zoom_factor() {
        let config = ExplorerConfig {
            zoom_factor: 0.0,
            ..ExplorerConfig::default()
        };

        let result = ExplorerController::new(Mandelbrot::default(), &config);

        assert!(matches!(result, Err(ExplorerError::InvalidZoomFactor(_))));
    }

    #[test]
    fn click_at_center_zooms_in_place() {
        let mut controller = controller(800, 100);

        controller
            .handle(ExplorerCommand::ClickAt(Point { x: 400, y: 400 }))
            .unwrap();

        let range = controller.range();
        assert!((range.width() - 2.0).abs() < EPSILON);
        assert!((range.height() - 2.0).abs() < EPSILON);
        assert!((range.center().real - -0.5).abs() < EPSILON);
        assert!(range.center().imag.abs() < EPSILON);
    }

    #[test]
    fn click_recentres_on_clicked_plane_point() {
        let mut controller = controller(800, 100);

        controller
            .handle(ExplorerCommand::ClickAt(Point { x: 0, y: 0 }))
            .unwrap();

        let range = controller.range();
        assert!((range.center().real - -2.5).abs() < EPSILON);
        assert!((range.center().imag - -2.0).abs() < EPSILON);
        assert!((range.origin().real - -3.5).abs() < EPSILON);
        assert!((range.origin().imag - -3.0).abs() < EPSILON);
    }

    #[test]
    fn repeated_clicks_compose_zoom() {
        let mut controller = controller(100, 100);

        for _ in 0..3 {
            controller
                .handle(ExplorerCommand::ClickAt(Point { x: 50, y: 50 }))
                .unwrap();
        }

        assert!((controller.range().width() - 4.0 * 0.125).abs() < EPSILON);
    }

    #[test]
    fn click_outside_display_is_rejected_and_view_kept() {
        let mut controller = controller(100, 100);
        let before = controller.range();

        let result = controller.handle(ExplorerCommand::ClickAt(Point { x: 100, y: 0 }));

        assert!(matches!(result, Err(ExplorerError::Click(_))));
        assert_eq!(controller.range(), before);
    }

    #[test]
    fn zooming_past_f64_precision_is_rejected_and_view_kept() {
        let mut controller = controller(2, 10);
        let click = ExplorerCommand::ClickAt(Point { x: 1, y: 1 });
        let mut clicks = 0;

        let err = loop {
            match controller.handle(click) {
                Ok(()) => {
                    clicks += 1;
                    assert!(clicks < 1200, "zoom never hit the lower limit");
                }
                Err(err) => break err,
            }
        };
        let before = controller.range();

        assert!(matches!(err, ExplorerError::Zoom(_)));
        assert!(before.width() > 0.0 && before.height() > 0.0);
        assert!(matches!(controller.handle(click), Err(ExplorerError::Zoom(_))));
        assert_eq!(controller.range(), before);

        controller.handle(ExplorerCommand::Reset).unwrap();
        assert_eq!(controller.range(), Mandelbrot::default().initial_range());
    }

    #[test]
    fn zooming_out_past_f64_range_is_rejected() {
        let config = ExplorerConfig {
            zoom_factor: 2.0,
            ..config(2, 10)
        };
        let mut controller = ExplorerController::new(Mandelbrot::new(10).unwrap(), &config).unwrap();
        let click = ExplorerCommand::ClickAt(Point { x: 1, y: 1 });

        let mut result = Ok(());
        for _ in 0..1200 {
            result = controller.handle(click);
            if result.is_err() {
                break;
            }
        }

        assert!(matches!(result, Err(ExplorerError::Zoom(_))));
        assert!(controller.range().width().is_finite());
    }

    #[test]
    fn reset_restores_initial_range() {
        let mut controller = controller(100, 100);

        controller
            .handle(ExplorerCommand::ClickAt(Point { x: 10, y: 90 }))
            .unwrap();
        controller
            .handle(ExplorerCommand::ClickAt(Point { x: 70, y: 20 }))
            .unwrap();
        controller.handle(ExplorerCommand::Reset).unwrap();

        assert_eq!(controller.range(), Mandelbrot::default().initial_range());
    }

    #[test]
    fn select_colour_map_swaps_the_map() {
        let mut controller = controller(10, 100);

        controller
            .handle(ExplorerCommand::SelectColourMap(
                MandelbrotColourMapKinds::BlueWhiteGradient,
            ))
            .unwrap();

        assert_eq!(
            controller.colour_map_kind(),
            MandelbrotColourMapKinds::BlueWhiteGradient
        );
    }

    #[test]
    fn full_raster_classifies_center_bounded_and_corner_escaping() {
        let controller = controller(800, 256);

        let escape_times = controller.escape_times();

        assert_eq!(escape_times.len(), 800 * 800);
        // pixel (400, 400) maps to (-0.5, 0), inside the main cardioid
        assert_eq!(escape_times[400 * 800 + 400], EscapeTime::Bounded);
        assert_eq!(escape_times[400 * 800 + 400].to_sentinel(), -1);
        // pixel (0, 0) maps to (-2.5, -2.0), far outside
        let corner = escape_times[0].iterations().unwrap();
        assert!(corner <= 2, "corner took {} iterations", corner);
    }

    #[test]
    fn render_paints_set_black_and_outside_in_colour() {
        let controller = controller(200, 100);

        let buffer = controller.render().unwrap();

        assert_eq!(buffer.resolution().size(), 200);
        assert_eq!(buffer.buffer_size(), 200 * 200 * 3);
        assert_eq!(
            buffer.pixel(Point { x: 100, y: 100 }).unwrap(),
            Colour::BLACK
        );
        assert_ne!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn dispatch_renders_the_updated_view() {
        let mut controller = controller(64, 100);
        let before = controller.render().unwrap();

        let after = controller
            .dispatch(ExplorerCommand::ClickAt(Point { x: 5, y: 5 }))
            .unwrap();

        assert_ne!(before, after);
        assert_eq!(
            controller.dispatch(ExplorerCommand::Reset).unwrap(),
            before
        );
    }

    #[test]
    fn controller_accepts_boxed_fractals() {
        let fractal: Box<dyn FractalGenerator + Sync> = Box::new(Mandelbrot::new(50).unwrap());

        let controller = ExplorerController::new(fractal, &config(16, 50)).unwrap();

        assert_eq!(controller.escape_times().len(), 256);
        assert_eq!(
            controller.range().center(),
            Complex::new(-0.5, 0.0)
        );
    }
}
