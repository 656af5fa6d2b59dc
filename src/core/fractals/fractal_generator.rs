use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::escape_time::EscapeTime;
use crate::core::fractals::iteration_state::{IterationState, UpdateRule};
use crate::core::util::pixel_to_complex_coords;

pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// An escape-time fractal: a default view plus an update rule iterated from `z = 0`.
///
/// Implementors only describe the fractal; the iteration loop, coordinate mapping and
/// zoom transform are shared. The trait is object safe so a viewer can hold any
/// family behind `Box<dyn FractalGenerator>`.
pub trait FractalGenerator {
    fn display_name(&self) -> &str;

    /// The view that shows the whole fractal; used at start-up and on reset.
    fn initial_range(&self) -> ComplexRect;

    fn update_rule(&self) -> UpdateRule;

    fn max_iterations(&self) -> u32;

    fn escape_radius_squared(&self) -> f64 {
        DEFAULT_ESCAPE_RADIUS_SQUARED
    }

    /// Counts the steps until `|z|²` exceeds the escape radius, or reports
    /// [`EscapeTime::Bounded`] when the iteration cap is reached first.
    fn num_iterations(&self, c: Complex) -> EscapeTime {
        let rule = self.update_rule();
        let threshold = self.escape_radius_squared();
        let mut state = IterationState::new(c);

        while state.iterations() < self.max_iterations() {
            state.step(rule);

            if state.magnitude_squared() > threshold {
                return EscapeTime::Escaped(state.iterations());
            }
        }

        EscapeTime::Bounded
    }

    fn get_coord(&self, lo: f64, hi: f64, resolution: u32, pixel: u32) -> f64 {
        pixel_to_complex_coords::get_coord(lo, hi, resolution, pixel)
    }

    fn recenter_and_zoom(
        &self,
        range: ComplexRect,
        center: Complex,
        scale_factor: f64,
    ) -> Result<ComplexRect, ComplexRectError> {
        range.recenter_and_zoom(center, scale_factor)
    }
}

impl<F: FractalGenerator + ?Sized> FractalGenerator for Box<F> {
    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn initial_range(&self) -> ComplexRect {
        (**self).initial_range()
    }

    fn update_rule(&self) -> UpdateRule {
        (**self).update_rule()
    }

    fn max_iterations(&self) -> u32 {
        (**self).max_iterations()
    }

    fn escape_radius_squared(&self) -> f64 {
        (**self).escape_radius_squared()
    }

    fn num_iterations(&self, c: Complex) -> EscapeTime {
        (**self).num_iterations(c)
    }

    fn get_coord(&self, lo: f64, hi: f64, resolution: u32, pixel: u32) -> f64 {
        (**self).get_coord(lo, hi, resolution, pixel)
    }

    fn recenter_and_zoom(
        &self,
        range: ComplexRect,
        center: Complex,
        scale_factor: f64,
    ) -> Result<ComplexRect, ComplexRectError> {
        (**self).recenter_and_zoom(range, center, scale_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// z -> z + c: escapes linearly, so the step count is easy to predict.
    struct Drift {
        max_iterations: u32,
    }

    fn drift(z: Complex, c: Complex) -> Complex {
        z + c
    }

    impl FractalGenerator for Drift {
        fn display_name(&self) -> &str {
            "Drift"
        }

        fn initial_range(&self) -> ComplexRect {
            ComplexRect::new(Complex::new(-1.0, -1.0), 2.0, 2.0).unwrap()
        }

        fn update_rule(&self) -> UpdateRule {
            drift
        }

        fn max_iterations(&self) -> u32 {
            self.max_iterations
        }
    }

    #[test]
    fn test_counts_steps_until_escape() {
        let fractal = Drift { max_iterations: 100 };

        // |n * 0.5|² > 4 first holds at n = 5
        assert_eq!(
            fractal.num_iterations(Complex::new(0.5, 0.0)),
            EscapeTime::Escaped(5)
        );
    }

    #[test]
    fn test_reports_bounded_when_cap_is_hit() {
        let fractal = Drift { max_iterations: 4 };

        assert_eq!(
            fractal.num_iterations(Complex::new(0.5, 0.0)),
            EscapeTime::Bounded
        );
    }

    #[test]
    fn test_escape_on_the_final_allowed_step_still_counts() {
        let fractal = Drift { max_iterations: 5 };

        assert_eq!(
            fractal.num_iterations(Complex::new(0.5, 0.0)),
            EscapeTime::Escaped(5)
        );
    }

    #[test]
    fn test_trait_object_dispatch() {
        let fractal: Box<dyn FractalGenerator> = Box::new(Drift { max_iterations: 10 });

        assert_eq!(fractal.display_name(), "Drift");
        assert_eq!(
            fractal.num_iterations(Complex::new(3.0, 0.0)),
            EscapeTime::Escaped(1)
        );
        assert_eq!(fractal.get_coord(-1.0, 1.0, 4, 2), 0.0);

        let zoomed = fractal
            .recenter_and_zoom(fractal.initial_range(), Complex::ZERO, 0.5)
            .unwrap();
        assert_eq!(zoomed.width(), 1.0);
        assert_eq!(zoomed.origin(), Complex::new(-0.5, -0.5));
    }

    /// Zooms around the origin no matter where the click lands.
    struct Pinned;

    impl FractalGenerator for Pinned {
        fn display_name(&self) -> &str {
            "Pinned"
        }

        fn initial_range(&self) -> ComplexRect {
            ComplexRect::new(Complex::new(-1.0, -1.0), 2.0, 2.0).unwrap()
        }

        fn update_rule(&self) -> UpdateRule {
            drift
        }

        fn max_iterations(&self) -> u32 {
            1
        }

        fn get_coord(&self, lo: f64, _hi: f64, _resolution: u32, _pixel: u32) -> f64 {
            lo
        }

        fn recenter_and_zoom(
            &self,
            range: ComplexRect,
            _center: Complex,
            scale_factor: f64,
        ) -> Result<ComplexRect, ComplexRectError> {
            range.recenter_and_zoom(Complex::ZERO, scale_factor)
        }
    }

    #[test]
    fn test_boxed_generator_uses_inner_overrides() {
        let fractal: Box<dyn FractalGenerator> = Box::new(Pinned);

        assert_eq!(fractal.get_coord(-1.0, 1.0, 4, 3), -1.0);

        let zoomed = fractal
            .recenter_and_zoom(fractal.initial_range(), Complex::new(5.0, 5.0), 0.5)
            .unwrap();
        assert_eq!(zoomed.center(), Complex::ZERO);
    }
}
