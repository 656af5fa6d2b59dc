use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::fractals::iteration_state::UpdateRule;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 2000;

// 4x4 square centred on (-0.5, 0), wide enough to hold the whole set
const INITIAL_RANGE: ComplexRect = ComplexRect::new_unchecked(Complex::new(-2.5, -2.0), 4.0, 4.0);

/// `z' = z² + c`, i.e. `(zr² - zi² + x, 2·zr·zi + y)`.
#[inline]
#[must_use]
pub fn mandelbrot_step(z: Complex, c: Complex) -> Complex {
    z * z + c
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mandelbrot {
    max_iterations: u32,
}

impl Mandelbrot {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalGenerator for Mandelbrot {
    fn display_name(&self) -> &str {
        "Mandelbrot"
    }

    fn initial_range(&self) -> ComplexRect {
        INITIAL_RANGE
    }

    fn update_rule(&self) -> UpdateRule {
        mandelbrot_step
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
