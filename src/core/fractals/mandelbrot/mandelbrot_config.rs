use crate::core::fractals::mandelbrot::{
    algorithm::{DEFAULT_MAX_ITERATIONS, Mandelbrot},
    errors::MandelbrotError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    pub fn build_fractal(&self) -> Result<Mandelbrot, MandelbrotError> {
        Mandelbrot::new(self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_generator::FractalGenerator;

    #[test]
    fn default_config_builds_default_fractal() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.build_fractal(), Ok(Mandelbrot::default()));
    }

    #[test]
    fn custom_iterations_flow_into_fractal() {
        let config = MandelbrotConfig { max_iterations: 64 };

        assert_eq!(config.build_fractal().unwrap().max_iterations(), 64);
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let config = MandelbrotConfig { max_iterations: 0 };

        assert_eq!(config.build_fractal(), Err(MandelbrotError::ZeroMaxIterations));
    }
}
