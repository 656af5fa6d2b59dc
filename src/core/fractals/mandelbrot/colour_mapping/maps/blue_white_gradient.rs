use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::EscapeTime;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use std::error::Error;

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<EscapeTime> for MandelbrotBlueWhiteGradient {
    fn map(&self, value: EscapeTime) -> Result<Colour, Box<dyn Error>> {
        let iterations = match value {
            EscapeTime::Bounded => return Ok(Colour::BLACK),
            EscapeTime::Escaped(iterations) => iterations,
        };

        if iterations > self.max_iterations {
            return Err(Box::new(MandelbrotColourMapErrors::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);

        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        "Blue-white gradient"
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_points_are_black() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(EscapeTime::Bounded).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_escape_on_last_step_fades_to_black() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(EscapeTime::Escaped(100)).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_midpoint_gradient() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(
            mapper.map(EscapeTime::Escaped(50)).unwrap(),
            Colour {
                r: 143,
                g: 239,
                b: 135
            }
        );
    }

    #[test]
    fn test_map_quarter_gradient() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(
            mapper.map(EscapeTime::Escaped(25)).unwrap(),
            Colour {
                r: 26,
                g: 134,
                b: 228
            }
        );
    }

    #[test]
    fn test_map_rejects_counts_above_max() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        let err = mapper.map(EscapeTime::Escaped(101)).unwrap_err();

        assert_eq!(err.to_string(), "iterations 101 exceeds maximum 100");
    }
}
