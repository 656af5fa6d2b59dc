use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::EscapeTime;
use std::error::Error;

const BASE_HUE: f64 = 0.7;
const ITERATIONS_PER_HUE_TURN: f64 = 200.0;

/// Fully saturated colours whose hue advances with the escape count; bounded points
/// are black.
#[derive(Debug, Default)]
pub struct MandelbrotHueCycle {}

impl ColourMap<EscapeTime> for MandelbrotHueCycle {
    fn map(&self, value: EscapeTime) -> Result<Colour, Box<dyn Error>> {
        match value {
            EscapeTime::Bounded => Ok(Colour::BLACK),
            EscapeTime::Escaped(iterations) => {
                let hue = BASE_HUE + f64::from(iterations) / ITERATIONS_PER_HUE_TURN;
                Ok(Colour::from_hsb(hue, 1.0, 1.0))
            }
        }
    }

    fn display_name(&self) -> &str {
        "Hue cycle"
    }
}

impl MandelbrotHueCycle {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
