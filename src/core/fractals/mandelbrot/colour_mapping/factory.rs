use crate::core::actions::generate_pixel_buffer::ports::colour_map::BoxedColourMap;
use crate::core::data::escape_time::EscapeTime;
use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    maps::{blue_white_gradient::MandelbrotBlueWhiteGradient, hue_cycle::MandelbrotHueCycle},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> BoxedColourMap<EscapeTime> {
    match kind {
        MandelbrotColourMapKinds::HueCycle => Box::new(MandelbrotHueCycle::new()),
        MandelbrotColourMapKinds::BlueWhiteGradient => {
            Box::new(MandelbrotBlueWhiteGradient::new(max_iterations))
        }
    }
}
