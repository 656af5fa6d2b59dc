#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Converts hue/saturation/brightness (each nominally in `[0, 1]`) to RGB.
    ///
    /// Only the fractional part of `hue` is used, so hues wrap around the colour
    /// wheel. Channels are rounded to the nearest byte.
    #[must_use]
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        let to_byte = |channel: f64| (channel * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

        if saturation == 0.0 {
            let grey = to_byte(brightness);
            return Self {
                r: grey,
                g: grey,
                b: grey,
            };
        }

        let sector = (hue - hue.floor()) * 6.0;
        let fraction = sector - sector.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * fraction);
        let t = brightness * (1.0 - saturation * (1.0 - fraction));

        let (r, g, b) = match sector as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Self {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }
}
