use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideResolution { point: Point, resolution: Resolution },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideResolution { point, resolution } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} display",
                    point.x,
                    point.y,
                    resolution.size(),
                    resolution.size()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Linearly maps pixel index `pixel` of a `resolution`-wide axis onto `[lo, hi]`.
///
/// Pixel 0 lands on `lo`; pixel `resolution` would land on `hi`, so the last real
/// pixel stops one step short of it.
#[must_use]
pub fn get_coord(lo: f64, hi: f64, resolution: u32, pixel: u32) -> f64 {
    assert!(resolution > 0, "display resolution must be greater than zero");

    lo + (f64::from(pixel) / f64::from(resolution)) * (hi - lo)
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    resolution: Resolution,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !resolution.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideResolution {
            point: pixel_position,
            resolution,
        });
    }

    Ok(raster_to_complex(pixel_position, resolution, complex_rect))
}

/// Unchecked variant of [`pixel_to_complex_coords`] for raster loops that only ever
/// visit pixels inside the display.
#[inline]
#[must_use]
pub(crate) fn raster_to_complex(
    pixel_position: Point,
    resolution: Resolution,
    complex_rect: ComplexRect,
) -> Complex {
    let origin = complex_rect.origin();
    let far_corner = complex_rect.far_corner();

    Complex {
        real: get_coord(
            origin.real,
            far_corner.real,
            resolution.size(),
            pixel_position.x,
        ),
        imag: get_coord(
            origin.imag,
            far_corner.imag,
            resolution.size(),
            pixel_position.y,
        ),
    }
}
