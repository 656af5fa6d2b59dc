use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The region of the complex plane currently on display.
///
/// `origin` is the corner mapped to pixel (0, 0); the rect extends `width` along the
/// real axis and `height` along the imaginary axis from there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    origin: Complex,
    width: f64,
    height: f64,
}

impl ComplexRect {
    pub fn new(origin: Complex, width: f64, height: f64) -> Result<Self, ComplexRectError> {
        let valid = |side: f64| side.is_finite() && side > 0.0;

        if !valid(width) || !valid(height) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// Builds a rect without validation, for compile-time views whose sides are
    /// known to be positive.
    pub(crate) const fn new_unchecked(origin: Complex, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn far_corner(&self) -> Complex {
        Complex::new(self.origin.real + self.width, self.origin.imag + self.height)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            self.origin.real + self.width / 2.0,
            self.origin.imag + self.height / 2.0,
        )
    }

    /// Returns a rect scaled by `scale_factor` and centred on `center`.
    ///
    /// Factors below 1 zoom in, above 1 zoom out. Panics if the factor is not a
    /// positive finite number. Fails once the scaled sides underflow to zero or
    /// overflow to infinity.
    pub fn recenter_and_zoom(
        &self,
        center: Complex,
        scale_factor: f64,
    ) -> Result<Self, ComplexRectError> {
        assert!(
            scale_factor.is_finite() && scale_factor > 0.0,
            "zoom scale factor must be positive and finite, got {}",
            scale_factor
        );

        let width = self.width * scale_factor;
        let height = self.height * scale_factor;

        Self::new(
            Complex::new(center.real - width / 2.0, center.imag - height / 2.0),
            width,
            height,
        )
    }
}
