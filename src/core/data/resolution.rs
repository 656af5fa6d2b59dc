use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    ZeroSize,
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "display resolution must be greater than zero"),
        }
    }
}

impl Error for ResolutionError {}

/// Side length of the square display raster, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    size: u32,
}

impl Resolution {
    pub fn new(size: u32) -> Result<Self, ResolutionError> {
        if size == 0 {
            return Err(ResolutionError::ZeroSize);
        }

        Ok(Self { size })
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size
    }
}
