use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        resolution: Resolution,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected a buffer of {} bytes but got {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} display",
                    pixel.x,
                    pixel.y,
                    resolution.size(),
                    resolution.size()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes covering every pixel of a square display.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = resolution_to_buffer_size(resolution);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Copies the pixels into an RGBA frame of the same resolution, fully opaque.
    pub fn copy_into_rgba(&self, dest: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected_size = self.resolution.pixel_count() * 4;

        if dest.len() != expected_size {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: dest.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dest.chunks_exact_mut(4))
        {
            dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.resolution.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        }

        let size = self.resolution.size() as usize;

        Ok((pixel.y as usize * size + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
