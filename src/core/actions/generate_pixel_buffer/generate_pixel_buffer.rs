use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours one value per pixel, in row-major order, into an RGB buffer.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    resolution: Resolution,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy,
    CMap: ColourMap<T> + ?Sized,
{
    let mut data = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for &value in input {
        let colour = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        data.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(PixelBuffer::from_data(resolution, data)?)
}
