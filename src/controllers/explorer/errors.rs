use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::resolution::ResolutionError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExplorerError {
    Resolution(ResolutionError),
    InvalidZoomFactor(f64),
    Click(PixelToComplexCoordsError),
    Zoom(ComplexRectError),
    Render(GeneratePixelBufferError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution(err) => write!(f, "invalid display: {}", err),
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
            Self::Click(err) => write!(f, "invalid click: {}", err),
            Self::Zoom(err) => write!(f, "cannot zoom further: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolution(err) => Some(err),
            Self::InvalidZoomFactor(_) => None,
            Self::Click(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ResolutionError> for ExplorerError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<PixelToComplexCoordsError> for ExplorerError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Click(err)
    }
}

impl From<ComplexRectError> for ExplorerError {
    fn from(err: ComplexRectError) -> Self {
        Self::Zoom(err)
    }
}

impl From<GeneratePixelBufferError> for ExplorerError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Render(err)
    }
}
