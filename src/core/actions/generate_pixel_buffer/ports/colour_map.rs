use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}

/// A colour map that can be swapped at runtime and shared with worker threads.
pub type BoxedColourMap<T> = Box<dyn ColourMap<T> + Send + Sync>;

impl<T> ColourMap<T> for BoxedColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
