use rayon::prelude::*;

use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::util::pixel_to_complex_coords::raster_to_complex;

/// Generates escape times in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work; each row writes only its own cells, and the rows are
/// stitched back together in row-major order so the output matches
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<F>(
    fractal: &F,
    complex_rect: ComplexRect,
    resolution: Resolution,
) -> Vec<EscapeTime>
where
    F: FractalGenerator + Sync + ?Sized,
{
    let size = resolution.size();

    let rows: Vec<Vec<EscapeTime>> = (0..size)
        .into_par_iter()
        .map(|y| {
            (0..size)
                .map(|x| {
                    let c = raster_to_complex(Point { x, y }, resolution, complex_rect);
                    fractal.num_iterations(c)
                })
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
