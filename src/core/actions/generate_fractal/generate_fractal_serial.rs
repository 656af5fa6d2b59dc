use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::util::pixel_to_complex_coords::raster_to_complex;

/// Evaluates every pixel of the display in row-major order on the calling thread.
pub fn generate_fractal_serial<F>(
    fractal: &F,
    complex_rect: ComplexRect,
    resolution: Resolution,
) -> Vec<EscapeTime>
where
    F: FractalGenerator + ?Sized,
{
    let size = resolution.size();

    (0..size)
        .flat_map(|y| (0..size).map(move |x| Point { x, y }))
        .map(|pixel| fractal.num_iterations(raster_to_complex(pixel, resolution, complex_rect)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;

    #[test]
    fn test_produces_one_result_per_pixel() {
        let fractal = Mandelbrot::new(50).unwrap();
        let resolution = Resolution::new(16).unwrap();

        let results = generate_fractal_serial(&fractal, fractal.initial_range(), resolution);

        assert_eq!(results.len(), 256);
    }

    #[test]
    fn test_results_are_row_major() {
        let fractal = Mandelbrot::new(50).unwrap();
        let resolution = Resolution::new(4).unwrap();
        // x spans [-2.5, 1.5) on every row; rows step through the imaginary axis
        let rect = ComplexRect::new(Complex::new(-2.5, -2.0), 4.0, 4.0).unwrap();

        let results = generate_fractal_serial(&fractal, rect, resolution);

        for y in 0..4u32 {
            for x in 0..4u32 {
                let c = Complex::new(-2.5 + x as f64, -2.0 + y as f64);
                assert_eq!(
                    results[(y * 4 + x) as usize],
                    fractal.num_iterations(c),
                    "mismatch at pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_single_pixel_display_samples_origin() {
        let fractal = Mandelbrot::new(50).unwrap();
        let rect = ComplexRect::new(Complex::ZERO, 1.0, 1.0).unwrap();

        let results = generate_fractal_serial(&fractal, rect, Resolution::new(1).unwrap());

        assert_eq!(results, vec![EscapeTime::Bounded]);
    }
}
