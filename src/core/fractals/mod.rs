pub mod fractal_generator;
pub mod iteration_state;
pub mod mandelbrot;
