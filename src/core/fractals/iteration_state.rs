use crate::core::data::complex::Complex;

/// Computes the next orbit value from the current one and the pixel parameter `c`.
pub type UpdateRule = fn(z: Complex, c: Complex) -> Complex;

/// The orbit of a single point: its fixed parameter `c` and the evolving value `z`.
///
/// One state belongs to exactly one escape-time run and starts from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationState {
    c: Complex,
    z: Complex,
    iterations: u32,
}

impl IterationState {
    #[must_use]
    pub fn new(c: Complex) -> Self {
        Self {
            c,
            z: Complex::ZERO,
            iterations: 0,
        }
    }

    #[inline]
    pub fn step(&mut self, rule: UpdateRule) {
        self.z = rule(self.z, self.c);
        self.iterations += 1;
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn z(&self) -> Complex {
        self.z
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[inline]
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.z.magnitude_squared()
    }
}
