use crate::vec4::Vec4;

/// Classifies a point of the 4D parameter space as inside or outside the set.
pub trait MembershipOracle {
    fn classify(&self, point: Vec4) -> bool;
}

/// Julia/Mandelbrot hybrid test: the point is read as `(z.re, z.im, c.re, c.im)`
/// and `z := z^2 + c` is iterated a fixed number of times.
///
/// There is no bailout, so every probe costs the same. Escaped orbits overflow
/// to infinity or NaN, both of which compare as "not inside".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JuliaOracle {
    pub iteration_count: u32,
    pub escape_radius_sq: f64,
}

impl JuliaOracle {
    pub const DEFAULT_ITERATION_COUNT: u32 = 100;

    pub fn new(iteration_count: u32) -> Self {
        Self {
            iteration_count,
            escape_radius_sq: 4.0,
        }
    }
}

impl Default for JuliaOracle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATION_COUNT)
    }
}

impl MembershipOracle for JuliaOracle {
    fn classify(&self, point: Vec4) -> bool {
        let [mut zr, mut zi, cr, ci] = point.to_array();
        for _ in 0..self.iteration_count {
            (zr, zi) = (zr * zr - zi * zi + cr, 2.0 * zr * zi + ci);
        }
        zr * zr + zi * zi < self.escape_radius_sq
    }
}
