use crate::candidate::DEFAULT_PROBE_COUNT;
use crate::oracle::JuliaOracle;
use crate::vec4::Vec4;
use crate::wanderer::DEFAULT_MAX_STEP;

/// Starting points known to sit near interesting parts of the set boundary.
pub const SEED_POINTS: [Vec4; 9] = [
    Vec4::new(0.14, 0.65, -0.22, -0.73),
    Vec4::new(-0.01, 0.18, -0.03, -0.76),
    Vec4::new(-0.53, -0.97, 0.31, 0.03),
    Vec4::new(-0.32, -0.52, -0.75, -0.13),
    Vec4::new(-0.11, -0.07, -1.76, -0.01),
    Vec4::new(0.10, -0.04, -1.76, 0.01),
    Vec4::new(1.15, 0.15, -0.78, -0.24),
    Vec4::new(-1.3, 0.11, -0.75, -0.1),
    Vec4::new(-0.82, -0.35, -0.8, -0.16),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartPoint {
    /// Pick one of [`SEED_POINTS`] with the session RNG.
    Random,
    Seed(usize),
    Explicit(Vec4),
}

#[derive(Clone, Debug)]
pub struct FlyWalkConfig {
    pub max_step: u32,
    pub probe_count: usize,
    pub iteration_count: u32,
    pub escape_radius_sq: f64,
    pub initial_zoom_setting: f64,
    /// `zoom_setting` change that doubles the zoom factor.
    pub zoom_halving_steps: f64,
    pub reset_lead_divisor: f64,
    pub scroll_pixels_per_line: f64,
    pub rng_seed: Option<u64>,
    pub start_point: StartPoint,
    /// Frames between diagnostic log lines; 0 disables them.
    pub report_every: u64,
}

impl FlyWalkConfig {
    pub fn with_defaults() -> Self {
        Self {
            max_step: DEFAULT_MAX_STEP,
            probe_count: DEFAULT_PROBE_COUNT,
            iteration_count: JuliaOracle::DEFAULT_ITERATION_COUNT,
            escape_radius_sq: 4.0,
            initial_zoom_setting: -3200.0,
            zoom_halving_steps: 400.0,
            reset_lead_divisor: 10.0,
            scroll_pixels_per_line: 100.0,
            rng_seed: None,
            start_point: StartPoint::Random,
            report_every: 120,
        }
    }

    pub fn oracle(&self) -> JuliaOracle {
        JuliaOracle {
            iteration_count: self.iteration_count,
            escape_radius_sq: self.escape_radius_sq,
        }
    }
}

impl Default for FlyWalkConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
