use crate::trajectory::blend;
use crate::vec4::Vec4;

pub const DEFAULT_MAX_STEP: u32 = 1000;

/// Owns the waypoint history and walks the camera point from `current` toward
/// `target` over `max_step` updates.
///
/// Idle when `target` is `None`; the controller must assign a new target before
/// the next [`Wanderer::update`].
#[derive(Clone, Debug)]
pub struct Wanderer {
    previous: Vec4,
    current: Vec4,
    target: Option<Vec4>,
    current_point: Vec4,
    step: u32,
    max_step: u32,
}

impl Wanderer {
    pub fn new(start: Vec4, max_step: u32) -> Self {
        Self {
            previous: start,
            current: start,
            target: None,
            current_point: start,
            step: 0,
            max_step: max_step.max(1),
        }
    }

    pub fn previous(&self) -> Vec4 {
        self.previous
    }

    pub fn current(&self) -> Vec4 {
        self.current
    }

    pub fn target(&self) -> Option<Vec4> {
        self.target
    }

    /// The interpolated camera position.
    pub fn current_point(&self) -> Vec4 {
        self.current_point
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn max_step(&self) -> u32 {
        self.max_step
    }

    pub fn is_idle(&self) -> bool {
        self.target.is_none()
    }

    /// Starts a new leg toward `target` from the current waypoint.
    pub fn set_target(&mut self, target: Vec4) {
        self.target = Some(target);
        self.step = 0;
    }

    /// Moves the camera one step along the current leg. On the last step the
    /// waypoints shift forward and the wanderer goes idle.
    ///
    /// # Panics
    ///
    /// If called while idle.
    pub fn update(&mut self) {
        let Some(target) = self.target else {
            panic!("Wanderer::update called while idle: no target was assigned");
        };

        let progress = self.step as f64 / self.max_step as f64;
        self.current_point = blend(self.previous, self.current, target, progress);

        self.step += 1;
        if self.step >= self.max_step {
            self.previous = self.current;
            self.current = target;
            self.target = None;
            self.step = 0;
        }
    }

    /// Jumps to `point`, treating `direction` as the velocity of an imaginary
    /// previous leg so the next leg eases out along it.
    pub fn reset(&mut self, point: Vec4, direction: Vec4) {
        self.previous = point - direction;
        self.current = point;
        self.current_point = point;
        self.target = None;
        self.step = 0;
    }
}
