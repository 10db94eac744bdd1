use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::candidate::{Candidate, CandidateGenerator};
use crate::config::{FlyWalkConfig, StartPoint, SEED_POINTS};
use crate::oracle::{JuliaOracle, MembershipOracle};
use crate::snapshot::NavigationSnapshot;
use crate::vec4::Vec4;
use crate::wanderer::Wanderer;

/// Input applied to the controller between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigationEvent {
    /// Added to the zoom accumulator; positive zooms out.
    Scroll { delta_y: f64 },
    /// Aspect-corrected viewport offset, see [`crate::input::viewport_offset`].
    Retarget { x: f64, y: f64 },
}

/// What the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBasis {
    pub position: Vec4,
    pub right: Vec4,
    pub up: Vec4,
    pub zoom: f64,
}

/// Gram-Schmidt pass of `(right, up)` against the unit `forward`, then `up`
/// against the new `right`. The order is load-bearing: `up` must end up
/// orthogonal to both.
pub fn orthonormalize_basis(right: Vec4, up: Vec4, forward: Vec4) -> (Vec4, Vec4) {
    let right = right.project_out(forward).normalize();
    let up = up.project_out(forward).normalize();
    let up = up.project_out(right).normalize();
    (right, up)
}

/// Per-frame planner: proposes candidates, commits the best one whenever the
/// wanderer goes idle, advances the wanderer, and keeps the camera basis
/// perpendicular to the direction of travel.
pub struct NavigationController<O = JuliaOracle> {
    wanderer: Wanderer,
    generator: CandidateGenerator<O>,
    rng: StdRng,
    best: Option<Candidate>,
    zoom_setting: f64,
    zoom_halving_steps: f64,
    reset_lead_divisor: f64,
    last_direction: Vec4,
    right: Vec4,
    up: Vec4,
    frame: u64,
    events: mpsc::Receiver<NavigationEvent>,
    event_sender: mpsc::Sender<NavigationEvent>,
}

impl NavigationController<JuliaOracle> {
    pub fn new(config: &FlyWalkConfig) -> Self {
        Self::with_oracle(config, config.oracle())
    }
}

impl<O: MembershipOracle> NavigationController<O> {
    pub fn with_oracle(config: &FlyWalkConfig, oracle: O) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = match config.start_point {
            StartPoint::Explicit(point) => point,
            StartPoint::Seed(index) if index < SEED_POINTS.len() => SEED_POINTS[index],
            StartPoint::Seed(index) => {
                log::warn!("seed point {index} does not exist, picking one at random");
                SEED_POINTS[rng.gen_range(0..SEED_POINTS.len())]
            }
            StartPoint::Random => SEED_POINTS[rng.gen_range(0..SEED_POINTS.len())],
        };
        log::info!("starting flight at ({start})");

        let right = Vec4::random_deviate(&mut rng, 1.0);
        let up = Vec4::random_deviate(&mut rng, 1.0);
        let (event_sender, events) = mpsc::channel();

        Self {
            wanderer: Wanderer::new(start, config.max_step),
            generator: CandidateGenerator::new(oracle, config.probe_count),
            rng,
            best: None,
            zoom_setting: config.initial_zoom_setting,
            zoom_halving_steps: config.zoom_halving_steps,
            reset_lead_divisor: config.reset_lead_divisor,
            last_direction: Vec4::ZERO,
            right,
            up,
            frame: 0,
            events,
            event_sender,
        }
    }

    pub fn wanderer(&self) -> &Wanderer {
        &self.wanderer
    }

    pub fn best_candidate(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn zoom_setting(&self) -> f64 {
        self.zoom_setting
    }

    pub fn zoom(&self) -> f64 {
        2f64.powf(self.zoom_setting / self.zoom_halving_steps)
    }

    pub fn last_direction(&self) -> Vec4 {
        self.last_direction
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Handle for queueing input from other threads. Queued events are applied
    /// at the start of the next [`tick`](Self::tick), never during one.
    pub fn event_sender(&self) -> mpsc::Sender<NavigationEvent> {
        self.event_sender.clone()
    }

    pub fn push_event(&self, event: NavigationEvent) {
        // The receiver lives in `self`, so this cannot fail.
        let _ = self.event_sender.send(event);
    }

    pub fn apply_event(&mut self, event: NavigationEvent) {
        match event {
            NavigationEvent::Scroll { delta_y } => {
                self.zoom_setting += delta_y;
                log::trace!("zoom setting {} (zoom {:e})", self.zoom_setting, self.zoom());
            }
            NavigationEvent::Retarget { x, y } => self.retarget(x, y),
        }
    }

    /// Jumps the camera to the point under the viewport offset `(x, y)` and
    /// restarts planning from there, heading the way it was already moving.
    pub fn retarget(&mut self, x: f64, y: f64) {
        let zoom = self.zoom();
        let point = self.wanderer.current_point() + (self.right * x + self.up * y) * zoom;
        let lead = self.last_direction * (zoom / self.reset_lead_divisor);
        self.wanderer.reset(point, lead);
        self.best = None;
        log::info!("retargeted to ({point})");
    }

    /// Advances one frame.
    pub fn tick(&mut self) -> FrameBasis {
        while let Ok(event) = self.events.try_recv() {
            self.apply_event(event);
        }

        let distance = self.zoom();
        let candidate = self.generator.propose(
            &mut self.rng,
            self.wanderer.current(),
            self.wanderer.target(),
            distance,
        );
        if candidate.beats(self.best.as_ref()) {
            self.best = Some(candidate);
        }

        if self.wanderer.is_idle() {
            match self.best.take() {
                Some(best) => {
                    log::debug!("next waypoint ({}) score [{}]", best.point, best.score);
                    self.wanderer.set_target(best.point);
                }
                None => log::warn!("no scored candidate to commit, holding position"),
            }
        }

        let last_point = self.wanderer.current_point();
        if !self.wanderer.is_idle() {
            self.wanderer.update();
        }

        let direction = (self.wanderer.current_point() - last_point).normalize();
        if !direction.is_zero() {
            self.last_direction = direction;
            (self.right, self.up) = orthonormalize_basis(self.right, self.up, direction);
        }

        self.frame += 1;
        self.frame_basis()
    }

    pub fn frame_basis(&self) -> FrameBasis {
        FrameBasis {
            position: self.wanderer.current_point(),
            right: self.right,
            up: self.up,
            zoom: self.zoom(),
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            frame: self.frame,
            step: self.wanderer.step(),
            previous: self.wanderer.previous(),
            current: self.wanderer.current(),
            current_point: self.wanderer.current_point(),
            target: self.wanderer.target(),
            best: self.best,
            right: self.right,
            up: self.up,
            zoom_setting: self.zoom_setting,
            zoom: self.zoom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn config() -> FlyWalkConfig {
        FlyWalkConfig {
            rng_seed: Some(42),
            start_point: StartPoint::Seed(0),
            ..FlyWalkConfig::with_defaults()
        }
    }

    fn assert_orthonormal(right: Vec4, up: Vec4, forward: Vec4) {
        assert!((right.length() - 1.0).abs() < 1e-9, "|right|={}", right.length());
        assert!((up.length() - 1.0).abs() < 1e-9, "|up|={}", up.length());
        assert!(right.dot(forward).abs() < 1e-9);
        assert!(up.dot(forward).abs() < 1e-9);
        assert!(right.dot(up).abs() < 1e-9);
    }

    #[test]
    fn gram_schmidt_pass_is_orthonormal() {
        let right = Vec4::new(1.0, 0.0, 0.0, 0.0);
        let up = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let forwards = [
            Vec4::new(0.3, 0.4, 0.5, 0.1).normalize(),
            Vec4::new(-1.0, 2.0, 0.7, 0.0).normalize(),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ];
        for forward in forwards {
            let (r, u) = orthonormalize_basis(right, up, forward);
            assert_orthonormal(r, u, forward);
        }
    }

    #[test]
    fn forward_inside_the_basis_plane_collapses_up() {
        // Both basis vectors project onto the same in-plane direction, so
        // nothing orthogonal to right and forward is left for up.
        let right = Vec4::new(1.0, 0.0, 0.0, 0.0);
        let up = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let forward = Vec4::new(-1.0, 2.0, 0.0, 0.0).normalize();
        let (r, u) = orthonormalize_basis(right, up, forward);

        let expected_right = Vec4::new(2.0, 1.0, 0.0, 0.0).normalize();
        assert!((r - expected_right).length() < 1e-12, "right=({r})");
        assert!(r.dot(forward).abs() < 1e-12);

        // Up never leaves the xy plane, which already holds right and forward.
        assert_eq!((u.z(), u.w()), (0.0, 0.0));
        assert!(u.dot(forward).abs() > 1e-3 || u.dot(r).abs() > 1e-3 || u.is_zero());
    }

    #[test]
    fn holds_position_while_no_candidate_scores() {
        let mut controller = NavigationController::new(&config());
        let start = controller.wanderer().current();
        controller.apply_event(NavigationEvent::Scroll { delta_y: 1e6 });
        assert!(controller.zoom().is_infinite());

        for _ in 0..5 {
            let frame = controller.tick();
            assert_eq!(frame.position, start);
        }
        assert!(controller.wanderer().is_idle());
        assert!(controller.best_candidate().is_none());
        assert_eq!(controller.wanderer().current(), start);
        assert_eq!(controller.frame(), 5);

        controller.apply_event(NavigationEvent::Scroll { delta_y: -1e6 });
        assert_eq!(controller.zoom_setting(), -3200.0);
        controller.tick();
        assert!(!controller.wanderer().is_idle());
        assert_eq!(controller.wanderer().step(), 1);
    }

    #[test]
    fn zoom_doubles_every_halving_step() {
        let mut controller = NavigationController::new(&config());
        assert!((controller.zoom() - 2f64.powi(-8)).abs() < 1e-15);
        controller.apply_event(NavigationEvent::Scroll { delta_y: 400.0 });
        assert!((controller.zoom() - 2f64.powi(-7)).abs() < 1e-15);
        controller.apply_event(NavigationEvent::Scroll { delta_y: 3200.0 });
        assert!((controller.zoom() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn first_tick_commits_a_target_and_clears_best() {
        let mut controller = NavigationController::new(&config());
        assert!(controller.wanderer().is_idle());
        controller.tick();
        assert!(!controller.wanderer().is_idle());
        assert!(controller.best_candidate().is_none());
        assert_eq!(controller.wanderer().step(), 1);
    }

    #[test]
    fn basis_stays_orthonormal_in_flight() {
        let mut controller = NavigationController::new(&config());
        let mut moved = false;
        for _ in 0..300 {
            let frame = controller.tick();
            let forward = controller.last_direction();
            if !forward.is_zero() {
                moved = true;
                assert_orthonormal(frame.right, frame.up, forward);
            }
        }
        assert!(moved);
    }

    #[test]
    fn retarget_jumps_by_scaled_basis_offset() {
        let mut controller = NavigationController::new(&config());
        for _ in 0..10 {
            controller.tick();
        }
        let before = controller.frame_basis();
        let lead = controller.last_direction() * (before.zoom / 10.0);

        controller.retarget(0.5, -0.25);
        let expected = before.position + (before.right * 0.5 + before.up * -0.25) * before.zoom;
        let wanderer = controller.wanderer();
        assert!(wanderer.is_idle());
        assert_eq!(wanderer.current(), expected);
        assert_eq!(wanderer.current_point(), expected);
        assert_eq!(wanderer.previous(), expected - lead);
        assert!(controller.best_candidate().is_none());
    }

    #[test]
    fn events_from_other_threads_apply_on_next_tick() {
        let mut controller = NavigationController::new(&config());
        let sender = controller.event_sender();
        thread::spawn(move || {
            sender
                .send(NavigationEvent::Scroll { delta_y: 800.0 })
                .unwrap();
        })
        .join()
        .unwrap();

        assert_eq!(controller.zoom_setting(), -3200.0);
        controller.tick();
        assert_eq!(controller.zoom_setting(), -2400.0);
    }

    #[test]
    fn seeded_controllers_fly_identically() {
        let mut a = NavigationController::new(&config());
        let mut b = NavigationController::new(&config());
        for _ in 0..50 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
