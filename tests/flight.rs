use julia_flywalk::{
    CandidateGenerator, FlyWalkConfig, JuliaOracle, NavigationController, NavigationEvent,
    StartPoint, Vec4, Wanderer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: Vec4 = Vec4::new(0.14, 0.65, -0.22, -0.73);

fn seeded_config(seed: u64) -> FlyWalkConfig {
    FlyWalkConfig {
        rng_seed: Some(seed),
        start_point: StartPoint::Explicit(SEED),
        max_step: 100,
        ..FlyWalkConfig::with_defaults()
    }
}

#[test]
fn wanderer_reaches_assigned_target_bitwise() {
    let target = Vec4::new(0.15, 0.64, -0.21, -0.72);
    let mut wanderer = Wanderer::new(SEED, 1000);
    wanderer.set_target(target);
    for _ in 0..1000 {
        wanderer.update();
    }
    assert!(wanderer.is_idle());
    assert_eq!(wanderer.current().to_array(), target.to_array());
    assert_eq!(wanderer.previous(), SEED);
}

#[test]
fn proposal_with_no_spread_returns_the_seed() {
    let generator = CandidateGenerator::new(JuliaOracle::default(), 20);
    let mut rng = StdRng::seed_from_u64(0);
    let candidate = generator.propose(&mut rng, SEED, Some(SEED), 0.0);
    assert_eq!(candidate.point, SEED);
    assert_eq!(candidate.score.turn(), 0.0);
    assert!(candidate.score.total().is_finite());
    assert!(candidate.score.total() <= 0.0);
}

#[test]
fn controller_commits_a_new_waypoint_every_leg() {
    let mut controller = NavigationController::new(&seeded_config(11));
    let mut waypoints = vec![controller.wanderer().current()];
    for _ in 0..450 {
        controller.tick();
        let current = controller.wanderer().current();
        if waypoints.last() != Some(&current) {
            waypoints.push(current);
        }
    }
    // Legs finish on ticks 100, 200, 300 and 400.
    assert_eq!(waypoints.len(), 5);
    assert_eq!(controller.frame(), 450);
    for pair in waypoints.windows(2) {
        let zoom = controller.zoom();
        for (a, b) in pair[0].to_array().into_iter().zip(pair[1].to_array()) {
            assert!(
                (a - b).abs() <= zoom * (1.0 + 1e-9),
                "waypoints further apart than the zoom {zoom}"
            );
        }
    }
}

#[test]
fn camera_moves_continuously_across_waypoints() {
    let mut controller = NavigationController::new(&seeded_config(3));
    let mut last = controller.tick().position;
    let mut largest_step: f64 = 0.0;
    for _ in 0..400 {
        let position = controller.tick().position;
        largest_step = largest_step.max((position - last).length());
        last = position;
    }
    // Each leg spans at most 2 * zoom per axis over 100 frames.
    assert!(largest_step < controller.zoom(), "jump of {largest_step}");
}

#[test]
fn click_retargets_and_flight_resumes() {
    let mut controller = NavigationController::new(&seeded_config(21));
    for _ in 0..30 {
        controller.tick();
    }
    let before = controller.frame_basis();

    controller.push_event(NavigationEvent::Retarget { x: 1.0, y: 0.0 });
    let after = controller.tick();

    let jumped_to = before.position + before.right * before.zoom;
    assert!((controller.wanderer().current() - jumped_to).length() < 1e-15);
    assert!((after.position - jumped_to).length() < before.zoom);
    assert!(!controller.wanderer().is_idle());
}

#[test]
fn scrolling_zooms_in_and_out() {
    let mut controller = NavigationController::new(&seeded_config(8));
    let start = controller.zoom();
    controller.push_event(NavigationEvent::Scroll { delta_y: -400.0 });
    let zoomed_in = controller.tick().zoom;
    assert!((zoomed_in - start / 2.0).abs() < 1e-15);
    controller.push_event(NavigationEvent::Scroll { delta_y: 800.0 });
    let zoomed_out = controller.tick().zoom;
    assert!((zoomed_out - start * 2.0).abs() < 1e-15);
}
