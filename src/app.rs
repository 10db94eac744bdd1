use std::error::Error;

use web_time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::FlyWalkConfig;
use crate::input::InputState;
use crate::navigation::NavigationController;
use crate::snapshot::NavigationSnapshot;
use crate::uniforms::FrameUniforms;

const WINDOW_TITLE: &str = "julia-flywalk";

/// Frame-rate bookkeeping between diagnostic reports.
struct FrameStats {
    last_report: Instant,
    frames_since_report: u64,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            last_report: Instant::now(),
            frames_since_report: 0,
        }
    }

    fn frame(&mut self) {
        self.frames_since_report += 1;
    }

    /// Frames per second since the previous call.
    fn take_fps(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_report).as_secs_f64();
        let fps = if elapsed > 0.0 {
            self.frames_since_report as f64 / elapsed
        } else {
            0.0
        };
        self.last_report = now;
        self.frames_since_report = 0;
        fps
    }
}

fn should_report(controller: &NavigationController, report_every: u64) -> bool {
    report_every > 0 && controller.frame() % report_every == 0
}

/// Opens a window and flies until it is closed. One planner tick per
/// `AboutToWait`; input gathered in between is applied right before the tick.
pub fn run(config: FlyWalkConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let mut controller = NavigationController::new(&config);
    let mut input = InputState::new(config.scroll_pixels_per_line);
    let mut stats = FrameStats::new();
    let report_every = config.report_every;

    event_loop.run(move |event, target| match event {
        Event::AboutToWait => {
            for event in input.take_events() {
                controller.apply_event(event);
            }
            let frame = controller.tick();
            stats.frame();

            let uniforms = FrameUniforms::from(&frame);
            log::trace!("uniforms {:?}", uniforms.as_floats());

            if should_report(&controller, report_every) {
                let snapshot = controller.snapshot();
                window.set_title(&format!("{WINDOW_TITLE} | {}", snapshot.summary()));
                log::debug!("{:.1} fps\n{snapshot}", stats.take_fps());
            }
            window.request_redraw();
        }
        Event::WindowEvent { event, .. } => {
            if input.handle_window_event(&event, window.inner_size()) {
                return;
            }
            if matches!(event, WindowEvent::CloseRequested) {
                target.exit();
            }
        }
        _ => {}
    })?;
    Ok(())
}

/// Flies `frames` ticks without a window and returns the final state.
pub fn run_headless(config: FlyWalkConfig, frames: u64) -> NavigationSnapshot {
    let mut controller = NavigationController::new(&config);
    let mut stats = FrameStats::new();
    for _ in 0..frames {
        controller.tick();
        stats.frame();
        if should_report(&controller, config.report_every) {
            log::debug!("{:.0} ticks/s\n{}", stats.take_fps(), controller.snapshot());
        }
    }
    let snapshot = controller.snapshot();
    log::info!("finished {} frames: {}", frames, snapshot.summary());
    snapshot
}
