//! Autonomous camera-path planner for flying through a 4D Julia/Mandelbrot
//! parameter space.
//!
//! Each frame the [`NavigationController`] proposes a random waypoint near the
//! current target, scores it by probing the trajectory it would create against
//! the set boundary, and keeps the best. When the [`Wanderer`] reaches its
//! target, the best candidate becomes the next target. The controller then
//! rebuilds an orthonormal screen basis around the direction of travel.

pub mod app;
pub mod candidate;
pub mod config;
pub mod input;
pub mod navigation;
pub mod oracle;
pub mod snapshot;
pub mod trajectory;
pub mod uniforms;
pub mod vec4;
pub mod wanderer;

#[cfg(target_arch = "wasm32")]
mod web;

pub use candidate::{Candidate, CandidateGenerator, Score};
pub use config::{FlyWalkConfig, StartPoint, SEED_POINTS};
pub use navigation::{FrameBasis, NavigationController, NavigationEvent};
pub use oracle::{JuliaOracle, MembershipOracle};
pub use snapshot::NavigationSnapshot;
pub use uniforms::FrameUniforms;
pub use vec4::Vec4;
pub use wanderer::Wanderer;

pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Debug).expect("Couldn't initialize logger");
        } else {
            env_logger::init();
        }
    }
}
