use crate::vec4::Vec4;

/// Piecewise-quadratic ease-in/ease-out over `[0, 1]`.
pub fn smooth(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

/// Point along the leg `current -> target` at `progress`, eased in from the
/// straight continuation of the previous leg `previous -> current`.
///
/// Early in the leg the camera keeps drifting the way it was heading; by the
/// end it has fully committed to the new target, so velocity stays continuous
/// across waypoint changes.
pub fn blend(previous: Vec4, current: Vec4, target: Vec4, progress: f64) -> Vec4 {
    let extrapolated = current + (current - previous);
    let old_trajectory = current.lerp(extrapolated, progress);
    let new_trajectory = current.lerp(target, progress);
    old_trajectory.lerp(new_trajectory, smooth(progress))
}
