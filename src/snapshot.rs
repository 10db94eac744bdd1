use std::fmt;

use crate::candidate::Candidate;
use crate::vec4::Vec4;

/// Read-only copy of the planner state, for overlays and logs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationSnapshot {
    pub frame: u64,
    pub step: u32,
    pub previous: Vec4,
    pub current: Vec4,
    pub current_point: Vec4,
    pub target: Option<Vec4>,
    pub best: Option<Candidate>,
    pub right: Vec4,
    pub up: Vec4,
    pub zoom_setting: f64,
    pub zoom: f64,
}

impl NavigationSnapshot {
    /// How far the retained best candidate sits from the current target.
    pub fn best_distance(&self) -> Option<f64> {
        match (self.target, self.best) {
            (Some(target), Some(best)) => Some((target - best.point).length()),
            _ => None,
        }
    }

    /// Single-line form for window titles and periodic logs.
    pub fn summary(&self) -> String {
        format!(
            "step {} | at {} | zoom {:.3e}",
            self.step, self.current_point, self.zoom
        )
    }
}

struct OptVec4(Option<Vec4>);

impl fmt::Display for OptVec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(&v, f),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for NavigationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frame: {}", self.frame)?;
        writeln!(f, "step: {}", self.step)?;
        writeln!(f, "previous: {}", self.previous)?;
        writeln!(f, "current: {}", self.current)?;
        writeln!(f, "current point: {}", self.current_point)?;
        writeln!(f, "target: {}", OptVec4(self.target))?;
        writeln!(f, "best: {}", OptVec4(self.best.map(|c| c.point)))?;
        match self.best {
            Some(best) => writeln!(f, "best score: {}", best.score)?,
            None => writeln!(f, "best score: none")?,
        }
        match self.best_distance() {
            Some(d) => writeln!(f, "best distance: {d:.4}")?,
            None => writeln!(f, "best distance: none")?,
        }
        writeln!(f, "right: {}", self.right)?;
        writeln!(f, "up: {}", self.up)?;
        writeln!(f, "zoom setting: {}", self.zoom_setting)?;
        write!(f, "zoom: {:e}", self.zoom)
    }
}
