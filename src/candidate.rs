use rand::Rng;

use crate::oracle::MembershipOracle;
use crate::trajectory::blend;
use crate::vec4::Vec4;

pub const DEFAULT_PROBE_COUNT: usize = 20;

/// Per-criterion score of a proposed waypoint. Higher is better; every element
/// is `<= 0`.
///
/// `[first_half_balance, second_half_balance, turn]`. Candidates are ranked by
/// the plain sum of the elements, so the turn term (range `[-1, 0]`) weighs
/// roughly twice as much as either balance term (range `[-0.5, 0]`).
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Score(pub [f64; 3]);

impl Score {
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn turn(&self) -> f64 {
        self.0[2]
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:.3}, {b:.3}, {c:.3} (sum {:.3})", self.total())
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Candidate {
    pub point: Vec4,
    pub score: Score,
}

impl Candidate {
    /// Strictly better than `incumbent`; an absent incumbent scores `-inf`, and
    /// an exact tie keeps the incumbent.
    pub fn beats(&self, incumbent: Option<&Candidate>) -> bool {
        let bar = incumbent.map_or(f64::NEG_INFINITY, |c| c.score.total());
        self.score.total() > bar
    }
}

/// Proposes randomized next waypoints and scores them by probing the eased
/// trajectory they would produce against a membership oracle.
#[derive(Clone, Debug)]
pub struct CandidateGenerator<O> {
    oracle: O,
    probe_count: usize,
}

impl<O: MembershipOracle> CandidateGenerator<O> {
    pub fn new(oracle: O, probe_count: usize) -> Self {
        Self {
            oracle,
            probe_count,
        }
    }

    /// A random point within `distance` (per axis) of `to`, or of `from` when
    /// there is no current target.
    pub fn propose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        from: Vec4,
        to: Option<Vec4>,
        distance: f64,
    ) -> Candidate {
        let to = to.unwrap_or(from);
        let point = to + Vec4::random_deviate(rng, distance);
        Candidate {
            point,
            score: self.score(from, to, point),
        }
    }

    /// Inside/outside pattern of `probe_count` evenly spaced points along the
    /// trajectory `from -> to -> next`, starting at progress 0.
    pub fn probe(&self, from: Vec4, to: Vec4, next: Vec4) -> Vec<bool> {
        (0..self.probe_count)
            .map(|probe| {
                let progress = probe as f64 / self.probe_count as f64;
                self.oracle.classify(blend(from, to, next, progress))
            })
            .collect()
    }

    pub fn score(&self, from: Vec4, to: Vec4, next: Vec4) -> Score {
        let probes = self.probe(from, to, next);
        let (first, second) = probes.split_at(self.probe_count / 2);

        let turn = (to - from).normalize().dot((next - to).normalize());
        Score([balance(first), balance(second), -turn.abs()])
    }
}

/// `-|0.5 - inside_fraction|`: zero when exactly half the probes are inside.
fn balance(probes: &[bool]) -> f64 {
    let inside = probes.iter().filter(|&&p| p).count();
    let fraction = inside as f64 / probes.len().max(1) as f64;
    -(0.5 - fraction).abs()
}
