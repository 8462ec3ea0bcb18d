//! Configuration and result types for hull augmentation.

/// Which area the augmentation drives toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Carve away the largest feasible triangle each step.
    MinArea,
    /// Carve away the smallest feasible triangle each step.
    MaxArea,
}

impl Objective {
    /// `candidate` strictly beats `incumbent` (both doubled triangle areas).
    #[inline]
    pub fn prefers(self, candidate: i128, incumbent: i128) -> bool {
        match self {
            Objective::MinArea => candidate > incumbent,
            Objective::MaxArea => candidate < incumbent,
        }
    }
}

/// Augmentation configuration.
#[derive(Clone, Copy, Debug)]
pub struct OptimizeCfg {
    pub objective: Objective,
    /// Stop after this many insertions. Bounds latency on large inputs; the
    /// result is then a partial polygon.
    pub max_insertions: Option<usize>,
}

impl Default for OptimizeCfg {
    fn default() -> Self {
        Self {
            objective: Objective::MinArea,
            max_insertions: None,
        }
    }
}

impl OptimizeCfg {
    #[inline]
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            ..Self::default()
        }
    }
}

/// A feasible insertion: `remaining[slot]` goes between boundary vertices
/// `edge` and `edge + 1` (mod boundary length).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub slot: usize,
    pub edge: usize,
    /// Twice the area of the triangle cut from the boundary.
    pub area2: i128,
}

/// Why augmentation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    /// Every point is on the boundary.
    Complete,
    /// Some points remain but no (point, edge) pair passes the gate.
    NoFeasibleCandidate,
    /// `OptimizeCfg::max_insertions` reached.
    InsertionCap,
}

/// Result of one augmentation run.
///
/// `polygon` has every input point only when `stop == Stop::Complete`; use
/// `geom::check_validity` to tell full results from partial ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Augmentation {
    pub polygon: Vec<usize>,
    pub inserted: usize,
    pub stop: Stop,
}

impl Augmentation {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.stop == Stop::Complete
    }
}
