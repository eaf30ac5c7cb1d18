//! Tunable evaluation weights.

/// Per-piece values used by the evaluator.
///
/// | Term             | Value |
/// |------------------|-------|
/// | Man              |     5 |
/// | Man on edge file |    +2 |
/// | Maximizer king   |    80 |
/// | Minimizer king   |    50 |
/// | King on edge file|    +4 |
/// | Side eliminated  |  1000 |
///
/// King values depend on the owner's role, so the table is not symmetric
/// between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Value of a man.
    pub man: i32,
    /// Extra value of a man on file 0 or 7.
    pub edge_man: i32,
    /// Value of a king belonging to the maximizing side.
    pub maximizer_king: i32,
    /// Value of a king belonging to the minimizing side.
    pub minimizer_king: i32,
    /// Extra value of a king on file 0 or 7.
    pub edge_king: i32,
    /// Bonus (or penalty) once a side has no pieces left.
    pub elimination: i32,
}

impl Weights {
    /// The default weight table.
    pub const REFERENCE: Weights = Weights {
        man: 5,
        edge_man: 2,
        maximizer_king: 80,
        minimizer_king: 50,
        edge_king: 4,
        elimination: 1000,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Weights::REFERENCE
    }
}
