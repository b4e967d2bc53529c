use std::fmt;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy choosing where mines go.
///
/// `candidates` is every cell outside the safe zone. Implementations return at
/// most `count` distinct positions taken from it; returning fewer means the
/// board could not hold every requested mine.
pub trait MinePlacer: fmt::Debug {
    fn choose(&mut self, candidates: Vec<Coord2>, count: CellCount) -> Vec<Coord2>;
}

