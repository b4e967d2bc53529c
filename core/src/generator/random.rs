use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement without replacement, driven by a seeded `SmallRng`.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    seed: u64,
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks a fresh seed, so the board can still be reproduced from the logs.
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        log::debug!("random placer seed: {}", seed);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomPlacer {
    fn choose(&mut self, mut candidates: Vec<Coord2>, count: CellCount) -> Vec<Coord2> {
        let mut mines = Vec::with_capacity(usize::from(count).min(candidates.len()));
        while mines.len() < usize::from(count) && !candidates.is_empty() {
            let pick = self.rng.random_range(0..candidates.len());
            mines.push(candidates.swap_remove(pick));
        }
        mines
    }
}
