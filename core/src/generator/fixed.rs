use super::*;

/// Places mines at predetermined positions, for reproducible boards.
///
/// Positions that fall inside the safe zone or outside the board are skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedPlacer {
    mines: Vec<Coord2>,
}

impl FixedPlacer {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinePlacer for FixedPlacer {
    fn choose(&mut self, candidates: Vec<Coord2>, count: CellCount) -> Vec<Coord2> {
        let mut mines: Vec<Coord2> = Vec::with_capacity(self.mines.len());
        for &coords in &self.mines {
            if candidates.contains(&coords) && !mines.contains(&coords) {
                mines.push(coords);
            }
        }
        if mines.len() < self.mines.len() {
            log::debug!(
                "fixed placer skipped {} positions",
                self.mines.len() - mines.len()
            );
        }
        mines.truncate(count.into());
        mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_positions_outside_candidates() {
        let mut placer = FixedPlacer::new([(0, 0), (2, 2), (5, 5)]);
        let mines = placer.choose(vec![(1, 1), (2, 2)], 3);
        assert_eq!(mines, vec![(2, 2)]);
    }

    #[test]
    fn truncates_to_requested_count() {
        let mut placer = FixedPlacer::new([(0, 0), (1, 0), (2, 0)]);
        let candidates = vec![(0, 0), (1, 0), (2, 0)];
        assert_eq!(placer.choose(candidates, 2), vec![(0, 0), (1, 0)]);
    }
}
