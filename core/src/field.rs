use std::collections::VecDeque;
use std::ops::{AddAssign, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells newly revealed by a single reveal, including any cascade.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Opened {
    pub cells: CellCount,
    pub mine: bool,
}

impl Opened {
    pub const fn is_empty(self) -> bool {
        self.cells == 0
    }
}

impl AddAssign for Opened {
    fn add_assign(&mut self, rhs: Self) {
        self.cells += rhs.cells;
        self.mine |= rhs.mine;
    }
}

/// The grid: mine layout, adjacency numbers, and reveal/flag marks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
}

impl Minefield {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(nd_shape(size)),
            mine_count: 0,
            revealed_count: 0,
        }
    }

    /// `(width, height)` of the grid.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            cols.try_into().unwrap_or(Coord::MAX),
            rows.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Every position in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.coords().map(|coords| (coords, self[coords]))
    }

    pub fn flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_flagged())
            .count()
            .try_into()
            .unwrap_or(u8::MAX)
    }

    /// Lays out mines through `placer`, keeping the 3x3 block around `safe` clear.
    ///
    /// Returns how many mines were placed, which is less than `requested` when
    /// the board runs out of candidate cells.
    pub fn place_mines(
        &mut self,
        requested: CellCount,
        safe: Option<Coord2>,
        placer: &mut dyn MinePlacer,
    ) -> CellCount {
        let mut candidates: Vec<Coord2> = self.coords().collect();
        if let Some(center) = safe {
            let zone: Vec<Coord2> = block_around(center, self.size()).collect();
            candidates.retain(|coords| !zone.contains(coords));
        }
        let free = candidates.len();

        for coords in placer.choose(candidates, requested) {
            if self.validate_coords(coords).is_err() {
                log::warn!("Placer chose {:?} outside the board, skipped", coords);
                continue;
            }
            self.place_mine(coords);
        }

        if self.mine_count < requested {
            log::warn!(
                "Requested {} mines but only {} fit outside the safe zone ({} free cells)",
                requested,
                self.mine_count,
                free
            );
        }
        log::debug!("Placed {} mines, safe zone around {:?}", self.mine_count, safe);
        self.mine_count
    }

    /// Marks a single mine and bumps the numbers around it.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        if self[coords].is_mine() {
            return false;
        }
        self.cells[coords.to_nd_index()].set_mine();
        for pos in self.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()].add_adjacent_mine();
        }
        self.mine_count += 1;
        true
    }

    /// Reveals a cell, flooding outwards through empty cells.
    ///
    /// Already revealed and flagged cells are left alone, both at the start and
    /// during the cascade.
    pub fn reveal(&mut self, coords: Coord2) -> Opened {
        let Some(cell) = self.reveal_one(coords) else {
            return Opened::default();
        };
        let mut opened = Opened {
            cells: 1,
            mine: cell.is_mine(),
        };
        log::debug!("Revealed {:?}, adjacent mines: {}", coords, cell.adjacent());

        if !cell.is_empty() {
            return opened;
        }

        let mut to_visit: VecDeque<Coord2> = self.iter_neighbors(coords).collect();
        while let Some(visit_coords) = to_visit.pop_front() {
            let Some(visited) = self.reveal_one(visit_coords) else {
                continue;
            };
            opened.cells += 1;
            log::trace!(
                "Flood revealed {:?}, adjacent mines: {}",
                visit_coords,
                visited.adjacent()
            );

            if visited.is_empty() {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| !self[pos].is_revealed() && !self[pos].is_flagged()),
                );
            }
        }
        opened
    }

    /// Toggles the flag on an unrevealed cell, returning the new flag state.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Option<bool> {
        self.cells[coords.to_nd_index()].toggle_flag()
    }

    fn reveal_one(&mut self, coords: Coord2) -> Option<Cell> {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.reveal() {
            return None;
        }
        self.revealed_count += 1;
        Some(*cell)
    }
}

impl Index<Coord2> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
