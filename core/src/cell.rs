use serde::{Deserialize, Serialize};

use crate::GameState;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Safe,
    Mine,
}

/// Stored state of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    adjacent: u8,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Number of neighboring mines, always 0 on a mine.
    pub const fn adjacent(self) -> u8 {
        self.adjacent
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Safe cell with no neighboring mines, revealing it cascades.
    pub const fn is_empty(self) -> bool {
        !self.is_mine() && self.adjacent == 0
    }

    pub(crate) fn set_mine(&mut self) {
        self.kind = CellKind::Mine;
        self.adjacent = 0;
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        if !self.is_mine() {
            self.adjacent += 1;
        }
    }

    pub(crate) fn reveal(&mut self) -> bool {
        if self.revealed || self.flagged {
            return false;
        }
        self.revealed = true;
        true
    }

    pub(crate) fn toggle_flag(&mut self) -> Option<bool> {
        if self.revealed {
            return None;
        }
        self.flagged = !self.flagged;
        Some(self.flagged)
    }

    /// What the player sees for this cell.
    pub fn visible(self, detonated: bool, state: GameState) -> VisibleCell {
        use VisibleCell::*;

        let lost = matches!(state, GameState::Lose);
        match (self.kind, self.revealed, self.flagged) {
            _ if detonated => Detonated,
            (CellKind::Mine, true, _) => Mine,
            (CellKind::Mine, false, false) if lost => Mine,
            (CellKind::Safe, false, true) if lost => WrongFlag,
            (_, false, true) => Flagged,
            (_, false, false) => Unrevealed,
            (CellKind::Safe, true, _) => Revealed(self.adjacent),
        }
    }
}

/// Player-visible state of a cell, derived on demand and never stored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    #[default]
    Unrevealed,
    Revealed(u8),
    Flagged,
    /// The mine whose reveal lost the game.
    Detonated,
    /// Unflagged mine exposed after a loss.
    Mine,
    /// Flag on a safe cell, exposed after a loss.
    WrongFlag,
}
