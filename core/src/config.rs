use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    /// Fixed seed for mine placement, random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self {
            size,
            mines,
            seed: None,
        }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks a config that did not come through [`GameConfig::new`], e.g. a deserialized one.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Rolls one decimal digit of the mine count, as the mine counter does when clicked.
    pub fn step_mine_digit(&mut self, digit: MineDigit, step: Step) {
        self.mines = step_digit(self.mines, digit, step).min(self.total_cells());
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineDigit {
    Ones,
    Tens,
    Hundreds,
}

impl MineDigit {
    const fn place(self) -> CellCount {
        match self {
            Self::Ones => 1,
            Self::Tens => 10,
            Self::Hundreds => 100,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Up,
    Down,
}

/// Each digit wraps on its own: 9 goes up to 0 and 0 goes down to 9, without carry.
pub const fn step_digit(value: CellCount, digit: MineDigit, step: Step) -> CellCount {
    let place = digit.place();
    let current = (value / place) % 10;
    match step {
        Step::Up if current == 9 => value - 9 * place,
        Step::Up => value.saturating_add(place),
        Step::Down if current == 0 => value.saturating_add(9 * place),
        Step::Down => value - place,
    }
}
