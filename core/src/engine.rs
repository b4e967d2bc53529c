use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Uninitialized -> Playing (mines placed)
/// - Playing -> Win
/// - Playing -> Lose
/// - any -> Uninitialized (restart)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Grid built, mines not placed yet
    #[default]
    Uninitialized,
    Playing,
    Win,
    Lose,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// Game ended and no moves can be made until restart
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// A single game from grid creation to win or loss, reusable through [`Game::restart`].
#[derive(Debug)]
pub struct Game<C: Clock = SystemClock> {
    config: GameConfig,
    next_config: Option<GameConfig>,
    field: Minefield,
    total_mines: CellCount,
    flag_count: CellCount,
    state: GameState,
    detonated: Option<Coord2>,
    placer: Box<dyn MinePlacer>,
    stopwatch: Stopwatch<C>,
    paused: bool,
}

impl Game {
    /// Game with random placement, seeded from the config when it carries a seed.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_placer(config, placer_for(&config), SystemClock)
    }
}

impl<C: Clock> Game<C> {
    pub fn with_placer(
        config: GameConfig,
        placer: impl MinePlacer + 'static,
        clock: C,
    ) -> Result<Self> {
        if config.width() == 0 || config.height() == 0 {
            return Err(GameError::InvalidSize);
        }
        if config.mines > config.total_cells() {
            log::warn!(
                "Config asks for {} mines on {} cells, placement will fall short",
                config.mines,
                config.total_cells()
            );
        }
        Ok(Self {
            config,
            next_config: None,
            field: Minefield::new(config.size),
            total_mines: config.mines,
            flag_count: 0,
            state: GameState::default(),
            detonated: None,
            placer: Box::new(placer),
            stopwatch: Stopwatch::new(clock),
            paused: false,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.field.size()
    }

    pub fn field(&self) -> &Minefield {
        &self.field
    }

    /// Mines on the board, or the requested count before placement.
    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.field.revealed_count()
    }

    /// Mines not yet accounted for by flags. Goes negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.total_mines as isize) - (self.flag_count as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn detonated(&self) -> Option<Coord2> {
        self.detonated
    }

    /// Time spent playing, frozen once the game ends or while paused.
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.field.validate_coords(coords)?;
        Ok(self.field[coords])
    }

    pub fn visible_at(&self, coords: Coord2) -> Result<VisibleCell> {
        let coords = self.field.validate_coords(coords)?;
        Ok(self.visible_unchecked(coords))
    }

    /// Visible state of every cell in row-major order.
    pub fn iter_visible(&self) -> impl Iterator<Item = (Coord2, VisibleCell)> + '_ {
        self.field
            .coords()
            .map(|coords| (coords, self.visible_unchecked(coords)))
    }

    /// Mines and wrong flags exposed by a loss. Empty unless the game is lost.
    pub fn loss_markers(&self) -> impl Iterator<Item = (Coord2, VisibleCell)> + '_ {
        self.iter_visible()
            .filter(|&(coords, visible)| match visible {
                VisibleCell::Mine => !self.field[coords].is_revealed(),
                VisibleCell::WrongFlag => true,
                _ => false,
            })
    }

    /// Lays out mines now instead of on the first reveal.
    pub fn place_mines(&mut self, safe: Option<Coord2>) -> Result<CellCount> {
        if !self.state.is_initial() {
            return Err(GameError::AlreadyStarted);
        }
        let safe = safe.map(|coords| self.field.validate_coords(coords)).transpose()?;

        let placed = self
            .field
            .place_mines(self.config.mines, safe, &mut *self.placer);
        self.total_mines = placed;
        self.state = GameState::Playing;
        self.stopwatch.start();
        if self.paused {
            self.stopwatch.stop();
        }
        log::debug!("Game started with {} mines", placed);
        Ok(placed)
    }

    /// Reveals a cell, placing mines first if this is the opening move.
    pub fn on_primary(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.field.validate_coords(coords)?;
        self.check_accepting()?;

        if self.state.is_initial() {
            self.place_mines(Some(coords))?;
        }

        let opened = self.field.reveal(coords);
        Ok(self.settle(opened, opened.mine.then_some(coords)))
    }

    /// Toggles a flag on an unrevealed cell.
    pub fn on_secondary(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.field.validate_coords(coords)?;
        self.check_accepting()?;

        Ok(match self.field.toggle_flag(coords) {
            Some(true) => {
                self.flag_count += 1;
                MarkOutcome::Changed
            }
            Some(false) => {
                self.flag_count -= 1;
                MarkOutcome::Changed
            }
            None => MarkOutcome::NoChange,
        })
    }

    /// Reveals every unflagged neighbor of a revealed number once enough flags surround it.
    ///
    /// Flags are trusted, not checked: a misplaced flag lets this detonate a mine.
    pub fn on_chord(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.field.validate_coords(coords)?;
        self.check_accepting()?;

        let cell = self.field[coords];
        if !cell.is_revealed() || self.field.flagged_neighbors(coords) != cell.adjacent() {
            return Ok(RevealOutcome::NoChange);
        }

        let mut opened = Opened::default();
        let mut detonated = None;
        for pos in self.field.iter_neighbors(coords) {
            let step = self.field.reveal(pos);
            if step.mine && detonated.is_none() {
                detonated = Some(pos);
            }
            opened += step;
        }
        Ok(self.settle(opened, detonated))
    }

    /// Throws the grid away and starts over, picking up any pending config.
    pub fn restart(&mut self) {
        if let Some(next) = self.next_config.take() {
            if let Some(seed) = next.seed {
                self.placer = Box::new(RandomPlacer::new(seed));
            }
            self.config = next;
        }
        self.field = Minefield::new(self.config.size);
        self.total_mines = self.config.mines;
        self.flag_count = 0;
        self.state = GameState::Uninitialized;
        self.detonated = None;
        self.paused = false;
        self.stopwatch.reset();
        log::debug!("Restarted with {:?}", self.config);
    }

    /// Stores `config` for the next [`Game::restart`].
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.next_config = Some(config);
        Ok(())
    }

    /// Adjusts the requested mine count before the first move.
    ///
    /// A pending config from [`Game::reconfigure`] is stepped too, clamped to its own board.
    pub fn step_mine_digit(&mut self, digit: MineDigit, step: Step) -> Result<CellCount> {
        if !self.state.is_initial() {
            return Err(GameError::AlreadyStarted);
        }
        self.config.step_mine_digit(digit, step);
        if let Some(next) = self.next_config.as_mut() {
            next.mines = self.config.mines.min(next.total_cells());
        }
        self.total_mines = self.config.mines;
        Ok(self.total_mines)
    }

    /// Stops the clock and refuses moves until [`Game::resume`].
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.stopwatch.stop();
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
        if matches!(self.state, GameState::Playing) {
            self.stopwatch.resume();
        }
    }

    fn settle(&mut self, opened: Opened, detonated: Option<Coord2>) -> RevealOutcome {
        if let Some(coords) = detonated {
            self.lose(coords);
            return RevealOutcome::HitMine;
        }

        if self.field.revealed_count() >= self.field.safe_cell_count() {
            self.win();
            RevealOutcome::Won
        } else if opened.is_empty() {
            RevealOutcome::NoChange
        } else {
            RevealOutcome::Revealed
        }
    }

    fn win(&mut self) {
        self.state = GameState::Win;
        self.stopwatch.stop();
        log::debug!("Won after {:?}", self.stopwatch.elapsed());
    }

    fn lose(&mut self, detonated: Coord2) {
        self.state = GameState::Lose;
        self.detonated = Some(detonated);
        self.stopwatch.stop();
        log::debug!(
            "Lost at {:?}, {} cells exposed",
            detonated,
            self.loss_markers().count()
        );
    }

    fn visible_unchecked(&self, coords: Coord2) -> VisibleCell {
        self.field[coords].visible(self.detonated == Some(coords), self.state)
    }

    fn check_accepting(&self) -> Result<()> {
        if self.paused {
            Err(GameError::Paused)
        } else if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

fn placer_for(config: &GameConfig) -> RandomPlacer {
    config
        .seed
        .map(RandomPlacer::new)
        .unwrap_or_else(RandomPlacer::from_entropy)
}
