use std::io::{self, Write};

use minefield_core::*;

pub const fn glyph(cell: VisibleCell) -> char {
    use VisibleCell::*;
    match cell {
        Unrevealed => '#',
        Revealed(0) => '.',
        Revealed(n @ 1..=8) => (b'0' + n) as char,
        Revealed(_) => '?',
        Flagged => 'F',
        Detonated => 'X',
        Mine => '*',
        WrongFlag => 'x',
    }
}

/// Board with column and row numbers, then a status line.
pub fn write_game<C: Clock>(out: &mut impl Write, game: &Game<C>) -> io::Result<()> {
    let (width, _) = game.size();

    write!(out, "    ")?;
    for x in 0..width {
        write!(out, "{:>3}", x)?;
    }
    writeln!(out)?;

    for (coords, cell) in game.iter_visible() {
        if coords.0 == 0 {
            write!(out, "{:>3} ", coords.1)?;
        }
        write!(out, "{:>3}", glyph(cell))?;
        if coords.0 + 1 == width {
            writeln!(out)?;
        }
    }

    let status = match (game.state(), game.is_paused()) {
        (_, true) => "paused",
        (GameState::Uninitialized, _) => "ready",
        (GameState::Playing, _) => "playing",
        (GameState::Win, _) => "won",
        (GameState::Lose, _) => "lost",
    };
    writeln!(
        out,
        "mines left: {}  time: {}s  {}",
        game.mines_left(),
        game.elapsed().as_secs(),
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_markers() {
        assert_eq!(glyph(VisibleCell::Revealed(0)), '.');
        assert_eq!(glyph(VisibleCell::Revealed(3)), '3');
        assert_eq!(glyph(VisibleCell::Detonated), 'X');
        assert_eq!(glyph(VisibleCell::WrongFlag), 'x');
    }

    #[test]
    fn writes_one_row_per_line() {
        let config = GameConfig::new_unchecked((3, 2), 1);
        let game =
            Game::with_placer(config, FixedPlacer::new([(2, 1)]), ManualClock::new()).unwrap();

        let mut out = Vec::new();
        write_game(&mut out, &game).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  0   #  #  #");
        assert_eq!(lines[3], "mines left: 1  time: 0s  ready");
    }
}
