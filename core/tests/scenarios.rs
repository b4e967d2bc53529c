//! Whole games played through the public API.

use minefield_core::*;

fn fixed_game(size: Coord2, mines: &[Coord2]) -> Game<ManualClock> {
    let config = GameConfig::new_unchecked(size, mines.len() as CellCount);
    Game::with_placer(config, FixedPlacer::new(mines), ManualClock::new()).unwrap()
}

#[test]
fn single_cell_board_has_no_room_for_mines() {
    let mut game = Game::new(GameConfig::new_unchecked((1, 1), 1)).unwrap();

    assert_eq!(game.on_primary((0, 0)).unwrap(), RevealOutcome::Won);
    assert_eq!(game.total_mines(), 0);
    assert_eq!(game.mines_left(), 0);
    assert_eq!(game.state(), GameState::Win);
}

#[test]
fn single_cell_board_without_safe_zone_keeps_its_mine() {
    let mut game = Game::new(GameConfig::new_unchecked((1, 1), 1)).unwrap();

    assert_eq!(game.place_mines(None).unwrap(), 1);
    assert_eq!(game.on_primary((0, 0)).unwrap(), RevealOutcome::HitMine);
    assert_eq!(game.visible_at((0, 0)).unwrap(), VisibleCell::Detonated);
}

#[test]
fn first_click_in_corner_is_always_clear() {
    for seed in 0..200 {
        let config = GameConfig::new((10, 10), 10).unwrap().with_seed(seed);
        let mut game = Game::new(config).unwrap();

        let outcome = game.on_primary((0, 0)).unwrap();

        assert_ne!(outcome, RevealOutcome::HitMine, "seed {}", seed);
        assert_eq!(game.total_mines(), 10);
        for coords in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert!(!game.cell_at(coords).unwrap().is_mine(), "seed {}", seed);
        }
        assert_eq!(game.visible_at((0, 0)).unwrap(), VisibleCell::Revealed(0));
    }
}

#[test]
fn same_seed_same_board() {
    let config = GameConfig::expert().with_seed(1234);
    let mut a = Game::new(config).unwrap();
    let mut b = Game::new(config).unwrap();

    a.on_primary((15, 8)).unwrap();
    b.on_primary((15, 8)).unwrap();

    assert_eq!(a.field(), b.field());
}

#[test]
fn flagged_cell_ignores_reveal_until_unflagged() {
    let mut game = fixed_game((5, 1), &[(4, 0)]);
    game.place_mines(None).unwrap();

    game.on_secondary((1, 0)).unwrap();
    assert_eq!(game.on_primary((1, 0)).unwrap(), RevealOutcome::NoChange);
    assert_eq!(game.visible_at((1, 0)).unwrap(), VisibleCell::Flagged);
    assert_eq!(game.revealed_count(), 0);

    game.on_secondary((1, 0)).unwrap();
    assert_eq!(game.on_primary((1, 0)).unwrap(), RevealOutcome::Won);
}

#[test]
fn flood_stops_at_flags() {
    let mut game = fixed_game((5, 1), &[(4, 0)]);
    game.place_mines(None).unwrap();

    game.on_secondary((1, 0)).unwrap();
    assert_eq!(game.on_primary((0, 0)).unwrap(), RevealOutcome::Revealed);
    assert_eq!(game.revealed_count(), 1);
}

#[test]
fn win_needs_every_safe_cell() {
    let mut game = fixed_game((5, 1), &[(2, 0)]);
    game.place_mines(None).unwrap();

    assert_eq!(game.on_primary((0, 0)).unwrap(), RevealOutcome::Revealed);
    assert_eq!(game.revealed_count(), 2);
    assert_eq!(game.on_primary((3, 0)).unwrap(), RevealOutcome::Revealed);
    assert_eq!(game.revealed_count(), 3);
    assert_eq!(game.state(), GameState::Playing);

    assert_eq!(game.on_primary((4, 0)).unwrap(), RevealOutcome::Won);
    assert_eq!(game.revealed_count(), 4);
    assert_eq!(game.state(), GameState::Win);
}

#[test]
fn losing_exposes_mines_and_wrong_flags() {
    let mines = [(0, 0), (4, 0), (0, 4), (4, 4)];
    let mut game = fixed_game((5, 5), &mines);
    game.place_mines(None).unwrap();

    game.on_secondary((4, 4)).unwrap();
    game.on_secondary((2, 2)).unwrap();
    game.on_primary((1, 0)).unwrap();

    assert_eq!(game.on_primary((0, 4)).unwrap(), RevealOutcome::HitMine);
    assert_eq!(game.state(), GameState::Lose);
    assert_eq!(game.detonated(), Some((0, 4)));

    assert_eq!(game.visible_at((0, 4)).unwrap(), VisibleCell::Detonated);
    assert_eq!(game.visible_at((0, 0)).unwrap(), VisibleCell::Mine);
    assert_eq!(game.visible_at((4, 0)).unwrap(), VisibleCell::Mine);
    assert_eq!(game.visible_at((4, 4)).unwrap(), VisibleCell::Flagged);
    assert_eq!(game.visible_at((2, 2)).unwrap(), VisibleCell::WrongFlag);
    assert_eq!(game.visible_at((1, 0)).unwrap(), VisibleCell::Revealed(1));

    let mut markers: Vec<_> = game.loss_markers().collect();
    markers.sort_by_key(|&(coords, _)| coords);
    assert_eq!(
        markers,
        vec![
            ((0, 0), VisibleCell::Mine),
            ((2, 2), VisibleCell::WrongFlag),
            ((4, 0), VisibleCell::Mine),
        ]
    );

    // the sweep is visual only
    assert!(!game.cell_at((0, 0)).unwrap().is_revealed());
    assert!(game.cell_at((2, 2)).unwrap().is_flagged());
    assert_eq!(game.revealed_count(), 2);
}

#[test]
fn restart_with_new_settings() {
    let mut game = Game::new(GameConfig::beginner().with_seed(9)).unwrap();
    game.on_primary((4, 4)).unwrap();

    game.reconfigure(GameConfig::new((20, 10), 30).unwrap().with_seed(10))
        .unwrap();
    assert_eq!(game.size(), (9, 9));

    game.restart();
    assert_eq!(game.size(), (20, 10));
    assert_eq!(game.state(), GameState::Uninitialized);
    assert!(game.iter_visible().all(|(_, cell)| cell == VisibleCell::Unrevealed));

    game.on_primary((0, 0)).unwrap();
    assert_eq!(game.total_mines(), 30);
}
