use seabattle::{
    Game, GameError, ShipId, Stage, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_ROSTER, SHIP_TYPES,
};

fn ship_cells(game: &Game, id: ShipId) -> Vec<(usize, usize)> {
    let board = game.board();
    let mut cells = Vec::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            if board.cell(x, y).unwrap().ship == Some(id) {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn test_new_game_is_in_progress() {
    let game = Game::from_seed(42).unwrap();
    assert_eq!(game.stage(), Stage::InProgress);
    assert!(game.ship_statuses().iter().all(|s| !s.is_down));
}

#[test]
fn test_sinking_requires_every_cell() {
    let mut game = Game::from_seed(42).unwrap();
    let target = game.ship_statuses()[0].id;
    let cells = ship_cells(&game, target);

    for &(x, y) in &cells[..cells.len() - 1] {
        game.shoot(x, y).unwrap();
    }
    assert!(!game.ship_statuses()[0].is_down, "one cell still afloat");

    let (x, y) = cells[cells.len() - 1];
    game.shoot(x, y).unwrap();
    assert!(game.ship_statuses()[0].is_down);
}

#[test]
fn test_repeat_shots_do_not_double_count() {
    let mut game = Game::from_seed(42).unwrap();
    let target = game.ship_statuses()[0].id;
    let (x, y) = ship_cells(&game, target)[0];

    game.shoot(x, y).unwrap();
    game.shoot(x, y).unwrap();
    assert_eq!(game.ship_statuses()[0].hits, 1);
}

#[test]
fn test_game_over_iff_all_ships_down() {
    let mut game = Game::from_seed(42).unwrap();
    let ids: Vec<ShipId> = game.ship_statuses().iter().map(|s| s.id).collect();

    // sink every ship but the last; the game must stay in progress
    for &id in &ids[..ids.len() - 1] {
        for (x, y) in ship_cells(&game, id) {
            game.shoot(x, y).unwrap();
        }
    }
    assert_eq!(game.stage(), Stage::InProgress);

    for (x, y) in ship_cells(&game, ids[ids.len() - 1]) {
        game.shoot(x, y).unwrap();
    }
    assert_eq!(game.stage(), Stage::Over);
}

#[test]
fn test_shoot_out_of_bounds_is_recoverable() {
    let mut game = Game::from_seed(42).unwrap();
    assert_eq!(
        game.shoot(BOARD_WIDTH, BOARD_HEIGHT).unwrap_err(),
        GameError::OutOfBounds {
            x: BOARD_WIDTH,
            y: BOARD_HEIGHT
        }
    );
    assert_eq!(game.stage(), Stage::InProgress);
    assert!(game.ship_statuses().iter().all(|s| s.hits == 0));
}

#[test]
fn test_restart_resets_derived_state() {
    let mut game = Game::from_seed(42).unwrap();

    // finish the game, then restart
    let ids: Vec<ShipId> = game.ship_statuses().iter().map(|s| s.id).collect();
    for id in ids {
        for (x, y) in ship_cells(&game, id) {
            game.shoot(x, y).unwrap();
        }
    }
    assert_eq!(game.stage(), Stage::Over);

    game.restart().unwrap();
    assert_eq!(game.stage(), Stage::InProgress);
    assert!(game.ship_statuses().iter().all(|s| s.hits == 0 && !s.is_down));
    let board = game.board();
    for y in 0..board.height() {
        for x in 0..board.width() {
            assert!(!board.cell(x, y).unwrap().hit);
        }
    }
}

#[test]
fn test_summary_reports_fixed_configuration() {
    let game = Game::from_seed(42).unwrap();
    let summary = game.summary();
    assert_eq!(summary.width, BOARD_WIDTH);
    assert_eq!(summary.height, BOARD_HEIGHT);
    assert_eq!(summary.ship_types, &SHIP_TYPES);
    assert_eq!(summary.stage, Stage::InProgress);
    assert_eq!(game.ship_statuses().len(), DEFAULT_ROSTER.len());
}

#[test]
fn test_same_seed_reproduces_game() {
    let game1 = Game::from_seed(9).unwrap();
    let game2 = Game::from_seed(9).unwrap();
    assert_eq!(game1.board(), game2.board());
}
