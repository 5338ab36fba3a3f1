//! Game state tests - gravity, locking, line clears, spawn checks

use blockfall::core::{Board, GameState, RandomSource, SequenceSource, Tetromino, TickOutcome};
use blockfall::types::{Color, GameAction, PieceKind, SPAWN_X, SPAWN_Y};

/// Tick until the active piece locks, returning the state after the lock.
fn tick_until_lock(mut state: GameState, source: &mut SequenceSource) -> (GameState, usize) {
    for _ in 0..64 {
        let (next, outcome) = state.gravity_step(source);
        state = next;
        if let TickOutcome::Locked { lines_cleared } = outcome {
            return (state, lines_cleared);
        }
    }
    panic!("piece never locked");
}

/// Board whose bottom `rows` rows are full except for column `gap`.
fn board_with_gap(rows: usize, gap: i8) -> Board {
    let mut board = Board::new();
    for y in (20 - rows as i8)..20 {
        for x in 0..10 {
            if x != gap {
                board.set(x, y, Some(Color::Red));
            }
        }
    }
    board
}

#[test]
fn test_o_piece_falls_to_floor_in_21_ticks() {
    let mut source = SequenceSource::repeat(PieceKind::O);
    let mut state = GameState::with_board(Board::new(), PieceKind::O);
    assert_eq!(state.active(), Tetromino::at(PieceKind::O, 0, 3, -2));

    for tick in 0..20 {
        let (next, outcome) = state.gravity_step(&mut source);
        assert_eq!(outcome, TickOutcome::Fell, "tick {}", tick);
        state = next;
    }
    assert_eq!(state.active().y, 18);

    let (state, outcome) = state.gravity_step(&mut source);
    assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 0 });

    let board = state.board();
    for (x, y) in [(3, 18), (4, 18), (3, 19), (4, 19)] {
        assert_eq!(board.get(x, y), Some(Some(Color::Yellow)), "({}, {})", x, y);
    }
    assert_eq!(board.filled_count(), 4);
    assert_eq!(state.active(), Tetromino::new(PieceKind::O));
    assert_eq!((state.active().x, state.active().y), (SPAWN_X, SPAWN_Y));
    assert_eq!(state.score(), 0);
    assert!(!state.game_over());
}

#[test]
fn test_vertical_i_completes_bottom_row() {
    let mut source = SequenceSource::repeat(PieceKind::T);
    let board = board_with_gap(1, 5);
    let state = GameState::with_board(board, PieceKind::I);
    assert!(!state.game_over());

    let state = state
        .rotate()
        .move_horizontal(1)
        .move_horizontal(1);
    assert_eq!(state.active(), Tetromino::at(PieceKind::I, 1, 5, -2));

    let (state, lines_cleared) = tick_until_lock(state, &mut source);
    assert_eq!(lines_cleared, 1);
    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);

    // The I's three upper minos shifted down one row; everything else is gone.
    let board = state.board();
    assert_eq!(board.filled_count(), 3);
    for y in 17..20 {
        assert_eq!(board.get(5, y), Some(Some(Color::Cyan)));
    }
    for x in 0..10 {
        assert!(!board.is_occupied(x, 0));
    }
    assert_eq!(state.active(), Tetromino::new(PieceKind::T));
}

#[test]
fn test_spawn_fails_on_occupied_entry() {
    let mut board = Board::new();
    board.set(3, 0, Some(Color::Green));
    board.set(4, 0, Some(Color::Green));

    // Scripted position low on the board, away from the blocked cells.
    let state = GameState::with_active(board, Tetromino::at(PieceKind::T, 0, 0, 10));
    assert!(!state.game_over());

    let mut source = SequenceSource::repeat(PieceKind::O);
    let next = state.spawn_next(&mut source);

    assert!(next.game_over());
    assert_eq!(next.board(), state.board());
    assert_eq!(next.score(), state.score());
    assert_eq!(next.active().kind, PieceKind::O);
}

#[test]
fn test_score_is_flat_100_per_line() {
    for k in 0..=4usize {
        let mut source = SequenceSource::repeat(PieceKind::O);
        let state = GameState::with_active(
            board_with_gap(k, 0),
            Tetromino::at(PieceKind::I, 1, 0, -2),
        );

        let (state, lines_cleared) = tick_until_lock(state, &mut source);
        assert_eq!(lines_cleared, k);
        assert_eq!(state.score(), 100 * k as u32);
        assert_eq!(state.lines(), k as u32);
    }
}

#[test]
fn test_score_accumulates_across_locks() {
    // Row 19 misses column 0; row 18 misses columns 0 and 9.
    let mut board = board_with_gap(2, 0);
    board.set(9, 18, None);

    let mut source = SequenceSource::repeat(PieceKind::I);
    let state = GameState::with_active(board, Tetromino::at(PieceKind::I, 1, 0, -2));
    let (state, cleared) = tick_until_lock(state, &mut source);
    assert_eq!(cleared, 1);
    assert_eq!(state.score(), 100);

    // The spawned I stands up and walks over to column 9.
    let mut state = state.rotate();
    for _ in 0..6 {
        state = state.move_horizontal(1);
    }
    assert_eq!(state.active(), Tetromino::at(PieceKind::I, 1, 9, -2));

    let (state, cleared) = tick_until_lock(state, &mut source);
    assert_eq!(cleared, 1);
    assert_eq!(state.score(), 200);
    assert_eq!(state.lines(), 2);
}

#[test]
fn test_rejected_operations_are_identity() {
    // O pressed into the bottom-left corner.
    let state = GameState::with_active(Board::new(), Tetromino::at(PieceKind::O, 0, 0, 18));
    assert_eq!(state.move_horizontal(-1), state);
    assert_eq!(state.rotate(), state);

    // I standing against the right wall.
    let state = GameState::with_active(Board::new(), Tetromino::at(PieceKind::I, 1, 9, 4));
    assert_eq!(state.move_horizontal(1), state);
    // Flattening would poke three cells past the wall.
    assert_eq!(state.rotate(), state);
}

#[test]
fn test_accepted_moves_only_touch_active_piece() {
    let mut source = RandomSource::seeded(2024);
    let mut state = GameState::new(&mut source);
    let actions = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::MoveRight,
        GameAction::RotateCw,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
    ];

    for step in 0..400 {
        let action = actions[step % actions.len()];
        let next = state.apply_action(action, &mut source);
        assert_eq!(next.board(), state.board());
        assert_eq!(next.score(), state.score());
        assert!(next.active().fits(next.board()));

        state = next.gravity_tick(&mut source);
        if state.game_over() {
            break;
        }
    }
}

#[test]
fn test_game_over_absorbs_everything() {
    let mut source = RandomSource::seeded(99);
    let mut state = GameState::new(&mut source);
    for _ in 0..10_000 {
        if state.game_over() {
            break;
        }
        state = state.gravity_tick(&mut source);
    }
    assert!(state.game_over(), "stacking in the middle must top out");

    for action in GameAction::ALL {
        assert_eq!(state.apply_action(action, &mut source), state);
    }
    assert_eq!(state.move_horizontal(1), state);
    assert_eq!(state.rotate(), state);
    assert_eq!(state.gravity_step(&mut source), (state, TickOutcome::Ignored));
    assert_eq!(state.spawn_next(&mut source), state);
    assert_eq!(state.spawn_next(&mut source).spawn_next(&mut source), state);
}

#[test]
fn test_operations_do_not_modify_receiver() {
    let mut source = SequenceSource::new([PieceKind::L, PieceKind::J]);
    let state = GameState::new(&mut source);
    let copy = state;

    let _ = state.move_horizontal(1);
    let _ = state.rotate();
    let _ = state.gravity_tick(&mut source);
    let _ = state.spawn_next(&mut source);

    assert_eq!(state, copy);
}

#[test]
fn test_soft_drop_matches_gravity_tick() {
    let state = GameState::with_board(Board::new(), PieceKind::Z);
    let mut a = SequenceSource::repeat(PieceKind::S);
    let mut b = SequenceSource::repeat(PieceKind::S);

    let mut dropped = state;
    let mut ticked = state;
    for _ in 0..30 {
        dropped = dropped.apply_action(GameAction::SoftDrop, &mut a);
        ticked = ticked.gravity_tick(&mut b);
        assert_eq!(dropped, ticked);
    }
}
