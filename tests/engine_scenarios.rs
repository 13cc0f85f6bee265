//! Engine scenarios driven through the public API

use blockfall::core::{ActivePiece, GameEngine, HostSignal, MenuChoice, StepOutcome};
use blockfall::types::{EngineState, Key, PieceKind, Rotation, FIXED_STEP_SECS};

fn playing(speed: f64) -> GameEngine {
    let mut engine = GameEngine::new(12345);
    engine.on_menu_choice(MenuChoice::Play, speed);
    engine
}

/// Step with falling enabled until the active piece locks.
fn drop_until_lock(engine: &mut GameEngine) -> usize {
    for _ in 0..64 {
        if let StepOutcome::Locked { lines_cleared } = engine.step(true) {
            return lines_cleared;
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_o_piece_locks_on_the_floor() {
    let mut engine = playing(2.0);
    engine.set_active(ActivePiece::spawn(PieceKind::O));

    assert_eq!(drop_until_lock(&mut engine), 0);

    let board = engine.board();
    for (x, y) in [(5, 18), (6, 18), (5, 19), (6, 19)] {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(board.occupied_count(), 4);

    let event = engine.take_last_event().unwrap();
    assert_eq!(event.kind, PieceKind::O);
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(engine.stats().pieces_locked, 1);
}

#[test]
fn test_vertical_i_fills_a_well() {
    let mut engine = playing(2.0);
    for x in (0..10).filter(|&x| x != 4) {
        engine.board_mut().set(x, 19, Some(PieceKind::L));
    }
    engine.board_mut().set(0, 18, Some(PieceKind::T));
    let before = engine.board().occupied_count();

    engine.set_active(ActivePiece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: 4,
        y: 5,
    });
    assert_eq!(drop_until_lock(&mut engine), 1);

    let board = engine.board();
    assert_eq!(board.occupied_count(), before + 4 - 10);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    for y in 17..20 {
        assert_eq!(board.get(4, y), Some(Some(PieceKind::I)));
    }
    assert_eq!(engine.stats().lines_cleared, 1);
    assert_eq!(engine.take_last_event().unwrap().lines_cleared, 1);
}

#[test]
fn test_half_second_at_speed_two_falls_once() {
    let mut engine = playing(2.0);
    let start = engine.active().unwrap();

    assert_eq!(engine.advance(0.5, &[]), 30);
    assert_eq!(engine.stats().steps, 1);
    assert_eq!(engine.active().unwrap().y, start.y + 1);
}

#[test]
fn test_split_deltas_match_one_large_delta() {
    let mut a = playing(4.0);
    let mut b = playing(4.0);

    a.advance(1.0, &[]);
    for _ in 0..100 {
        b.advance(0.01, &[]);
    }
    assert_eq!(a.active(), b.active());
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn test_manual_down_postpones_gravity() {
    let mut engine = playing(2.0);
    engine.set_active(ActivePiece {
        y: 3,
        ..ActivePiece::spawn(PieceKind::T)
    });

    engine.advance(FIXED_STEP_SECS * 20.0, &[]);
    engine.on_key_down(Key::Down, false).unwrap();
    assert_eq!(engine.active().unwrap().y, 4);

    // The update counter reaches its threshold but the fall counter was reset.
    engine.advance(FIXED_STEP_SECS * 10.0, &[]);
    assert_eq!(engine.stats().steps, 1);
    assert_eq!(engine.active().unwrap().y, 4);

    engine.advance(FIXED_STEP_SECS * 30.0, &[]);
    assert_eq!(engine.active().unwrap().y, 5);
}

#[test]
fn test_held_down_key_repeats() {
    let mut engine = playing(6.0);
    engine.set_active(ActivePiece {
        y: 2,
        ..ActivePiece::spawn(PieceKind::O)
    });

    // At speed 6 the repeat interval is 4 frames.
    engine.advance(FIXED_STEP_SECS * 8.0, &[Key::Down]);
    assert_eq!(engine.active().unwrap().y, 4);
}

#[test]
fn test_rejected_move_leaves_piece_identical() {
    let mut engine = playing(2.0);
    let piece = ActivePiece {
        x: 1,
        y: 10,
        ..ActivePiece::spawn(PieceKind::T)
    };
    engine.set_active(piece);

    assert!(!engine.move_piece(blockfall::types::Direction::Left));
    assert_eq!(engine.active(), Some(piece));
}

#[test]
fn test_escape_pauses_into_menu() {
    let mut engine = playing(2.0);
    engine.on_key_down(Key::Escape, false).unwrap();
    assert_eq!(engine.state(), EngineState::Menu);

    let frozen = engine.active();
    assert_eq!(engine.advance(2.0, &[]), 0);
    assert_eq!(engine.active(), frozen);

    // Escape in the menu chooses the first item, which starts a new game.
    engine.on_key_down(Key::Escape, false).unwrap();
    assert_eq!(engine.state(), EngineState::Playing);
}

#[test]
fn test_menu_quit_signals_shutdown() {
    let mut engine = GameEngine::new(1);
    for key in [Key::MenuDown, Key::MenuDown, Key::MenuDown] {
        engine.on_key_down(key, false).unwrap();
    }
    assert_eq!(
        engine.on_key_down(Key::MenuConfirm, false),
        Ok(HostSignal::Shutdown)
    );
    assert!(engine.shutdown_requested());
}

#[test]
fn test_repeat_events_do_not_navigate_menu() {
    let mut engine = GameEngine::new(1);
    engine.on_key_down(Key::MenuDown, true).unwrap();
    engine.on_key_down(Key::MenuConfirm, true).unwrap();
    assert_eq!(engine.menu().selection(), 0);
    assert_eq!(engine.state(), EngineState::Menu);
}

#[test]
fn test_snapshot_mirrors_engine() {
    let mut engine = playing(4.0);
    engine.board_mut().set(2, 19, Some(PieceKind::S));
    let snap = engine.snapshot();

    assert_eq!(snap.state, EngineState::Playing);
    assert_eq!(snap.speed, 4.0);
    assert_eq!(snap.board[19][2], PieceKind::S.id());
    assert_eq!(snap.occupied_count(), 1);

    let active = engine.active().unwrap();
    let view = snap.active.unwrap();
    assert_eq!((view.kind, view.x, view.y), (active.kind, active.x, active.y));
    assert_eq!(view.cells, active.cells());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = playing(6.0);
    let mut b = playing(6.0);
    for _ in 0..20 {
        a.advance(0.5, &[Key::Left]);
        b.advance(0.5, &[Key::Left]);
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.active(), b.active());
}
