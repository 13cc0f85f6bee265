use blockfall::core::{FrameSnapshot, GameEngine, Menu, MenuChoice};
use blockfall::term::{encode_diff_into, piece_color, FrameBuffer, GameView, Viewport};
use blockfall::types::{EngineState, PieceKind};

fn playing_snapshot() -> FrameSnapshot {
    FrameSnapshot {
        state: EngineState::Playing,
        ..FrameSnapshot::default()
    }
}

#[test]
fn term_view_renders_border_corners() {
    // With cell_w=2 and cell_h=1 the board is 20x20, plus the border 22x22.
    let fb = GameView::default().render(&playing_snapshot(), &Menu::main_menu(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut snap = playing_snapshot();
    snap.board[19][0] = PieceKind::J.id();

    let fb = GameView::default().render(&snap, &Menu::main_menu(), Viewport::new(22, 22));
    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::J));
    }
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_skips_active_cells_above_the_board() {
    let mut engine = GameEngine::new(3);
    engine.on_menu_choice(MenuChoice::Play, 2.0);
    engine.set_active(blockfall::core::ActivePiece {
        kind: PieceKind::I,
        rotation: blockfall::types::Rotation::East,
        x: 0,
        y: 0,
    });

    let fb = GameView::default().render(&engine.snapshot(), engine.menu(), Viewport::new(22, 22));
    // Cells at y = -2 and -1 are hidden; y = 0 and 1 are drawn in column 0.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1, 2).unwrap().ch, '█');
    assert_ne!(fb.get(1, 3).unwrap().ch, '█');
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_menu_follows_speed_selection() {
    let mut engine = GameEngine::new(1);
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let before = view.render(&engine.snapshot(), engine.menu(), vp);
    engine.on_key_down(blockfall::types::Key::MenuDown, false).unwrap();
    engine.on_key_down(blockfall::types::Key::MenuDown, false).unwrap();
    engine.on_key_down(blockfall::types::Key::MenuRight, false).unwrap();
    let after = view.render(&engine.snapshot(), engine.menu(), vp);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert_ne!(before, after);
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let view = GameView::default();
    let snap = playing_snapshot();
    let menu = Menu::main_menu();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, &menu, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    view.render_into(&snap, &menu, Viewport::new(30, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 22));
}
