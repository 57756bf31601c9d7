use blockfall::core::{GameState, Tetromino};
use blockfall::term::{encode_full_into, FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // cell_w=2, cell_h=1: 20x20 board plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_locked_piece_two_chars_wide() {
    let mut game = GameState::new(1);
    game.replace_current(Tetromino::new(PieceKind::O));
    let snap = game.tick(16, &[GameAction::MoveLeft, GameAction::HardDrop]);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O locked at columns 4-5 of rows 18-19; inside border origin is (1,1).
    let color = PieceKind::O.color();
    for (cx, cy) in [(4u16, 18u16), (5, 18), (4, 19), (5, 19)] {
        for dx in 0..2 {
            let cell = fb.get(1 + cx * 2 + dx, 1 + cy).unwrap();
            assert_eq!(cell.ch, '█');
            assert_eq!(cell.style.fg, color);
        }
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let view = GameView::default();
    let wide = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(wide.contains("SCORE"));
    assert!(wide.contains("1234"));
    assert!(wide.contains("NEXT"));

    let narrow = screen_text(&view.render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_after_top_out() {
    let mut game = GameState::new(8);
    while !game.game_over() {
        game.tick(16, &[GameAction::HardDrop]);
    }
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Q quit"));
}

#[test]
fn term_full_encode_of_title_screen() {
    let mut fb = FrameBuffer::new(0, 0);
    GameView::default().render_title_into(Viewport::new(80, 24), &mut fb);

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let bytes = String::from_utf8_lossy(&out);
    assert!(bytes.contains("BLOCKFALL"));
    assert!(bytes.contains("Press ENTER to play"));
}
