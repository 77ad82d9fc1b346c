use falling_blocks::core::{GameState, PieceSource};
use falling_blocks::term::{AnchorY, FrameBuffer, GameView, Hud, Viewport};
use falling_blocks::types::{GameEvent, PieceKind};

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

    // With cell_w=2 and cell_h=1 the board is 20x20, plus border 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut state = GameState::with_source(PieceSource::sequence(vec![PieceKind::I]));
    state.board_mut().set(0, 19, Some(PieceKind::Z.color()));
    let snap = state.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_ne!(fb.get(x0, y0).unwrap().style.fg, fb.get(x0 + 1, y0).unwrap().style.fg);
}

#[test]
fn term_view_draws_current_and_ghost() {
    let state = GameState::with_source(PieceSource::sequence(vec![PieceKind::O]));
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));

    // O at columns 3..=4: terminal columns 7..=10, rows 1..=2.
    assert_eq!(fb.get(7, 1).unwrap().ch, '█');
    assert_eq!(fb.get(10, 2).unwrap().ch, '█');
    // Ghost at board rows 18..=19.
    assert_eq!(fb.get(7, 19).unwrap().ch, '░');
    assert_eq!(fb.get(10, 20).unwrap().ch, '░');
}

#[test]
fn term_view_hides_ghost_when_toggled_off() {
    let mut state = GameState::with_source(PieceSource::sequence(vec![PieceKind::O]));
    state.toggle_ghost();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains('░'));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut state = GameState::with_source(PieceSource::sequence(vec![
        PieceKind::T,
        PieceKind::I,
        PieceKind::S,
    ]));
    state.hold_piece();
    let snap = state.snapshot();

    let mut hud = Hud::new();
    hud.set_music(true);
    hud.apply(&GameEvent::ScoreChanged {
        score: 1234,
        lines: 10,
    });

    let fb = GameView::default().render_with_hud(&snap, Some(&hud), Viewport::new(60, 22));
    let all = screen_text(&fb);
    for label in ["SCORE", "1234", "LINES", "10", "HOLD", "NEXT", "GHOST ON", "MUSIC ON"] {
        assert!(all.contains(label), "missing {}", label);
    }
}

#[test]
fn term_view_shows_line_clear_flash() {
    let snap = GameState::new(1).snapshot();
    let mut hud = Hud::new();
    hud.apply(&GameEvent::Locked { lines_cleared: 3 });

    let fb = GameView::default().render_with_hud(&snap, Some(&hud), Viewport::new(60, 22));
    assert!(screen_text(&fb).contains("+300"));
}

#[test]
fn term_view_game_over_overlay_shows_final_score() {
    let mut snap = GameState::new(1).snapshot();
    snap.game_over = true;
    snap.score = 700;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("SCORE 700"));
    assert!(all.contains("R to restart"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    // Free row below the frame carries the key help.
    assert!(fb.row_text(22).contains("move"));
}
