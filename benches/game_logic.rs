use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_blocks::core::{Board, GameState, Piece};
use falling_blocks::term::{FrameBuffer, GameView, Viewport};
use falling_blocks::types::{Color, PieceKind, TICK_MS};

fn bench_update(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_update_16ms", |b| {
        b.iter(|| {
            state.update(black_box(TICK_MS));
            state.drain_events().for_each(drop);
            if state.game_over() {
                state.reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let gray = Some(Color::new(128, 128, 128));
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, gray);
                }
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_collide(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::T);
    piece.y = 10;

    c.bench_function("collide", |b| b.iter(|| black_box(board.collide(black_box(&piece)))));
}

fn bench_move_piece(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dir = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(dir) {
                dir = -dir;
            }
        })
    });
}

fn bench_rotate_piece(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.drop_piece();

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            state.rotate_piece(true);
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            state.hard_drop();
            if state.game_over() {
                state.reset();
            }
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_collide,
    bench_move_piece,
    bench_rotate_piece,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
