use tui_pacman::core::GameState;
use tui_pacman::term::{GameView, SpriteSheet, Viewport, DEFAULT_SHEET};
use tui_pacman::types::{GameAction, GridConfig, BLOCK_SIZE};

fn slice(row: &str, start: usize, len: usize) -> String {
    row.chars().skip(start).take(len).collect()
}

fn view_for(state: &GameState) -> GameView {
    GameView::new(*state.grid(), SpriteSheet::load(DEFAULT_SHEET).unwrap())
}

#[test]
fn default_maze_fills_54_by_21_cells() {
    let state = GameState::new(1).unwrap();
    let view = view_for(&state);
    assert_eq!(view.board_size(), (54, 21));

    let fb = view.render(&state.render_batch(), Viewport::new(54, 22));
    // Top row is solid wall.
    assert_eq!(fb.row_text(0), "█".repeat(54));
    // Player spawn at column 12 of row 1.
    assert_eq!(slice(&fb.row_text(1), 24, 2), "()");
    assert!(fb.row_text(21).starts_with("DOTS "));
}

#[test]
fn eaten_dot_is_not_drawn() {
    let rows = ["P.", "##"];
    let grid = GridConfig::with_grid(2, 2, BLOCK_SIZE);
    let mut state = GameState::with_config(&rows, grid, 1).unwrap();
    let view = view_for(&state);

    // 4x2 board plus status line, centered horizontally in 20 columns.
    let vp = Viewport::new(20, 3);
    let before = view.render(&state.render_batch(), vp);
    assert_eq!(slice(&before.row_text(0), 8, 4), "()··");

    state.tick(&[GameAction::MoveRight]);
    let after = view.render(&state.render_batch(), vp);
    assert_eq!(slice(&after.row_text(0), 8, 4), "  ()");
    assert!(after.row_text(2).trim_start().starts_with("DOTS 0"));
}

#[test]
fn small_viewport_clips_without_panicking() {
    let state = GameState::new(1).unwrap();
    let view = view_for(&state);
    let fb = view.render(&state.render_batch(), Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
}
