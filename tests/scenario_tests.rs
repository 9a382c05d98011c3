//! End-to-end checks of the tick rules on small hand-written mazes.

use tui_pacman::core::{GameState, MazeFormatError, DEFAULT_MAZE};
use tui_pacman::types::{
    Direction, EntityKind, GameAction, GridConfig, Position, TickStatus, BLOCK_SIZE,
};

fn session(rows: &[&str], seed: u64) -> GameState {
    let grid = GridConfig::with_grid(rows[0].len() as i32, rows.len() as i32, BLOCK_SIZE);
    GameState::with_config(rows, grid, seed).unwrap()
}

#[test]
fn player_next_to_wall_stays_put() {
    let mut state = session(&["#.P#"], 1);
    let start = state.player().pos;
    assert_eq!(start, Position::new(64, 0));

    state.tick(&[GameAction::MoveRight]);
    assert_eq!(state.player().pos, start);

    state.tick(&[GameAction::MoveLeft]);
    assert_eq!(state.player().pos, Position::new(32, 0));
    assert!(!state.dots()[0].alive());
}

#[test]
fn eaten_dot_disappears_from_render_batch() {
    let mut state = session(&["....", "....", ".P..", "...."], 1);
    let dot = Position::new(64, 64);
    assert!(state.render_batch().contains(EntityKind::Dot, dot));

    state.tick(&[GameAction::MoveRight]);
    assert_eq!(state.player().pos, dot);

    let eaten = state
        .dots()
        .iter()
        .find(|d| d.pos() == dot)
        .expect("dot exists");
    assert!(!eaten.alive());
    assert!(!state.render_batch().contains(EntityKind::Dot, dot));
}

#[test]
fn revisiting_eaten_cells_changes_nothing() {
    let mut state = session(&["P.o."], 1);
    for _ in 0..3 {
        state.tick(&[GameAction::MoveRight]);
        state.tick(&[GameAction::MoveRight]);
        state.tick(&[GameAction::MoveLeft]);
        state.tick(&[GameAction::MoveLeft]);
    }
    assert_eq!(state.dots_left(), 1);
    assert_eq!(state.powerups_left(), 0);

    let batch = state.render_batch();
    assert_eq!(batch.count(EntityKind::Dot), 1);
    assert_eq!(batch.count(EntityKind::Powerup), 0);
    assert!(batch.contains(EntityKind::Dot, Position::new(96, 0)));
}

#[test]
fn enemy_turns_away_from_wall_and_moves_one_pixel() {
    for seed in 0..16 {
        let mut state = session(&["...", ".<#", "..."], seed);
        assert_eq!(state.enemies()[0].dir, Direction::Right);

        state.tick(&[]);
        let enemy = state.enemies()[0];
        assert!(
            [Direction::Left, Direction::Up, Direction::Down].contains(&enemy.dir),
            "seed {seed}: {:?}",
            enemy.dir
        );
        let (dx, dy) = enemy.dir.delta();
        assert_eq!(enemy.pos, Position::new(32 + dx, 32 + dy));
    }
}

#[test]
fn mismatched_maze_is_rejected() {
    let short = &DEFAULT_MAZE[..20];
    assert!(matches!(
        GameState::with_config(short, GridConfig::default(), 1),
        Err(MazeFormatError::RowCount {
            expected: 21,
            found: 20
        })
    ));

    let mut rows: Vec<String> = DEFAULT_MAZE.iter().map(|r| r.to_string()).collect();
    rows[4].pop();
    assert!(matches!(
        GameState::with_config(&rows[..], GridConfig::default(), 1),
        Err(MazeFormatError::RowLength {
            row: 4,
            expected: 27,
            found: 26
        })
    ));
}

#[test]
fn walls_hold_for_a_whole_session() {
    let mut state = GameState::new(3).unwrap();
    let walls: Vec<Position> = state.walls().iter().map(|w| w.pos()).collect();
    let moves = [
        GameAction::MoveLeft,
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveUp,
    ];

    for i in 0..600 {
        state.tick(&[moves[i % moves.len()]]);
        if i % 100 == 0 {
            for w in &walls {
                assert!(state.is_wall(*w));
            }
        }
    }
    let after: Vec<Position> = state.walls().iter().map(|w| w.pos()).collect();
    assert_eq!(walls, after);
}

#[test]
fn off_grid_is_always_wall() {
    let state = GameState::new(1).unwrap();
    let grid = *state.grid();
    let (w, h) = (grid.cols() * BLOCK_SIZE, grid.rows() * BLOCK_SIZE);
    for pos in [
        Position::new(-BLOCK_SIZE, 0),
        Position::new(0, -BLOCK_SIZE),
        Position::new(w, 0),
        Position::new(0, h),
        Position::new(-1, -1),
        Position::new(w + 100, h + 100),
    ] {
        assert!(state.is_wall(pos), "{:?}", pos);
    }
}

#[test]
fn enemies_never_sit_on_walls_when_aligned() {
    let mut state = session(
        &[
            "#######",
            "#<...<#",
            "#.#.#.#",
            "#..<..#",
            "#######",
        ],
        11,
    );
    for _ in 0..5_000 {
        state.tick(&[]);
        for e in state.enemies() {
            if e.pos.is_aligned(BLOCK_SIZE) {
                assert!(!state.is_wall(e.pos), "enemy on wall at {:?}", e.pos);
            }
        }
    }
}

#[test]
fn quit_is_terminal() {
    let mut state = GameState::new(1).unwrap();
    assert_eq!(state.tick(&[GameAction::Quit, GameAction::MoveLeft]), TickStatus::Quit);
    assert_eq!(state.tick(&[GameAction::MoveLeft]), TickStatus::Quit);
    assert_eq!(state.player().pos, Position::new(12 * BLOCK_SIZE, BLOCK_SIZE));
}

#[test]
fn render_batch_follows_draw_order() {
    let mut state = GameState::new(5).unwrap();
    state.tick(&[GameAction::MoveLeft]);
    let batch = state.render_batch();

    let rank = |k: EntityKind| match k {
        EntityKind::Player => 0,
        EntityKind::Dot => 1,
        EntityKind::Powerup => 2,
        EntityKind::Enemy => 3,
        EntityKind::Wall => 4,
    };
    let ranks: Vec<u8> = batch.iter().map(|r| rank(r.kind)).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(batch.count(EntityKind::Player), 1);
    assert_eq!(batch.count(EntityKind::Dot), state.dots_left());
}
