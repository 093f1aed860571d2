//! GameState integration tests - whole sessions through the public API

use blockfall::core::GameState;
use blockfall::types::{BestScores, InputEvent, SPAWN_COL, SPAWN_ROW};

fn started(seed: u32) -> GameState {
    let mut state = GameState::new(seed, BestScores::default());
    state.handle_event(InputEvent::Start);
    state
}

#[test]
fn test_nothing_moves_before_start() {
    let mut state = GameState::new(42, BestScores::default());
    let before = *state.active();

    for _ in 0..120 {
        assert!(!state.tick());
    }
    state.handle_event(InputEvent::MoveRight);
    state.handle_event(InputEvent::Rotate);
    assert_eq!(*state.active(), before);
}

#[test]
fn test_soft_drop_accelerates_descent() {
    // Same seed, same piece sequence; only the soft-drop flag differs.
    let mut normal = started(7);
    let mut soft = started(7);
    soft.handle_event(InputEvent::SoftDropStart);

    for _ in 0..60 {
        normal.tick();
        soft.tick();
    }

    // One gravity descent vs four soft-drop descents.
    assert_eq!(normal.active().row, SPAWN_ROW + 1);
    assert_eq!(soft.active().row, SPAWN_ROW + 4);
}

#[test]
fn test_first_lock_settles_four_cells_and_promotes_queue() {
    let mut state = started(99);
    state.handle_event(InputEvent::SoftDropStart);
    let queued = *state.next_piece();

    // Run until the first piece locks; the respawn is visible as the
    // anchor jumping back above the grid.
    let mut prev_row = state.active().row;
    for _ in 0..10_000 {
        state.tick();
        if state.active().row < prev_row {
            break;
        }
        prev_row = state.active().row;
    }

    let settled = state
        .board()
        .cells()
        .iter()
        .filter(|cell| cell.is_some())
        .count();
    assert_eq!(settled, 4);
    assert_eq!(state.active().kind, queued.kind);
    assert_eq!(state.active().col, SPAWN_COL);
    assert_eq!(state.active().row, SPAWN_ROW);
    assert!(!state.game_over());
}

#[test]
fn test_unattended_session_ends_in_game_over() {
    let mut state = started(1234);
    state.handle_event(InputEvent::SoftDropStart);

    let mut ticks = 0u32;
    while !state.game_over() {
        state.tick();
        // Score and line count move in lockstep.
        assert_eq!(state.score(), state.lines() * 10);

        ticks += 1;
        assert!(ticks < 1_000_000, "session did not top out");
    }

    // Unsteered pieces all stack in the spawn columns, so no row ever
    // completes and no record falls.
    assert_eq!(state.score(), 0);
    assert_eq!(state.take_best_update(), None);

    // The session is halted for good.
    assert!(!state.tick());
    let piece = *state.active();
    state.handle_event(InputEvent::MoveLeft);
    state.handle_event(InputEvent::Rotate);
    assert_eq!(*state.active(), piece);
}

#[test]
fn test_start_is_idempotent_after_game_over() {
    let mut state = started(1234);
    state.handle_event(InputEvent::SoftDropStart);
    while !state.game_over() {
        state.tick();
    }

    // Start does not resurrect a finished session.
    state.handle_event(InputEvent::Start);
    assert!(state.game_over());
    assert!(!state.tick());
}
