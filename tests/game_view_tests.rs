//! GameView integration tests - rendering into an off-screen framebuffer

use blockfall::core::GameState;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{BestScores, InputEvent};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|cell| cell.ch).unwrap_or(' '))
        .collect()
}

fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
}

#[test]
fn test_start_screen_shows_title_and_prompt() {
    let state = GameState::new(3, BestScores::default());
    let fb = GameView::default().render(&state, Viewport::new(80, 24));

    assert!(screen_contains(&fb, "BLOCKFALL"));
    assert!(screen_contains(&fb, "space to start"));
    // No side panel until the game starts.
    assert!(!screen_contains(&fb, "Current:"));
}

#[test]
fn test_running_game_shows_scores_and_previews() {
    let mut state = GameState::new(3, BestScores { score: 120, lines: 12 });
    state.handle_event(InputEvent::Start);
    let fb = GameView::default().render(&state, Viewport::new(80, 24));

    assert!(!screen_contains(&fb, "space to start"));
    assert!(screen_contains(&fb, "Current: 0"));
    assert!(screen_contains(&fb, "Cleared: 0"));
    assert!(screen_contains(&fb, "Best score: 120"));
    assert!(screen_contains(&fb, "Best lines: 12"));
    assert!(screen_contains(&fb, "Next:"));
    assert!(!screen_contains(&fb, "GAME OVER"));
}

#[test]
fn test_board_border_is_drawn() {
    let state = GameState::new(3, BestScores::default());
    let fb = GameView::default().render(&state, Viewport::new(80, 24));

    assert!(screen_contains(&fb, "┌"));
    assert!(screen_contains(&fb, "┘"));
    // 10 columns at 2 terminal cells each, inside the frame.
    assert!(screen_contains(&fb, &"·".repeat(20)));
}

#[test]
fn test_game_over_overlay() {
    let mut state = GameState::new(1234, BestScores::default());
    state.handle_event(InputEvent::Start);
    state.handle_event(InputEvent::SoftDropStart);
    let mut guard = 0u32;
    while !state.game_over() {
        state.tick();
        guard += 1;
        assert!(guard < 1_000_000);
    }

    let fb = GameView::default().render(&state, Viewport::new(80, 24));
    assert!(screen_contains(&fb, "GAME OVER"));
}

#[test]
fn test_render_survives_tiny_viewport() {
    let mut state = GameState::new(3, BestScores::default());
    state.handle_event(InputEvent::Start);

    // Out-of-bounds writes are dropped, never panic.
    let fb = GameView::default().render(&state, Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}
