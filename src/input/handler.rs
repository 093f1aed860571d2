//! Keyboard input handler for terminal environments.
//!
//! Maps crossterm key events onto the game's discrete input events. The only
//! held key is soft drop; terminals that do not emit key release events get a
//! timeout-based auto-release so a single tap of Down cannot leave soft drop
//! stuck on.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputEvent;

// Auto-release window for the held soft-drop key. Terminals with real release
// events end the hold earlier through `handle_key_release`.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// True for keys that should exit the program entirely.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}

/// Tracks the soft-drop hold across press/release/timeout.
#[derive(Debug, Clone)]
pub struct InputHandler {
    down_held: bool,
    last_down_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            down_held: false,
            last_down_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Translate a key press into an input event.
    ///
    /// Unrecognized keys yield nothing. Repeated Down presses while the hold
    /// is active refresh the release timeout but emit no duplicate event.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<InputEvent> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputEvent::Rotate),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputEvent::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputEvent::MoveRight),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.last_down_time = Instant::now();
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    Some(InputEvent::SoftDropStart)
                }
            }
            KeyCode::Char(' ') => Some(InputEvent::Start),
            _ => None,
        }
    }

    /// Translate a key release into an input event (soft drop only).
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<InputEvent> {
        match code {
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') if self.down_held => {
                self.down_held = false;
                Some(InputEvent::SoftDropEnd)
            }
            _ => None,
        }
    }

    /// Per-tick update: synthesize a release once the timeout elapses
    /// without a repeat press.
    pub fn update(&mut self) -> Option<InputEvent> {
        if !self.down_held {
            return None;
        }
        let since_press = self.last_down_time.elapsed().as_millis() as u32;
        if since_press > self.key_release_timeout_ms {
            self.down_held = false;
            Some(InputEvent::SoftDropEnd)
        } else {
            None
        }
    }

    pub fn down_held(&self) -> bool {
        self.down_held
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
