//! Keyboard input
//!
//! Arrow keys are sampled as held state for the simulation. Letter keys and
//! window close become discrete commands, consumed once per frame.

use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Discrete, screen-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// S on the menu
    Start,
    /// R on the game-over screen
    Restart,
    /// Q anywhere, or closing the window
    Quit,
}

impl Command {
    /// Command bound to a key press, if any
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyS => Some(Command::Start),
            KeyCode::KeyR => Some(Command::Restart),
            KeyCode::KeyQ => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Everything the game needs from input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub held: TickInput,
    pub commands: Vec<Command>,
}

impl FrameInput {
    pub fn quit_requested(&self) -> bool {
        self.commands.contains(&Command::Quit)
    }
}

/// Accumulates window events between frames
#[derive(Debug, Default)]
pub struct InputState {
    held: TickInput,
    commands: Vec<Command>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Auto-repeat presses don't issue commands again.
    pub fn on_key(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        match code {
            KeyCode::ArrowLeft => self.held.left = pressed,
            KeyCode::ArrowRight => self.held.right = pressed,
            KeyCode::ArrowUp => self.held.jump = pressed,
            _ => {
                if pressed && !repeat {
                    if let Some(command) = Command::from_key(code) {
                        self.commands.push(command);
                    }
                }
            }
        }
    }

    pub fn on_close_requested(&mut self) {
        self.commands.push(Command::Quit);
    }

    /// Window lost focus; release events won't arrive, so drop held keys
    pub fn on_focus_lost(&mut self) {
        self.held = TickInput::default();
    }

    /// Snapshot held keys and drain pending commands
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            held: self.held,
            commands: std::mem::take(&mut self.commands),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_are_held_until_released() {
        let mut input = InputState::new();
        input.on_key(KeyCode::ArrowLeft, true, false);
        input.on_key(KeyCode::ArrowUp, true, false);

        let frame = input.take_frame();
        assert!(frame.held.left && frame.held.jump && !frame.held.right);
        assert!(frame.commands.is_empty());

        // Still held next frame
        assert!(input.take_frame().held.left);

        input.on_key(KeyCode::ArrowLeft, false, false);
        let frame = input.take_frame();
        assert!(!frame.held.left);
        assert!(frame.held.jump);
    }

    #[test]
    fn test_commands_drain_once() {
        let mut input = InputState::new();
        input.on_key(KeyCode::KeyS, true, false);
        input.on_key(KeyCode::KeyS, false, false);

        assert_eq!(input.take_frame().commands, vec![Command::Start]);
        assert!(input.take_frame().commands.is_empty());
    }

    #[test]
    fn test_key_repeat_is_ignored_for_commands() {
        let mut input = InputState::new();
        input.on_key(KeyCode::KeyR, true, false);
        input.on_key(KeyCode::KeyR, true, true);
        assert_eq!(input.take_frame().commands, vec![Command::Restart]);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut input = InputState::new();
        input.on_key(KeyCode::KeyX, true, false);
        input.on_key(KeyCode::Space, true, false);
        input.on_key(KeyCode::ArrowDown, true, false);
        assert_eq!(input.take_frame(), FrameInput::default());
    }

    #[test]
    fn test_close_request_is_quit() {
        let mut input = InputState::new();
        input.on_close_requested();
        assert!(input.take_frame().quit_requested());
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut input = InputState::new();
        input.on_key(KeyCode::ArrowRight, true, false);
        input.on_focus_lost();
        assert_eq!(input.take_frame().held, TickInput::default());
    }
}
