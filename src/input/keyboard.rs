// Keyboard input mapping module
//
// Keyboard-to-controller mapping for the display frontend. Supports both
// players with fixed default bindings.

use super::{Button, Controller};
use std::collections::HashSet;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Represents which player's controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Player 1
    One,
    /// Player 2
    Two,
}

/// Keyboard mapping for a single player
#[derive(Debug, Clone)]
pub struct KeyboardMapping {
    /// Key for A button
    pub button_a: KeyCode,
    /// Key for B button
    pub button_b: KeyCode,
    /// Key for Select button
    pub select: KeyCode,
    /// Key for Start button
    pub start: KeyCode,
    /// Key for Up on D-pad
    pub up: KeyCode,
    /// Key for Down on D-pad
    pub down: KeyCode,
    /// Key for Left on D-pad
    pub left: KeyCode,
    /// Key for Right on D-pad
    pub right: KeyCode,
}

impl KeyboardMapping {
    /// Default mapping for Player 1: arrows for the D-pad, X/Z for A/B,
    /// Enter for Start, right Shift for Select
    pub fn player1_default() -> Self {
        Self {
            button_a: KeyCode::KeyX,
            button_b: KeyCode::KeyZ,
            select: KeyCode::ShiftRight,
            start: KeyCode::Enter,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// Default mapping for Player 2: WASD for the D-pad, K/J for A/B,
    /// Y for Start, U for Select
    pub fn player2_default() -> Self {
        Self {
            button_a: KeyCode::KeyK,
            button_b: KeyCode::KeyJ,
            select: KeyCode::KeyU,
            start: KeyCode::KeyY,
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }

    /// The button a key code is bound to, if any
    fn get_button(&self, key: KeyCode) -> Option<Button> {
        if key == self.button_a {
            Some(Button::A)
        } else if key == self.button_b {
            Some(Button::B)
        } else if key == self.select {
            Some(Button::Select)
        } else if key == self.start {
            Some(Button::Start)
        } else if key == self.up {
            Some(Button::Up)
        } else if key == self.down {
            Some(Button::Down)
        } else if key == self.left {
            Some(Button::Left)
        } else if key == self.right {
            Some(Button::Right)
        } else {
            None
        }
    }
}

/// Keyboard input handler for NES controllers
///
/// Tracks the set of held keys and converts it to controller state on
/// demand. Simultaneous presses and both players are supported.
pub struct KeyboardHandler {
    /// Keyboard mapping for Player 1
    player1_mapping: KeyboardMapping,
    /// Keyboard mapping for Player 2
    player2_mapping: KeyboardMapping,
    /// Set of currently pressed keys
    pressed_keys: HashSet<KeyCode>,
}

impl KeyboardHandler {
    /// Create a new keyboard handler with the default bindings
    pub fn new() -> Self {
        Self {
            player1_mapping: KeyboardMapping::player1_default(),
            player2_mapping: KeyboardMapping::player2_default(),
            pressed_keys: HashSet::new(),
        }
    }

    /// Handle a key press event
    pub fn handle_key_press(&mut self, physical_key: PhysicalKey) {
        if let PhysicalKey::Code(key_code) = physical_key {
            self.pressed_keys.insert(key_code);
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, physical_key: PhysicalKey) {
        if let PhysicalKey::Code(key_code) = physical_key {
            self.pressed_keys.remove(&key_code);
        }
    }

    /// Build the current controller state for one player
    pub fn controller_state(&self, player: Player) -> Controller {
        let mapping = match player {
            Player::One => &self.player1_mapping,
            Player::Two => &self.player2_mapping,
        };

        let mut controller = Controller::new();
        for &key in &self.pressed_keys {
            if let Some(button) = mapping.get_button(key) {
                controller.set_button(button, true);
            }
        }
        controller
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping_player1() {
        let handler = KeyboardHandler::new();

        let mut expect = Controller::new();
        assert_eq!(
            handler.controller_state(Player::One).bits(),
            expect.bits(),
            "no keys held"
        );

        let mut handler = handler;
        handler.handle_key_press(PhysicalKey::Code(KeyCode::KeyX));
        handler.handle_key_press(PhysicalKey::Code(KeyCode::ArrowLeft));

        expect.set_button(Button::A, true);
        expect.set_button(Button::Left, true);
        assert_eq!(handler.controller_state(Player::One).bits(), expect.bits());
    }

    #[test]
    fn test_release_clears_button() {
        let mut handler = KeyboardHandler::new();
        handler.handle_key_press(PhysicalKey::Code(KeyCode::KeyX));
        handler.handle_key_release(PhysicalKey::Code(KeyCode::KeyX));

        assert_eq!(handler.controller_state(Player::One).bits(), 0);
    }

    #[test]
    fn test_players_do_not_overlap() {
        let mut handler = KeyboardHandler::new();
        handler.handle_key_press(PhysicalKey::Code(KeyCode::KeyK));

        assert_eq!(handler.controller_state(Player::One).bits(), 0);

        let mut expect = Controller::new();
        expect.set_button(Button::A, true);
        assert_eq!(handler.controller_state(Player::Two).bits(), expect.bits());
    }
}
