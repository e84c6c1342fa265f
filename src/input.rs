//! Keyboard input handling
//!
//! Works on DOM `KeyboardEvent.key` strings so it can be tested off the browser.

use crate::sim::InputState;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Sound on/off
    Mute,
}

impl Key {
    /// Classify a DOM key name
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "m" | "M" => Some(Key::Mute),
            _ => None,
        }
    }
}

/// Sound-only reaction to releasing a sideways arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taunt {
    Left,
    Right,
}

impl InputState {
    /// Handle key down event
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.up = true,
            Key::Down => self.down = true,
            Key::Left | Key::Right | Key::Mute => {}
        }
    }

    /// Handle key up event, returning a taunt for the sideways arrows
    pub fn key_up(&mut self, key: Key) -> Option<Taunt> {
        match key {
            Key::Up => {
                self.up = false;
                None
            }
            Key::Down => {
                self.down = false;
                None
            }
            Key::Left => Some(Taunt::Left),
            Key::Right => Some(Taunt::Right),
            Key::Mute => None,
        }
    }

    /// Release everything (focus lost, restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_dom("Down"), Some(Key::Down));
        assert_eq!(Key::from_dom("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom("m"), Some(Key::Mute));
        assert_eq!(Key::from_dom("M"), Some(Key::Mute));
        assert_eq!(Key::from_dom("w"), None);
        assert_eq!(Key::from_dom(" "), None);
    }

    #[test]
    fn test_flags_follow_press_and_release() {
        let mut input = InputState::default();
        input.key_down(Key::Up);
        input.key_down(Key::Down);
        assert!(input.up && input.down);

        assert_eq!(input.key_up(Key::Up), None);
        assert!(!input.up);
        assert!(input.down);

        // Repeated key-down events are idempotent
        input.key_down(Key::Down);
        assert_eq!(input.key_up(Key::Down), None);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_sideways_arrows_only_taunt() {
        let mut input = InputState::default();
        input.key_down(Key::Left);
        assert_eq!(input, InputState::default());
        assert_eq!(input.key_up(Key::Left), Some(Taunt::Left));
        assert_eq!(input.key_up(Key::Right), Some(Taunt::Right));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_mute_key_leaves_flags() {
        let mut input = InputState {
            up: true,
            down: false,
        };
        input.key_down(Key::Mute);
        assert_eq!(input.key_up(Key::Mute), None);
        assert!(input.up);
        assert!(!input.down);
    }
}
