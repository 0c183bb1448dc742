//! Keyboard and on-screen button state
//!
//! Tracks what the player is holding and writes it into the basket before
//! each frame. Platform code feeds raw key names and button presses in.

use crate::sim::GameState;

/// Logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    /// Raise the stick
    Reach,
    Pause,
}

impl Control {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Control::Left),
            "ArrowRight" | "d" | "D" => Some(Control::Right),
            "ArrowUp" | "w" | "W" => Some(Control::Reach),
            "Escape" => Some(Control::Pause),
            _ => None,
        }
    }
}

/// One-shot commands produced by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_dir: i8,
    pub reach: bool,
}

impl InputState {
    /// Key press or release
    ///
    /// Releasing a direction only stops the basket if that direction is the
    /// one currently held, so rolling from left to right never stalls.
    pub fn key(&mut self, control: Control, down: bool) -> Option<Command> {
        match control {
            Control::Left => self.direction(-1, down),
            Control::Right => self.direction(1, down),
            Control::Reach => self.reach = down,
            Control::Pause => {
                if down {
                    return Some(Command::TogglePause);
                }
            }
        }
        None
    }

    /// On-screen button press or release; releasing always stops
    pub fn button(&mut self, control: Control, down: bool) -> Option<Command> {
        match control {
            Control::Left | Control::Right if !down => {
                self.move_dir = 0;
                None
            }
            _ => self.key(control, down),
        }
    }

    fn direction(&mut self, dir: i8, down: bool) {
        if down {
            self.move_dir = dir;
        } else if self.move_dir == dir {
            self.move_dir = 0;
        }
    }

    /// Write held controls into the game
    pub fn apply(&self, state: &mut GameState) {
        state.set_move_dir(self.move_dir);
        state.set_reach(self.reach);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_key_names() {
        assert_eq!(Control::from_key("ArrowLeft"), Some(Control::Left));
        assert_eq!(Control::from_key("D"), Some(Control::Right));
        assert_eq!(Control::from_key("w"), Some(Control::Reach));
        assert_eq!(Control::from_key("Escape"), Some(Control::Pause));
        assert_eq!(Control::from_key("q"), None);
    }

    #[test]
    fn test_release_keeps_other_direction() {
        let mut input = InputState::default();
        input.key(Control::Left, true);
        input.key(Control::Right, true);
        assert_eq!(input.move_dir, 1);
        input.key(Control::Left, false);
        assert_eq!(input.move_dir, 1);
        input.key(Control::Right, false);
        assert_eq!(input.move_dir, 0);
    }

    #[test]
    fn test_button_release_always_stops() {
        let mut input = InputState::default();
        input.button(Control::Right, true);
        input.button(Control::Left, false);
        assert_eq!(input.move_dir, 0);
    }

    #[test]
    fn test_pause_only_on_press() {
        let mut input = InputState::default();
        assert_eq!(input.key(Control::Pause, true), Some(Command::TogglePause));
        assert_eq!(input.key(Control::Pause, false), None);
    }

    #[test]
    fn test_apply_writes_basket() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut input = InputState::default();
        input.key(Control::Left, true);
        input.key(Control::Reach, true);
        input.apply(&mut state);
        assert_eq!(state.basket.move_dir, -1);
        assert!(state.basket.reach_active);
    }
}
