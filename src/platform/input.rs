//! Input service contract
//!
//! Hosts report a boolean for every key the game cares about plus the
//! cursor position. The core only reads state; it never sees raw events.

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::{Tier, TickInput};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    C,
    S,
    E,
    M,
    H,
    D,
    R,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub const COUNT: usize = 12;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Escape,
        Key::C,
        Key::S,
        Key::E,
        Key::M,
        Key::H,
        Key::D,
        Key::R,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Pressed/released state of every `Key`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: [bool; Key::COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a set of held keys
    pub fn held(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    #[inline]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    #[inline]
    pub fn set(&mut self, key: Key, down: bool) {
        self.pressed[key.index()] = down;
    }
}

/// Everything the host reports for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub keys: KeyState,
    /// Cursor in arena coordinates; not used by the simulation
    pub cursor: Vec2,
}

/// Source of per-frame input
pub trait InputSource {
    /// Current input, or `None` once the host has closed
    fn poll(&mut self) -> Option<InputSnapshot>;
}

impl From<&KeyState> for TickInput {
    fn from(keys: &KeyState) -> Self {
        // Select checks tiers in E, M, H, D order
        let difficulty = [
            (Key::E, Tier::Easy),
            (Key::M, Tier::Medium),
            (Key::H, Tier::Hard),
            (Key::D, Tier::Death),
        ]
        .into_iter()
        .find(|&(key, _)| keys.is_pressed(key))
        .map(|(_, tier)| tier);

        TickInput {
            up: keys.is_pressed(Key::Up),
            down: keys.is_pressed(Key::Down),
            left: keys.is_pressed(Key::Left),
            right: keys.is_pressed(Key::Right),
            advance: keys.is_pressed(Key::C),
            start: keys.is_pressed(Key::S),
            difficulty,
            restart: keys.is_pressed(Key::R),
            quit: keys.is_pressed(Key::Escape),
        }
    }
}

/// Pre-recorded input for headless runs and tests.
///
/// Each step holds a key set for a number of frames; when the script runs
/// out the source reports the host as closed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: VecDeque<(KeyState, u32)>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `keys` for `frames` frames (zero-frame steps are dropped)
    pub fn hold(mut self, keys: &[Key], frames: u32) -> Self {
        if frames > 0 {
            self.steps.push_back((KeyState::held(keys), frames));
        }
        self
    }

    /// Release everything for `frames` frames
    pub fn idle(self, frames: u32) -> Self {
        self.hold(&[], frames)
    }

    /// Frames left in the script
    pub fn remaining(&self) -> u64 {
        self.steps.iter().map(|&(_, n)| n as u64).sum()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<InputSnapshot> {
        let (keys, frames) = self.steps.front_mut()?;
        let snapshot = InputSnapshot {
            keys: *keys,
            cursor: Vec2::ZERO,
        };
        *frames -= 1;
        if *frames == 0 {
            self.steps.pop_front();
        }
        Some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state_roundtrip() {
        let mut keys = KeyState::new();
        assert!(Key::ALL.iter().all(|&k| !keys.is_pressed(k)));
        keys.set(Key::Left, true);
        assert!(keys.is_pressed(Key::Left));
        assert!(!keys.is_pressed(Key::Right));
        keys.set(Key::Left, false);
        assert_eq!(keys, KeyState::new());
    }

    #[test]
    fn test_all_keys_distinct_slots() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_tick_input_mapping() {
        let keys = KeyState::held(&[Key::C, Key::Up, Key::Right, Key::Escape]);
        let input = TickInput::from(&keys);
        assert!(input.advance && input.up && input.right && input.quit);
        assert!(!input.start && !input.down && !input.left && !input.restart);
        assert_eq!(input.difficulty, None);
    }

    #[test]
    fn test_difficulty_priority() {
        let keys = KeyState::held(&[Key::D, Key::M]);
        assert_eq!(TickInput::from(&keys).difficulty, Some(Tier::Medium));
        let keys = KeyState::held(&[Key::H]);
        assert_eq!(TickInput::from(&keys).difficulty, Some(Tier::Hard));
    }

    #[test]
    fn test_scripted_input_runs_out() {
        let mut input = ScriptedInput::new()
            .hold(&[Key::C], 2)
            .idle(0)
            .hold(&[Key::S], 1);
        assert_eq!(input.remaining(), 3);
        assert!(input.poll().unwrap().keys.is_pressed(Key::C));
        assert!(input.poll().unwrap().keys.is_pressed(Key::C));
        assert!(input.poll().unwrap().keys.is_pressed(Key::S));
        assert!(input.poll().is_none());
    }
}
