//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input state (keyboard, cursor)
//! - Frame timing

pub mod input;
pub mod time;

pub use input::{InputSnapshot, InputSource, Key, KeyState, ScriptedInput};
pub use time::FrameClock;
