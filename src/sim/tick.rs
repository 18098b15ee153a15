//! Fixed-step simulation tick
//!
//! One call per rendered frame. Movement is a constant per-tick step, never
//! scaled by wall-clock time, so tier speeds stay comparable across hosts.

use glam::Vec2;

use super::difficulty::{self, Tier};
use super::state::{GameState, Screen};
use super::{collision, patrol};
use crate::consts::USER_STEP;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start -> Info (`c`)
    pub advance: bool,
    /// Info -> Select (`s`)
    pub start: bool,
    /// Select -> Playing (`e`/`m`/`h`/`d`)
    pub difficulty: Option<Tier>,
    /// Over/Lost -> Select (`r`)
    pub restart: bool,
    /// Close the game (`escape`); handled by the frame loop
    pub quit: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    apply_transition(state, input);

    if state.is_playing() {
        move_user(state, input);
        patrol::step_patrols(
            &mut state.enemies,
            &state.config.corridor,
            state.speed,
            &mut state.events,
        );
        collision::evaluate(state);
    }
}

/// At most one screen change per tick, keyed off the screen the tick began on.
/// Keys pressed on the wrong screen are ignored.
fn apply_transition(state: &mut GameState, input: &TickInput) {
    match state.screen {
        Screen::Start if input.advance => state.set_screen(Screen::Info),
        Screen::Info if input.start => state.set_screen(Screen::Select),
        Screen::Select => {
            if let Some(tier) = input.difficulty {
                begin_round(state, tier);
            }
        }
        screen if screen.is_terminal() && input.restart => state.restart(),
        _ => {}
    }
}

/// Populate the round and enter it. Spawning happens only here, so a round
/// is never re-populated until a restart returns to Select.
fn begin_round(state: &mut GameState, tier: Tier) {
    match difficulty::populate(state, tier) {
        Ok(()) => state.set_screen(Screen::Playing(tier)),
        Err(e) => log::error!("Could not start {} round: {}", tier.as_str(), e),
    }
}

/// Arrow-key movement, with the edge guards checked before each step
fn move_user(state: &mut GameState, input: &TickInput) {
    let arena = state.config.arena;
    let user = &mut state.user;

    if input.up && user.top() <= arena.y {
        user.translate(Vec2::Y * USER_STEP);
    }
    if input.down && user.bottom() >= 0.0 {
        user.translate(Vec2::NEG_Y * USER_STEP);
    }
    if input.left && user.left() >= 0.0 {
        user.translate(Vec2::NEG_X * USER_STEP);
    }
    if input.right && user.right() <= arena.x {
        user.translate(Vec2::X * USER_STEP);
    }
}
