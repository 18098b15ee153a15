//! Collision detection and round outcome
//!
//! Supplies are checked before enemies. A win ends evaluation for the tick,
//! so a frame that both completes the collection and touches an enemy is a
//! win with no life lost. Hits have no cooldown: the user is moved back to
//! the spawn point and the remaining enemies are tested against that spot.

use super::entity::Bounded;
use super::state::{GameEvent, GameState, Screen};
use crate::user_spawn_point;

/// Collect every active supply the user overlaps; returns how many were taken
pub fn collect_supplies(state: &mut GameState) -> u32 {
    let rule = state.config.overlap;
    let total = state.supplies.len() as u32;
    let mut taken = 0;

    for (index, supply) in state.supplies.iter_mut().enumerate() {
        if !supply.active || !state.user.overlaps(&supply.body, rule) {
            continue;
        }
        supply.active = false;
        state.collected += 1;
        taken += 1;
        log::info!("Collected supply {} ({}/{})", index, state.collected, total);
        state.events.push(GameEvent::SupplyCollected {
            index,
            collected: state.collected,
            total,
        });
    }

    if taken > 0 && total > 0 && state.collected == total && !state.won {
        state.won = true;
        state.events.push(GameEvent::Won);
        log::info!("All {} supplies collected", total);
        state.set_screen(Screen::Over);
    }
    taken
}

/// Apply enemy contact damage; returns the number of lives lost
pub fn apply_enemy_damage(state: &mut GameState) -> u32 {
    let rule = state.config.overlap;
    let mut hits = 0;

    for (index, enemy) in state.enemies.iter().enumerate() {
        if state.lives == 0 {
            break;
        }
        if !state.user.overlaps(&enemy.body, rule) {
            continue;
        }
        state.user.pos = user_spawn_point();
        state.lives -= 1;
        hits += 1;
        log::info!("Hit by enemy {}, {} lives left", index, state.lives);
        state.events.push(GameEvent::UserHit {
            enemy: index,
            lives_left: state.lives,
        });
    }

    if hits > 0 && state.lives == 0 {
        state.events.push(GameEvent::Lost);
        state.set_screen(Screen::Lost);
    }
    hits
}

/// Run the per-tick evaluation: supplies, then enemies
pub fn evaluate(state: &mut GameState) {
    if !state.is_playing() {
        return;
    }
    collect_supplies(state);
    if state.is_playing() {
        apply_enemy_damage(state);
    }
}
