//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod patrol;
pub mod state;
pub mod tick;

pub use collision::{apply_enemy_damage, collect_supplies, evaluate};
pub use difficulty::{DifficultyProfile, Tier, populate, sample_spawn_point};
pub use entity::{Bounded, Bounds, Color, Entity};
pub use patrol::{step_enemy, step_patrols};
pub use state::{
    ChargeCell, Enemy, GameEvent, GameState, PatrolAxis, Screen, Supply, ENEMY_COLOR,
    SUPPLY_COLOR, USER_COLOR,
};
pub use tick::{TickInput, tick};
