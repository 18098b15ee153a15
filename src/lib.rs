//! Supply Run - dodge the patrols, grab the supplies
//!
//! Core modules:
//! - `sim`: Deterministic simulation (screens, patrols, collisions, spawning)
//! - `renderer`: Rendering service contract and scene description
//! - `platform`: Input service contract
//! - `config`: Validated game configuration
//! - `game`: Frame loop tying input, simulation and rendering together

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, OverlapRule};
pub use error::ConfigError;
pub use game::Game;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (origin bottom-left, y up)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// User spawn point, middle of the left edge
    pub const USER_SPAWN_X: f32 = 30.0;
    pub const USER_SPAWN_Y: f32 = ARENA_HEIGHT / 2.0;
    pub const USER_SIZE: f32 = 15.0;
    /// Width of the safe home strip along the left edge
    pub const HOME_STRIP_WIDTH: f32 = 60.0;
    /// User movement per held arrow key per frame
    pub const USER_STEP: f32 = 2.0;

    pub const ENEMY_SIZE: f32 = 15.0;
    pub const SUPPLY_SIZE: f32 = 10.0;
    /// Base patrol step per frame, scaled by the tier speed multiplier
    pub const PATROL_STEP: f32 = 2.0;

    /// Lives at session start
    pub const MAX_LIVES: u8 = 3;
    /// Number of battery charge cells on the HUD
    pub const CHARGE_CELLS: usize = 3;

    /// Spawn rejection budget per entity
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}

/// Where the user appears at session start and after every hit
#[inline]
pub fn user_spawn_point() -> Vec2 {
    Vec2::new(consts::USER_SPAWN_X, consts::USER_SPAWN_Y)
}
