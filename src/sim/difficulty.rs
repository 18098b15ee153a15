//! Difficulty tiers and round population
//!
//! Each tier maps to a fixed supply count, enemy count and patrol speed.
//! Entering a round scatters both batches uniformly over the spawn area,
//! rejecting any position whose footprint touches the safe home strip.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameEvent, GameState, PatrolAxis, Supply};
use crate::config::{GameConfig, Zone};
use crate::consts::{ENEMY_SIZE, SUPPLY_SIZE};
use crate::error::ConfigError;

/// Selectable difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    Death,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Medium, Tier::Hard, Tier::Death];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
            Tier::Death => "Death",
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Tier::Easy => DifficultyProfile::new(10, 5, 0.5),
            Tier::Medium => DifficultyProfile::new(15, 10, 1.0),
            Tier::Hard => DifficultyProfile::new(20, 15, 3.0),
            Tier::Death => DifficultyProfile::new(30, 25, 5.0),
        }
    }
}

/// Entity counts and speed for one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub supplies: usize,
    pub enemies: usize,
    /// Multiplier on the base patrol step
    pub speed: f32,
}

impl DifficultyProfile {
    pub const fn new(supplies: usize, enemies: usize, speed: f32) -> Self {
        Self {
            supplies,
            enemies,
            speed,
        }
    }
}

/// Draw a centre from the spawn area for an entity of `size`, rejecting any
/// whose footprint touches the safe zone.
///
/// Fails with `SpawnExhausted` after `config.max_spawn_attempts` rejections,
/// or at once if the spawn area is empty.
pub fn sample_spawn_point<R: Rng>(
    rng: &mut R,
    config: &GameConfig,
    size: Vec2,
) -> Result<Vec2, ConfigError> {
    let Zone { min, max } = config.spawn_area;
    if !(min.x < max.x && min.y < max.y) {
        return Err(ConfigError::SpawnExhausted { attempts: 0 });
    }

    for attempt in 0..config.max_spawn_attempts {
        let p = Vec2::new(rng.random_range(min.x..max.x), rng.random_range(min.y..max.y));
        if !config.safe_zone.touches(p, size) {
            if attempt > 0 {
                log::debug!("Spawn point found after {} rejections", attempt);
            }
            return Ok(p);
        }
    }
    Err(ConfigError::SpawnExhausted {
        attempts: config.max_spawn_attempts,
    })
}

/// Replace the round's supplies and enemies with a fresh batch for `tier`.
///
/// On error the state is left untouched.
pub fn populate(state: &mut GameState, tier: Tier) -> Result<(), ConfigError> {
    let profile = tier.profile();

    let mut supplies = Vec::with_capacity(profile.supplies);
    for _ in 0..profile.supplies {
        let size = Vec2::splat(SUPPLY_SIZE);
        let pos = sample_spawn_point(&mut state.rng, &state.config, size)?;
        supplies.push(Supply::new(pos));
    }

    let mut enemies = Vec::with_capacity(profile.enemies);
    for i in 0..profile.enemies {
        let size = Vec2::splat(ENEMY_SIZE);
        let pos = sample_spawn_point(&mut state.rng, &state.config, size)?;
        log::debug!("Enemy {} at ({:.0}, {:.0})", i, pos.x, pos.y);
        enemies.push(Enemy::new(pos, PatrolAxis::for_slot(i)));
    }

    state.supplies = supplies;
    state.enemies = enemies;
    state.collected = 0;
    state.speed = profile.speed;
    state.events.push(GameEvent::Spawned {
        tier,
        supplies: profile.supplies,
        enemies: profile.enemies,
    });
    log::info!(
        "{} round: {} supplies, {} enemies, speed x{}",
        tier.as_str(),
        profile.supplies,
        profile.enemies,
        profile.speed
    );
    Ok(())
}
