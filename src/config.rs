//! Game configuration
//!
//! Geometry and spawn tuning, loadable from JSON. Every field has a default
//! matching the stock game, so a partial file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::user_spawn_point;

/// Which overlap test the collision evaluator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OverlapRule {
    /// Standard axis-aligned bounding box intersection
    #[default]
    Aabb,
    /// Legacy heuristic: any corner of the other rectangle lies inside the user
    FourCorner,
}

impl OverlapRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapRule::Aabb => "aabb",
            OverlapRule::FourCorner => "four-corner",
        }
    }
}

/// Axis-aligned region given by its min and max corners (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub min: Vec2,
    pub max: Vec2,
}

impl Zone {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Inclusive on every edge
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether a rectangle of `size` centred on `centre` touches this zone
    pub fn touches(&self, centre: Vec2, size: Vec2) -> bool {
        let half = size / 2.0;
        self.grow(half).contains(centre)
    }

    /// The zone pushed out by `margin` on every side
    pub fn grow(&self, margin: Vec2) -> Self {
        Self::new(self.min - margin, self.max + margin)
    }

    pub fn area(&self) -> f32 {
        let extent = (self.max - self.min).max(Vec2::ZERO);
        extent.x * extent.y
    }

    /// Overlapping region, if any (zero-width overlaps count)
    pub fn intersection(&self, other: &Zone) -> Option<Zone> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min.x <= max.x && min.y <= max.y).then(|| Zone::new(min, max))
    }
}

/// Patrol limits; an enemy turns around once its position passes one of them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub x_low: f32,
    pub x_high: f32,
    pub y_low: f32,
    pub y_high: f32,
}

impl Default for Corridor {
    fn default() -> Self {
        Self {
            x_low: 80.0,
            x_high: 790.0,
            y_low: 20.0,
            y_high: 580.0,
        }
    }
}

/// Expected successful samples per entity the retry budget must allow for.
/// At 20 the chance of one entity exhausting its budget is below 1e-8.
const MIN_EXPECTED_SPAWNS: f32 = 20.0;

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena size; positions live in [0, width) x [0, height)
    pub arena: Vec2,
    /// Region supply and enemy centres are drawn from
    pub spawn_area: Zone,
    /// Home strip around the user's start; nothing spawns touching it
    pub safe_zone: Zone,
    pub corridor: Corridor,
    pub overlap: OverlapRule,
    /// RNG seed; `None` derives one from the clock at startup
    pub seed: Option<u64>,
    /// Rejection-sampling budget per spawned entity
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            spawn_area: Zone::new(Vec2::new(80.0, 25.0), Vec2::new(785.0, 585.0)),
            safe_zone: Zone::new(Vec2::ZERO, Vec2::new(HOME_STRIP_WIDTH, ARENA_HEIGHT)),
            corridor: Corridor::default(),
            overlap: OverlapRule::Aabb,
            seed: None,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Share of the spawn area where an entity of any size can land without
    /// touching the safe zone
    pub fn free_spawn_fraction(&self) -> f32 {
        let area = self.spawn_area.area();
        if area <= 0.0 {
            return 0.0;
        }
        let margin = Vec2::splat(ENEMY_SIZE.max(SUPPLY_SIZE) / 2.0);
        let blocked = self
            .safe_zone
            .grow(margin)
            .intersection(&self.spawn_area)
            .map_or(0.0, |z| z.area());
        (1.0 - blocked / area).clamp(0.0, 1.0)
    }

    /// Reject configurations that would make spawning fail or loop forever,
    /// or put the user's start outside the safe zone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Vec2 { x: width, y: height } = self.arena;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }

        for (name, zone, strict) in [
            ("spawn area", &self.spawn_area, true),
            ("safe zone", &self.safe_zone, false),
        ] {
            for (axis, min, max, limit) in [
                ('x', zone.min.x, zone.max.x, width),
                ('y', zone.min.y, zone.max.y, height),
            ] {
                // Sampling needs a non-empty half-open range
                let ordered = if strict { min < max } else { min <= max };
                if !(min >= 0.0 && ordered && max <= limit) {
                    return Err(ConfigError::ZoneNotInsideArena {
                        zone: name,
                        axis,
                        min,
                        max,
                        limit,
                    });
                }
            }
        }

        let spawn = user_spawn_point();
        if !self.safe_zone.contains(spawn) {
            return Err(ConfigError::SpawnPointOutsideSafeZone {
                x: spawn.x,
                y: spawn.y,
            });
        }

        let c = &self.corridor;
        if c.x_low >= c.x_high {
            return Err(ConfigError::InvalidCorridor {
                axis: 'x',
                low: c.x_low,
                high: c.x_high,
            });
        }
        if c.y_low >= c.y_high {
            return Err(ConfigError::InvalidCorridor {
                axis: 'y',
                low: c.y_low,
                high: c.y_high,
            });
        }

        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::ZeroRetryBudget);
        }

        let free_fraction = self.free_spawn_fraction();
        if free_fraction * (self.max_spawn_attempts as f32) < MIN_EXPECTED_SPAWNS {
            return Err(ConfigError::SpawnAreaTooSmall {
                free_fraction,
                attempts: self.max_spawn_attempts,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arena, Vec2::new(800.0, 600.0));
        assert_eq!(config.corridor.x_high, 790.0);
        assert_eq!(config.corridor.y_low, 20.0);
        // Home strip and spawn area don't meet, even counting entity size
        assert_eq!(config.free_spawn_fraction(), 1.0);
    }

    #[test]
    fn test_zone_touches_counts_footprint() {
        let strip = Zone::new(Vec2::ZERO, Vec2::new(60.0, 600.0));
        assert!(strip.touches(Vec2::new(67.5, 300.0), Vec2::splat(15.0)));
        assert!(!strip.touches(Vec2::new(68.0, 300.0), Vec2::splat(15.0)));
        assert!(strip.touches(Vec2::new(30.0, 300.0), Vec2::ZERO));
    }

    #[test]
    fn test_zone_intersection() {
        let a = Zone::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let b = Zone::new(Vec2::new(50.0, 80.0), Vec2::new(200.0, 200.0));
        let both = a.intersection(&b).unwrap();
        assert_eq!(both, Zone::new(Vec2::new(50.0, 80.0), Vec2::new(100.0, 100.0)));
        assert_eq!(both.area(), 1000.0);
        let far = Zone::new(Vec2::new(300.0, 0.0), Vec2::new(400.0, 10.0));
        assert!(a.intersection(&far).is_none());
    }

    #[test]
    fn test_spawn_area_outside_arena_rejected() {
        let config = GameConfig {
            spawn_area: Zone::new(Vec2::new(80.0, 25.0), Vec2::new(900.0, 585.0)),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZoneNotInsideArena {
                zone: "spawn area",
                axis: 'x',
                ..
            })
        ));
    }

    #[test]
    fn test_flat_spawn_area_rejected() {
        let config = GameConfig {
            spawn_area: Zone::new(Vec2::new(80.0, 300.0), Vec2::new(785.0, 300.0)),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZoneNotInsideArena { axis: 'y', .. })
        ));
    }

    #[test]
    fn test_safe_zone_must_hold_user_spawn() {
        let config = GameConfig {
            safe_zone: Zone::new(Vec2::new(700.0, 0.0), Vec2::new(800.0, 600.0)),
            spawn_area: Zone::new(Vec2::new(80.0, 25.0), Vec2::new(600.0, 585.0)),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnPointOutsideSafeZone { .. })
        ));
    }

    #[test]
    fn test_safe_zone_covering_spawn_area_rejected() {
        let config = GameConfig {
            safe_zone: Zone::new(Vec2::ZERO, Vec2::new(800.0, 600.0)),
            ..Default::default()
        };
        assert_eq!(config.free_spawn_fraction(), 0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnAreaTooSmall { .. })
        ));
    }

    #[test]
    fn test_sliver_needs_enough_attempts() {
        // Blocked up to x = 707.5, leaving 77.5 of the 705-wide area
        let mut config = GameConfig {
            safe_zone: Zone::new(Vec2::ZERO, Vec2::new(700.0, 600.0)),
            max_spawn_attempts: 100,
            ..Default::default()
        };
        assert!((config.free_spawn_fraction() - 77.5 / 705.0).abs() < 1e-4);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnAreaTooSmall { attempts: 100, .. })
        ));

        config.max_spawn_attempts = 1000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_corridor_and_budget_rejected() {
        let mut config = GameConfig::default();
        config.corridor.y_low = 600.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCorridor { axis: 'y', .. })
        ));

        let config = GameConfig {
            max_spawn_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRetryBudget)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 42, "overlap": "FourCorner" }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.overlap, OverlapRule::FourCorner);
        assert_eq!(config.safe_zone, GameConfig::default().safe_zone);
        assert_eq!(config.spawn_area, GameConfig::default().spawn_area);
    }

    #[test]
    fn test_invalid_json_config_fails_fast() {
        let json = r#"{ "safe_zone": { "min": [0.0, 0.0], "max": [800.0, 600.0] } }"#;
        assert!(matches!(
            GameConfig::from_json(json),
            Err(ConfigError::SpawnAreaTooSmall { .. })
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
