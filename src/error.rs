//! Error types

use thiserror::Error;

/// Errors raised while loading or applying a [`GameConfig`](crate::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Arena must have a positive, finite size
    #[error("invalid arena size {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    /// Named region must lie within the arena with min <= max on each axis
    #[error("{zone} {axis}-range [{min}, {max}] does not fit arena [0, {limit}]")]
    ZoneNotInsideArena {
        zone: &'static str,
        axis: char,
        min: f32,
        max: f32,
        limit: f32,
    },

    /// The user must start inside the safe zone
    #[error("user spawn point ({x}, {y}) is outside the safe zone")]
    SpawnPointOutsideSafeZone { x: f32, y: f32 },

    /// Too little of the spawn area is clear of the safe zone for the retry
    /// budget to find positions reliably
    #[error(
        "only {free_fraction:.4} of the spawn area is clear of the safe zone; {attempts} attempts per entity is not enough"
    )]
    SpawnAreaTooSmall { free_fraction: f32, attempts: u32 },

    /// Patrol corridor limits must be ordered low < high
    #[error("patrol corridor {axis}-limits out of order: low {low} >= high {high}")]
    InvalidCorridor { axis: char, low: f32, high: f32 },

    #[error("spawn retry budget must be at least 1")]
    ZeroRetryBudget,

    /// Rejection sampling ran out of attempts
    #[error("no spawn position clear of the safe zone after {attempts} attempts")]
    SpawnExhausted { attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
