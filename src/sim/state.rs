//! Game state and core simulation types
//!
//! One owned `GameState` holds everything a session mutates; the simulation
//! takes it by `&mut`, the renderer by `&`.

use glam::{BVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::Tier;
use super::entity::{Color, Entity};
use crate::config::GameConfig;
use crate::consts::*;
use crate::user_spawn_point;

pub const USER_COLOR: Color = [0.537, 0.811, 0.941, 0.9];
pub const ENEMY_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
pub const SUPPLY_COLOR: Color = [1.0, 0.0, 1.0, 1.0];

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Welcome text, waiting for `c`
    Start,
    /// Lives and safe-zone explanation, waiting for `s`
    Info,
    /// Difficulty prompt, waiting for `e`/`m`/`h`/`d`
    Select,
    /// Active round at the given tier
    Playing(Tier),
    /// Round won, waiting for `r`
    Over,
    /// Out of lives, waiting for `r`
    Lost,
}

impl Screen {
    pub fn is_playing(&self) -> bool {
        matches!(self, Screen::Playing(_))
    }

    /// Over and Lost only accept restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, Screen::Over | Screen::Lost)
    }
}

/// Axis an enemy patrols along, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolAxis {
    Horizontal,
    Vertical,
}

impl PatrolAxis {
    /// Even spawn slots patrol horizontally, odd slots vertically
    pub fn for_slot(index: usize) -> Self {
        if index % 2 == 0 {
            PatrolAxis::Horizontal
        } else {
            PatrolAxis::Vertical
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Entity,
    pub axis: PatrolAxis,
    /// Per-axis direction flags; `true` means moving toward +x / +y
    pub heading: BVec2,
}

impl Enemy {
    pub fn new(pos: Vec2, axis: PatrolAxis) -> Self {
        Self {
            body: Entity::new(pos, Vec2::splat(ENEMY_SIZE), ENEMY_COLOR),
            axis,
            heading: BVec2::TRUE,
        }
    }

    /// Direction flag for the axis this enemy actually patrols
    pub fn moving_positive(&self) -> bool {
        match self.axis {
            PatrolAxis::Horizontal => self.heading.x,
            PatrolAxis::Vertical => self.heading.y,
        }
    }
}

/// A collectible supply crate
#[derive(Debug, Clone, PartialEq)]
pub struct Supply {
    pub body: Entity,
    /// Cleared once collected; inactive supplies are neither drawn nor tested
    pub active: bool,
}

impl Supply {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Entity::new(pos, Vec2::splat(SUPPLY_SIZE), SUPPLY_COLOR),
            active: true,
        }
    }
}

/// Display state of one battery charge cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeCell {
    pub visible: bool,
    /// Last life left: drawn in the dark red shade
    pub critical: bool,
}

/// Things that happened during a tick, for hosts that want to react
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScreenChanged { from: Screen, to: Screen },
    Spawned { tier: Tier, supplies: usize, enemies: usize },
    SupplyCollected { index: usize, collected: u32, total: u32 },
    UserHit { enemy: usize, lives_left: u8 },
    PatrolTurned { enemy: usize, axis: PatrolAxis },
    Won,
    Lost,
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub config: GameConfig,
    pub screen: Screen,
    /// Patrol speed multiplier of the current round (0 outside a round)
    pub speed: f32,
    pub user: Entity,
    /// Spawn order preserved; index is the enemy's id
    pub enemies: Vec<Enemy>,
    pub supplies: Vec<Supply>,
    /// Remaining lives, 0..=MAX_LIVES
    pub lives: u8,
    /// Supplies collected this round
    pub collected: u32,
    pub won: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session on the start screen. `config` is assumed validated.
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            screen: Screen::Start,
            speed: 0.0,
            user: new_user(),
            enemies: Vec::new(),
            supplies: Vec::new(),
            lives: MAX_LIVES,
            collected: 0,
            won: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.screen.is_playing()
    }

    pub fn total_supplies(&self) -> u32 {
        self.supplies.len() as u32
    }

    pub fn remaining_supplies(&self) -> usize {
        self.supplies.iter().filter(|s| s.active).count()
    }

    /// Battery cells top to bottom, derived from remaining lives
    pub fn charges(&self) -> [ChargeCell; CHARGE_CELLS] {
        let lives = self.lives;
        [
            ChargeCell {
                visible: lives >= 3,
                critical: false,
            },
            ChargeCell {
                visible: lives >= 2,
                critical: false,
            },
            ChargeCell {
                visible: true,
                critical: lives <= 1,
            },
        ]
    }

    /// Switch screens, logging and recording the change
    pub fn set_screen(&mut self, to: Screen) {
        let from = self.screen;
        if from == to {
            return;
        }
        log::info!("Screen {:?} -> {:?}", from, to);
        self.screen = to;
        self.events.push(GameEvent::ScreenChanged { from, to });
    }

    /// Reset everything a round mutates and go back to difficulty select
    pub fn restart(&mut self) {
        self.user = new_user();
        self.lives = MAX_LIVES;
        self.collected = 0;
        self.won = false;
        self.speed = 0.0;
        self.enemies.clear();
        self.supplies.clear();
        self.events.push(GameEvent::Restarted);
        self.set_screen(Screen::Select);
        log::info!("Session restarted");
    }
}

fn new_user() -> Entity {
    Entity::new(user_spawn_point(), Vec2::splat(USER_SIZE), USER_COLOR)
}
