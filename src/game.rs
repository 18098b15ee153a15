//! Frame loop
//!
//! Each frame: poll input, tick the simulation, describe the scene. Frames
//! never overlap and the renderer only ever sees `&GameState`.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::{FrameClock, InputSource};
use crate::renderer::{RenderService, draw_scene};
use crate::sim::{GameState, TickInput, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    clock: FrameClock,
    frames: u64,
    running: bool,
}

impl Game {
    /// Validate `config` and start on the title screen.
    ///
    /// Uses `config.seed` when set, otherwise a clock-derived seed.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Game initialized with seed {} (overlap rule: {})",
            seed,
            config.overlap.as_str()
        );
        Ok(Self {
            state: GameState::new(seed, config),
            clock: FrameClock::new(),
            frames: 0,
            running: true,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    /// Seconds between the last two frames (diagnostic only)
    pub fn delta(&self) -> f32 {
        self.clock.delta()
    }

    /// Run one frame at host time `now` (seconds). Returns false once the
    /// host has closed or quit was requested; nothing is ticked or drawn then.
    pub fn frame<I, R>(&mut self, input: &mut I, renderer: &mut R, now: f64) -> bool
    where
        I: InputSource + ?Sized,
        R: RenderService + ?Sized,
    {
        if !self.running {
            return false;
        }

        let Some(snapshot) = input.poll() else {
            log::info!("Host closed after {} frames", self.frames);
            self.running = false;
            return false;
        };

        let tick_input = TickInput::from(&snapshot.keys);
        if tick_input.quit {
            log::info!("Quit requested after {} frames", self.frames);
            self.running = false;
            return false;
        }

        tick(&mut self.state, &tick_input);
        draw_scene(&self.state, renderer);

        self.clock.tick(now);
        self.frames += 1;
        true
    }

    /// Drive frames until the host closes; `now` supplies the frame time.
    /// Returns the number of frames run.
    pub fn run<I, R, T>(&mut self, input: &mut I, renderer: &mut R, mut now: T) -> u64
    where
        I: InputSource + ?Sized,
        R: RenderService + ?Sized,
        T: FnMut() -> f64,
    {
        let start = self.frames;
        while self.frame(input, renderer, now()) {}
        self.frames - start
    }
}

/// Seed from wall-clock nanoseconds
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
