//! Frame timing
//!
//! The host drives frames (vsync). Delta time and FPS are measured here for
//! diagnostics only; the simulation never reads them.

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Tracks per-frame delta and a rolling FPS estimate
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    /// Seconds between the last two frames
    delta: f32,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            delta: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Record a frame at `now` (seconds, monotonic)
    pub fn tick(&mut self, now: f64) {
        if let Some(last) = self.last_time {
            self.delta = (now - last).max(0.0) as f32;
        }
        self.last_time = Some(now);

        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen += 1;

        // Oldest sample sits at the next write slot once the ring is full
        if self.frames_seen >= FPS_WINDOW {
            let oldest = self.frame_times[self.frame_index];
            let elapsed = now - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
