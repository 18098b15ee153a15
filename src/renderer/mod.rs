//! Rendering service contract
//!
//! The game never touches a GPU. Each frame it describes the scene as a list
//! of coloured rectangles and text runs; the host decides how to show them.

pub mod recorder;
pub mod scene;

pub use recorder::{DrawCall, DrawRecorder};
pub use scene::{centered_x, draw_scene, text_width};

use glam::Vec2;

use crate::sim::Color;

/// Something that can display rectangles and text
pub trait RenderService {
    /// Rectangle centred on `pos`
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    /// Text with its baseline-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Color);
}

/// Colors for screen and HUD elements
pub mod colors {
    use crate::sim::Color;

    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const HOME_STRIP: Color = [0.349, 0.901, 0.349, 0.3];
    pub const BATTERY: Color = [0.411, 0.411, 0.411, 0.75];
    pub const CHARGE: Color = [0.9, 0.9, 0.0, 0.3];
    pub const CHARGE_CRITICAL: Color = [0.3, 0.0, 0.0, 1.0];
}
