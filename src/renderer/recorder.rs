//! A `RenderService` that keeps the draw list instead of drawing it

use glam::Vec2;

use super::RenderService;
use crate::sim::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        scale: f32,
        color: Color,
    },
}

/// Records draw calls per frame; used by headless hosts and tests
#[derive(Debug, Default)]
pub struct DrawRecorder {
    calls: Vec<DrawCall>,
    /// Calls across all frames since creation
    total: u64,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's calls
    pub fn begin_frame(&mut self) {
        self.calls.clear();
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderService for DrawRecorder {
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        log::trace!("rect at {} size {}", pos, size);
        self.calls.push(DrawCall::Rect { pos, size, color });
        self.total += 1;
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Color) {
        log::trace!("text {:?} at {} x{}", text, pos, scale);
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            scale,
            color,
        });
        self.total += 1;
    }
}
