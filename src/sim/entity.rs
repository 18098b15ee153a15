//! Rectangle geometry shared by every actor in the arena
//!
//! Positions are rectangle centres in arena space (origin bottom-left, y up):
//! - left/right = x ∓ w/2
//! - bottom/top = y ∓ h/2

use glam::Vec2;

use crate::config::OverlapRule;

/// RGBA colour, components in [0, 1]
pub type Color = [f32; 4];

/// Axis-aligned bounds of a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    /// Inclusive point membership
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.left, self.bottom),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
        ]
    }

    /// Standard AABB test; touching edges count as overlap
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom > other.top
            || self.top < other.bottom)
    }

    /// Legacy corner test: true if any corner of `other` lies inside `self`.
    ///
    /// Misses full containment of `self` inside `other` and plus-shaped
    /// crossings where no corner is enclosed.
    pub fn contains_any_corner(&self, other: &Bounds) -> bool {
        other.corners().iter().any(|&c| self.contains(c))
    }
}

/// Anything that occupies a rectangle in the arena
pub trait Bounded {
    fn bounds(&self) -> Bounds;

    /// Whether `self` and `other` overlap under the given rule.
    ///
    /// The corner rule is asymmetric: it tests `other`'s corners against `self`.
    fn overlaps(&self, other: &dyn Bounded, rule: OverlapRule) -> bool {
        let (a, b) = (self.bounds(), other.bounds());
        match rule {
            OverlapRule::Aabb => a.intersects(&b),
            OverlapRule::FourCorner => a.contains_any_corner(&b),
        }
    }
}

/// A positioned, sized, coloured rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    size: Vec2,
    color: Color,
}

impl Entity {
    /// Negative size components are clamped to zero
    pub fn new(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            pos,
            size: size.max(Vec2::ZERO),
            color,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}

impl Bounded for Entity {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.left(),
            right: self.right(),
            bottom: self.bottom(),
            top: self.top(),
        }
    }
}
