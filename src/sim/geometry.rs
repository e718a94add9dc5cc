//! Axis-aligned box geometry
//!
//! Everything in the arena (player, pursuers, landmarks, hiding spots) is an
//! axis-aligned rectangle anchored at its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left `pos`, extent `size`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test; boxes that only touch along an edge don't intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// True if the whole box lies inside `[0, width] × [0, height]`
    pub fn within(&self, width: f32, height: f32) -> bool {
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && self.right() <= width && self.bottom() <= height
    }

    /// Move the box so it lies inside `[0, width] × [0, height]`
    pub fn clamp_within(&mut self, width: f32, height: f32) {
        self.pos.x = self.pos.x.clamp(0.0, (width - self.size.x).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (height - self.size.y).max(0.0));
    }
}

/// AABB overlap between two boxes
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Index of the point closest to `point`, among those strictly nearer than
/// `radius`. Equal distances keep the earliest index.
pub fn nearest_within_radius(
    point: Vec2,
    spots: impl IntoIterator<Item = Vec2>,
    radius: f32,
) -> Option<usize> {
    let mut nearest = None;
    let mut nearest_dist = f32::INFINITY;
    for (i, spot) in spots.into_iter().enumerate() {
        let dist = point.distance(spot);
        if dist < nearest_dist && dist < radius {
            nearest_dist = dist;
            nearest = Some(i);
        }
    }
    nearest
}
