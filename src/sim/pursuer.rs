//! Pursuer spawning and steering
//!
//! Pursuers chase the player axis by axis while the player is exposed and
//! drift away, searching, while the player hides.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::geometry::Rect;
use crate::consts::*;

/// A chasing agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pursuer {
    pub rect: Rect,
}

impl Pursuer {
    pub fn at(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, PURSUER_WIDTH, PURSUER_HEIGHT),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }

    /// Advance one step relative to the player's position.
    ///
    /// Exposed player: step toward them on each axis independently.
    /// Concealed player: step away at 2x speed on x and 0.5x on y, plus jitter.
    pub fn steer<R: Rng>(
        &mut self,
        target: Vec2,
        concealed: bool,
        speed: f32,
        dt: f32,
        rng: &mut R,
        arena: &Arena,
    ) {
        let toward = Vec2::new(
            axis_sign(self.rect.pos.x, target.x),
            axis_sign(self.rect.pos.y, target.y),
        );
        let step = if concealed {
            let jitter = Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5);
            -toward * Vec2::new(2.0, 0.5) * speed * dt + jitter * speed * dt
        } else {
            toward * speed * dt
        };
        self.rect.pos += step;
        self.rect.clamp_within(arena.width(), arena.height());
    }
}

/// +1 if `to` lies ahead of `from`, -1 if behind, 0 if level
#[inline]
fn axis_sign(from: f32, to: f32) -> f32 {
    if from < to {
        1.0
    } else if from > to {
        -1.0
    } else {
        0.0
    }
}

/// Viewport edge a pursuer enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    const ALL: [SpawnEdge; 4] = [SpawnEdge::Top, SpawnEdge::Right, SpawnEdge::Bottom, SpawnEdge::Left];

    fn pick<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Timed spawner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    timer_ms: f32,
}

impl Spawner {
    #[inline]
    pub fn timer_ms(&self) -> f32 {
        self.timer_ms
    }

    pub fn reset(&mut self) {
        self.timer_ms = 0.0;
    }

    /// Accumulate elapsed time. Once the interval is reached the timer
    /// restarts; returns true if that happened with room under the cap.
    pub fn advance(&mut self, dt_ms: f32, population: usize, cap: usize, interval_ms: f32) -> bool {
        self.timer_ms += dt_ms;
        if self.timer_ms < interval_ms {
            return false;
        }
        self.timer_ms = 0.0;
        population < cap
    }

    /// Position just outside a random viewport edge, clamped into the world.
    ///
    /// The world is as tall as the viewport, so top/bottom spawns land on the
    /// world's edge row.
    pub fn spawn_position<R: Rng>(
        camera_offset: f32,
        viewport_width: f32,
        arena: &Arena,
        rng: &mut R,
    ) -> Vec2 {
        let along_x = camera_offset + rng.random::<f32>() * viewport_width;
        let along_y = rng.random::<f32>() * arena.height();
        let pos = match SpawnEdge::pick(rng) {
            SpawnEdge::Top => Vec2::new(along_x, -PURSUER_HEIGHT),
            SpawnEdge::Right => Vec2::new(camera_offset + viewport_width, along_y),
            SpawnEdge::Bottom => Vec2::new(along_x, arena.height()),
            SpawnEdge::Left => Vec2::new(camera_offset - PURSUER_WIDTH, along_y),
        };
        let mut rect = Rect::new(pos.x, pos.y, PURSUER_WIDTH, PURSUER_HEIGHT);
        rect.clamp_within(arena.width(), arena.height());
        rect.pos
    }
}
