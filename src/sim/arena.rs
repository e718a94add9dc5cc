//! Static arena layout
//!
//! The cafe (start), the dumpster (drop-off) and the hiding spots never move
//! during a session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// A place the player can hide behind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcealmentSpot {
    pub rect: Rect,
}

impl ConcealmentSpot {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, SPOT_WIDTH, SPOT_HEIGHT),
        }
    }

    /// Point used for hide-range checks (the spot's top-left corner)
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.rect.pos
    }
}

/// World bounds plus fixed landmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
    start: Rect,
    dropoff: Rect,
    spots: Vec<ConcealmentSpot>,
}

impl Default for Arena {
    fn default() -> Self {
        let ground = |h: f32| WORLD_HEIGHT - h - GROUND_MARGIN;
        let spots = [200.0, 400.0, 600.0, 800.0, 1000.0]
            .into_iter()
            .map(|x| ConcealmentSpot::at(x, ground(SPOT_HEIGHT)))
            .collect();
        Self::new(
            WORLD_WIDTH,
            WORLD_HEIGHT,
            Rect::new(50.0, ground(CAFE_HEIGHT), CAFE_WIDTH, CAFE_HEIGHT),
            Rect::new(
                WORLD_WIDTH - 150.0,
                ground(DUMPSTER_HEIGHT),
                DUMPSTER_WIDTH,
                DUMPSTER_HEIGHT,
            ),
            spots,
        )
    }
}

impl Arena {
    pub fn new(
        width: f32,
        height: f32,
        start: Rect,
        dropoff: Rect,
        spots: Vec<ConcealmentSpot>,
    ) -> Self {
        Self {
            width,
            height,
            start,
            dropoff,
            spots,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// World size as (width, height)
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The cafe
    pub fn start(&self) -> &Rect {
        &self.start
    }

    /// The dumpster
    pub fn dropoff(&self) -> &Rect {
        &self.dropoff
    }

    pub fn spots(&self) -> &[ConcealmentSpot] {
        &self.spots
    }

    pub fn spot(&self, index: usize) -> Option<&ConcealmentSpot> {
        self.spots.get(index)
    }
}
