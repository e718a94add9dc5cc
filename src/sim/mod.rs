//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Elapsed time is the only clock (no frame-count assumptions)
//! - Seeded RNG only
//! - Pursuers iterate in spawn order
//! - No rendering, audio or platform dependencies

pub mod arena;
pub mod camera;
pub mod geometry;
pub mod player;
pub mod pursuer;
pub mod session;
pub mod state;
pub mod tick;

pub use arena::{Arena, ConcealmentSpot};
pub use camera::{Camera, update_offset};
pub use geometry::{Rect, intersects, nearest_within_radius};
pub use player::Player;
pub use pursuer::{Pursuer, Spawner};
pub use session::Session;
pub use state::{
    Action, GameEvent, GamePhase, GameState, InputState, Objective, WorldSnapshot,
};
pub use tick::tick;
