//! Midnight Run - A scrolling stealth-chase game core
//!
//! Core modules:
//! - `sim`: Simulation (movement, pursuer AI, concealment, game phases)
//! - `tuning`: Data-driven game balance
//! - `web`: wasm-bindgen host binding (wasm32 only)
//!
//! Rendering, audio and input capture live in the host. The host feeds
//! timestamps and input actions in, and gets a [`sim::WorldSnapshot`] back.

pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use sim::{Action, GameEvent, GamePhase, Session, WorldSnapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Largest elapsed time a single tick may simulate (seconds).
    /// Longer gaps (backgrounded tab, debugger) are truncated to this.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1200.0;
    pub const WORLD_HEIGHT: f32 = 400.0;
    /// Visible width of the scrolling window
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    /// Distance from either viewport edge at which the camera starts to follow
    pub const CAMERA_BUFFER: f32 = 300.0;

    /// Player box and spawn point
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = WORLD_HEIGHT / 2.0;
    /// Player speed per axis (pixels/s)
    pub const PLAYER_SPEED: f32 = 240.0;

    /// Pursuer box
    pub const PURSUER_WIDTH: f32 = 30.0;
    pub const PURSUER_HEIGHT: f32 = 40.0;
    /// Pursuer chase speed per axis (pixels/s)
    pub const PURSUER_SPEED: f32 = 90.0;

    /// Spawn cadence (milliseconds)
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;
    /// Pursuer caps before and after the item is dropped off
    pub const PURSUER_CAP_CARRYING: usize = 3;
    pub const PURSUER_CAP_EMPTY: usize = 5;

    /// Concealment
    pub const HIDE_RADIUS: f32 = 50.0;
    pub const SPOT_WIDTH: f32 = 50.0;
    pub const SPOT_HEIGHT: f32 = 60.0;

    /// Landmarks (distance kept from the bottom edge)
    pub const GROUND_MARGIN: f32 = 20.0;
    pub const CAFE_WIDTH: f32 = 100.0;
    pub const CAFE_HEIGHT: f32 = 80.0;
    pub const DUMPSTER_WIDTH: f32 = 80.0;
    pub const DUMPSTER_HEIGHT: f32 = 60.0;
}
