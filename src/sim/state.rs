//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; there is no ambient
//! mutable state anywhere else in the crate.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::camera::Camera;
use super::player::Player;
use super::pursuer::{Pursuer, Spawner};
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A pursuer reached the exposed player (terminal)
    Caught,
    /// Item dropped off and player made it back (terminal)
    Delivered,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Logical input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    ToggleConceal,
}

impl Action {
    /// Parse a host-side action name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" | "moveup" => Some(Action::Up),
            "down" | "movedown" => Some(Action::Down),
            "left" | "moveleft" => Some(Action::Left),
            "right" | "moveright" => Some(Action::Right),
            "toggleconceal" | "toggle" | "hide" => Some(Action::ToggleConceal),
            _ => None,
        }
    }
}

/// Held directional inputs, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Record a held/released action. The conceal toggle is edge-only and
    /// has no held state.
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Up => self.up = held,
            Action::Down => self.down = held,
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::ToggleConceal => {}
        }
    }

    /// Sum of unit steps for the held directions (y grows downward)
    pub fn direction(&self) -> glam::Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        glam::Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Fire-and-forget signals for the audio/UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MoveStart,
    MoveStop,
    HideEntered { spot: usize },
    HideExited,
    ItemDelivered,
    PlayerCaught,
    ObjectiveCompleted,
}

/// What the player has to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    DeliverItem,
    ReturnToStart,
}

impl Objective {
    pub fn text(self) -> &'static str {
        match self {
            Objective::DeliverItem => "Take the trash to the dumpster",
            Objective::ReturnToStart => "Return to the cafe",
        }
    }
}

/// Read-only view of the world handed to the renderer each tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub phase: GamePhase,
    pub player: Player,
    pub pursuers: Vec<Pursuer>,
    pub camera_offset: f32,
    pub objective_text: &'static str,
    pub status_text: &'static str,
    /// Spot the player could hide at right now (hide prompt)
    pub nearby_spot: Option<usize>,
    /// Events raised since the previous snapshot, oldest first
    pub events: Vec<GameEvent>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Active pursuers in spawn order
    pub pursuers: Vec<Pursuer>,
    pub camera: Camera,
    pub spawner: Spawner,
    pub objective: Objective,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    pub(crate) arena: Arena,
    pub(crate) tuning: Tuning,
}

impl GameState {
    /// Create a session on the default arena with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Arena::default(), Tuning::default())
    }

    /// Create a session with custom layout and balance. Tuning that fails
    /// [`Tuning::validate`] is rejected.
    pub fn with_config(seed: u64, arena: Arena, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, arena, tuning))
    }

    fn build(seed: u64, arena: Arena, tuning: Tuning) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            player: Player::default(),
            pursuers: Vec::new(),
            camera: Camera::default(),
            spawner: Spawner::default(),
            objective: Objective::DeliverItem,
            time_ticks: 0,
            arena,
            tuning,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Back to session start. The RNG keeps its stream so consecutive runs differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.player = Player::default();
        self.pursuers.clear();
        self.camera.reset();
        self.spawner.reset();
        self.objective = Objective::DeliverItem;
        self.time_ticks = 0;
        log::info!("Session reset");
    }

    /// Handle the conceal toggle. Ignored outside of play.
    pub fn toggle_conceal(&mut self) -> Vec<GameEvent> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        self.player
            .toggle_conceal(&self.arena, self.tuning.hide_radius)
    }

    /// Spot the player could hide at, if exposed and in range
    pub fn nearby_spot(&self) -> Option<usize> {
        if self.player.concealed() {
            return None;
        }
        self.player
            .hide_candidate(&self.arena, self.tuning.hide_radius)
    }

    pub fn status_text(&self) -> &'static str {
        if self.player.concealed() {
            "You are hiding! The monsters are moving away."
        } else {
            "Be careful, the monsters can see you!"
        }
    }

    pub fn snapshot(&self, events: Vec<GameEvent>) -> WorldSnapshot {
        WorldSnapshot {
            phase: self.phase,
            player: self.player.clone(),
            pursuers: self.pursuers.clone(),
            camera_offset: self.camera.offset_x,
            objective_text: self.objective.text(),
            status_text: self.status_text(),
            nearby_spot: self.nearby_spot(),
            events,
        }
    }
}
