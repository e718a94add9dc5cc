//! Frame-driven session wrapper
//!
//! Hosts call [`Session::tick`] once per animation frame with the frame
//! timestamp, and forward input changes through `set_input_held` /
//! `handle_input_edge`. Elapsed time between timestamps is the only clock.

use super::arena::Arena;
use super::state::{Action, GameEvent, GameState, InputState, WorldSnapshot};
use super::tick::tick;
use crate::tuning::{Tuning, TuningError};

/// A running game plus the host-facing timing and input state
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    input: InputState,
    last_timestamp_ms: Option<f64>,
    /// Events raised between ticks (input edges), flushed with the next snapshot
    pending: Vec<GameEvent>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::from_state(seed, GameState::new(seed))
    }

    /// Session with custom balance; invalid tuning is rejected up front
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        let state = GameState::with_config(seed, Arena::default(), tuning)?;
        Ok(Self::from_state(seed, state))
    }

    fn from_state(seed: u64, state: GameState) -> Self {
        log::info!("New session (seed {seed})");
        Self {
            state,
            input: InputState::default(),
            last_timestamp_ms: None,
            pending: Vec::new(),
        }
    }

    /// Advance to `timestamp_ms` and return the resulting world.
    ///
    /// The first call only records the baseline. Timestamps that go backwards
    /// count as zero elapsed time.
    pub fn tick(&mut self, timestamp_ms: f64) -> WorldSnapshot {
        let previous = self.last_timestamp_ms.replace(timestamp_ms);
        if let Some(previous) = previous {
            let elapsed_ms = timestamp_ms - previous;
            let dt = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
                (elapsed_ms / 1000.0) as f32
            } else {
                0.0
            };
            let events = tick(&mut self.state, &self.input, dt);
            self.pending.extend(events);
        }
        self.state.snapshot(std::mem::take(&mut self.pending))
    }

    /// Record a directional action as held or released
    pub fn set_input_held(&mut self, action: Action, held: bool) {
        self.input.set(action, held);
    }

    /// Handle a discrete press. Only the conceal toggle reacts to presses.
    pub fn handle_input_edge(&mut self, action: Action) {
        if action == Action::ToggleConceal {
            let events = self.state.toggle_conceal();
            self.pending.extend(events);
        }
    }

    /// Like [`Session::set_input_held`], for host-side action names.
    /// Unknown names are ignored.
    pub fn set_input_held_by_name(&mut self, name: &str, held: bool) {
        match Action::from_name(name) {
            Some(action) => self.set_input_held(action, held),
            None => log::debug!("Ignoring unknown action `{name}`"),
        }
    }

    /// Like [`Session::handle_input_edge`], for host-side action names
    pub fn handle_input_edge_by_name(&mut self, name: &str) {
        match Action::from_name(name) {
            Some(action) => self.handle_input_edge(action),
            None => log::debug!("Ignoring unknown action `{name}`"),
        }
    }

    /// Start over. Held inputs and the frame clock are kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.pending.clear();
    }

    /// Current world without advancing time or draining events
    pub fn snapshot(&self) -> WorldSnapshot {
        self.state.snapshot(Vec::new())
    }

    pub fn arena(&self) -> &Arena {
        self.state.arena()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
