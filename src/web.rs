//! Browser binding
//!
//! The page owns the animation-frame loop, keyboard listeners, drawing and
//! sound. It calls into [`WebSession`] and reads snapshots back as JSON.

use wasm_bindgen::prelude::*;

use crate::sim::Session;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier instance
        return;
    }
    log::info!("Midnight Run core loaded");
}

#[wasm_bindgen]
pub struct WebSession {
    inner: Session,
}

#[wasm_bindgen]
impl WebSession {
    /// `tuning_json` may override any subset of the balance knobs
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, tuning_json: Option<String>) -> Result<WebSession, JsError> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json)?,
            None => Tuning::default(),
        };
        Ok(Self {
            inner: Session::with_tuning(seed as u64, tuning)?,
        })
    }

    /// Advance to the frame timestamp; returns the snapshot as JSON
    pub fn tick(&mut self, timestamp_ms: f64) -> Result<String, JsError> {
        let snapshot = self.inner.tick(timestamp_ms);
        Ok(serde_json::to_string(&snapshot)?)
    }

    pub fn set_input_held(&mut self, action: &str, held: bool) {
        self.inner.set_input_held_by_name(action, held);
    }

    pub fn handle_input_edge(&mut self, action: &str) {
        self.inner.handle_input_edge_by_name(action);
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Static layout (bounds, cafe, dumpster, hiding spots) as JSON
    pub fn arena(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.inner.arena())?)
    }
}
