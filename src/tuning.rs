//! Game balance knobs
//!
//! Defaults mirror `crate::consts`. A host can override any subset from JSON;
//! missing fields fall back to the default value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to load a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Data-driven balance for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player speed per axis (pixels/s)
    pub player_speed: f32,
    /// Pursuer chase speed per axis (pixels/s)
    pub pursuer_speed: f32,
    /// Time between spawn attempts (ms)
    pub spawn_interval_ms: f32,
    /// Pursuer cap while the item is still carried
    pub cap_carrying: usize,
    /// Pursuer cap after drop-off
    pub cap_empty: usize,
    /// Max distance to a spot's anchor for hiding
    pub hide_radius: f32,
    /// Visible width of the scrolling window
    pub viewport_width: f32,
    /// Camera dead-zone margin on each side
    pub camera_buffer: f32,
    /// Largest simulated step per tick (seconds)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            pursuer_speed: PURSUER_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            cap_carrying: PURSUER_CAP_CARRYING,
            cap_empty: PURSUER_CAP_EMPTY,
            hide_radius: HIDE_RADIUS,
            viewport_width: VIEWPORT_WIDTH,
            camera_buffer: CAMERA_BUFFER,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file on disk
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Pursuer cap for the current objective
    pub fn pursuer_cap(&self, carrying_item: bool) -> usize {
        if carrying_item {
            self.cap_carrying
        } else {
            self.cap_empty
        }
    }

    /// Reject values the simulation can't work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("pursuer_speed", self.pursuer_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("viewport_width", self.viewport_width),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }
        if !(self.hide_radius.is_finite() && self.hide_radius >= 0.0) {
            return Err(TuningError::Invalid {
                field: "hide_radius",
                reason: "must be zero or positive",
            });
        }
        if !(self.camera_buffer.is_finite()
            && self.camera_buffer >= 0.0
            && self.camera_buffer * 2.0 <= self.viewport_width)
        {
            return Err(TuningError::Invalid {
                field: "camera_buffer",
                reason: "must fit twice inside the viewport",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "pursuer_speed": 120.0 }"#).unwrap();
        assert_eq!(tuning.pursuer_speed, 120.0);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
        assert_eq!(tuning.cap_empty, PURSUER_CAP_EMPTY);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let err = Tuning::from_json(r#"{ "player_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "player_speed",
                ..
            }
        ));
    }

    #[test]
    fn rejects_oversized_camera_buffer() {
        let err = Tuning::from_json(r#"{ "camera_buffer": 500.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "camera_buffer", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn cap_depends_on_item() {
        let tuning = Tuning::default();
        assert_eq!(tuning.pursuer_cap(true), 3);
        assert_eq!(tuning.pursuer_cap(false), 5);
    }
}
