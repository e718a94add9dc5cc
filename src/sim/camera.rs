//! Dead-zone follow camera (horizontal only)

use serde::{Deserialize, Serialize};

/// Compute the next horizontal scroll offset.
///
/// The camera stays put while the player is inside the central dead zone and
/// snaps so the player sits on its edge otherwise. The result is clamped to
/// `[0, world_width - viewport_width]`.
pub fn update_offset(
    prev_offset: f32,
    player_x: f32,
    viewport_width: f32,
    edge_buffer: f32,
    world_width: f32,
) -> f32 {
    let screen_x = player_x - prev_offset;
    let candidate = if screen_x > viewport_width - edge_buffer {
        player_x - (viewport_width - edge_buffer)
    } else if screen_x < edge_buffer {
        player_x - edge_buffer
    } else {
        prev_offset
    };
    let max_offset = (world_width - viewport_width).max(0.0);
    candidate.clamp(0.0, max_offset)
}

/// Scroll state of the visible window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset_x: f32,
}

impl Camera {
    /// Re-anchor on the player
    pub fn follow(&mut self, player_x: f32, viewport_width: f32, edge_buffer: f32, world_width: f32) {
        self.offset_x = update_offset(
            self.offset_x,
            player_x,
            viewport_width,
            edge_buffer,
            world_width,
        );
    }

    pub fn reset(&mut self) {
        self.offset_x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEW: f32 = 800.0;
    const BUF: f32 = 300.0;
    const WORLD: f32 = 1200.0;

    #[test]
    fn test_dead_zone_holds_still() {
        assert_eq!(update_offset(100.0, 500.0, VIEW, BUF, WORLD), 100.0);
    }

    #[test]
    fn test_scrolls_right() {
        // Player 520 px into the view, past the 500 px right edge of the dead zone
        assert_eq!(update_offset(0.0, 520.0, VIEW, BUF, WORLD), 20.0);
    }

    #[test]
    fn test_scrolls_left() {
        assert_eq!(update_offset(300.0, 550.0, VIEW, BUF, WORLD), 250.0);
    }

    #[test]
    fn test_clamped_at_world_edges() {
        assert_eq!(update_offset(0.0, 10.0, VIEW, BUF, WORLD), 0.0);
        assert_eq!(update_offset(400.0, 1170.0, VIEW, BUF, WORLD), 400.0);
    }

    #[test]
    fn test_narrow_world_never_scrolls() {
        assert_eq!(update_offset(0.0, 700.0, VIEW, BUF, 600.0), 0.0);
    }

    proptest! {
        #[test]
        fn offset_stays_in_range(xs in proptest::collection::vec(-100.0f32..1300.0, 1..64)) {
            let mut camera = Camera::default();
            for x in xs {
                camera.follow(x, VIEW, BUF, WORLD);
                prop_assert!(camera.offset_x >= 0.0 && camera.offset_x <= WORLD - VIEW);
            }
        }
    }
}
