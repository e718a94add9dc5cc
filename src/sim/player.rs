//! Player movement and concealment

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, ConcealmentSpot};
use super::geometry::{Rect, nearest_within_radius};
use super::state::{GameEvent, InputState};
use crate::consts::*;

/// The player-controlled courier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Still holding the item that has to go to the drop-off
    pub carrying_item: bool,
    /// Index of the spot the player hides at; `Some` exactly while concealed
    concealed_at: Option<usize>,
    /// Whether the last step applied any velocity (drives MoveStart/MoveStop)
    pub moving: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            carrying_item: true,
            concealed_at: None,
            moving: false,
        }
    }
}

impl Player {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }

    #[inline]
    pub fn concealed(&self) -> bool {
        self.concealed_at.is_some()
    }

    #[inline]
    pub fn concealed_at(&self) -> Option<usize> {
        self.concealed_at
    }

    /// Spot the player could hide at from where they stand
    pub fn hide_candidate(&self, arena: &Arena, radius: f32) -> Option<usize> {
        let anchors = arena.spots().iter().map(ConcealmentSpot::anchor);
        nearest_within_radius(self.rect.pos, anchors, radius)
    }

    /// Move by the held directions. Returns true if any velocity was applied,
    /// even if a wall stopped the box.
    ///
    /// Each axis moves at full speed, so diagonals are faster than straight lines.
    pub fn step(&mut self, input: &InputState, speed: f32, dt: f32, arena: &Arena) -> bool {
        let dir = input.direction();
        if dir == Vec2::ZERO {
            return false;
        }
        self.rect.pos += dir * speed * dt;
        self.rect.clamp_within(arena.width(), arena.height());
        true
    }

    /// Enter or leave concealment. Leaving always succeeds; entering needs a
    /// spot within `radius`, otherwise nothing happens.
    pub fn toggle_conceal(&mut self, arena: &Arena, radius: f32) -> Vec<GameEvent> {
        if self.concealed_at.take().is_some() {
            return vec![GameEvent::HideExited];
        }
        match self.hide_candidate(arena, radius) {
            Some(spot) => {
                self.concealed_at = Some(spot);
                self.moving = false;
                vec![GameEvent::HideEntered { spot }, GameEvent::MoveStop]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Action;

    fn held(actions: &[Action]) -> InputState {
        let mut input = InputState::default();
        for &a in actions {
            input.set(a, true);
        }
        input
    }

    #[test]
    fn test_no_input_no_motion() {
        let arena = Arena::default();
        let mut player = Player::default();
        assert!(!player.step(&InputState::default(), PLAYER_SPEED, 0.016, &arena));
        assert_eq!(player.pos(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_opposite_inputs_cancel() {
        let arena = Arena::default();
        let mut player = Player::default();
        let moved = player.step(&held(&[Action::Left, Action::Right]), PLAYER_SPEED, 0.1, &arena);
        assert!(!moved);
        assert_eq!(player.pos(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_diagonal_is_uncapped() {
        let arena = Arena::default();
        let mut player = Player::default();
        player.step(&held(&[Action::Right, Action::Down]), 100.0, 0.1, &arena);
        assert!((player.pos().x - 110.0).abs() < 1e-4);
        assert!((player.pos().y - 210.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamped_to_world() {
        let arena = Arena::default();
        let mut player = Player::default();
        for _ in 0..100 {
            player.step(&held(&[Action::Up, Action::Left]), PLAYER_SPEED, 0.1, &arena);
        }
        assert_eq!(player.pos(), Vec2::ZERO);
    }

    #[test]
    fn test_hide_needs_nearby_spot() {
        let arena = Arena::default();
        let mut player = Player::default();
        assert!(player.toggle_conceal(&arena, HIDE_RADIUS).is_empty());
        assert!(!player.concealed());
    }

    #[test]
    fn test_hide_and_unhide() {
        let arena = Arena::default();
        let mut player = Player::default();
        player.rect.pos = Vec2::new(410.0, 300.0);
        player.moving = true;

        let events = player.toggle_conceal(&arena, HIDE_RADIUS);
        assert_eq!(events, vec![GameEvent::HideEntered { spot: 1 }, GameEvent::MoveStop]);
        assert_eq!(player.concealed_at(), Some(1));
        assert!(!player.moving);

        let events = player.toggle_conceal(&arena, HIDE_RADIUS);
        assert_eq!(events, vec![GameEvent::HideExited]);
        assert!(!player.concealed());
        assert_eq!(player.pos(), Vec2::new(410.0, 300.0));
    }
}
