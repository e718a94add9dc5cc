//! Variable-timestep simulation tick
//!
//! One call per rendered frame. All per-frame work runs in a fixed order:
//! player movement, pursuer movement, phase transitions, spawning, camera.

use super::pursuer::{Pursuer, Spawner};
use super::state::{GameEvent, GamePhase, GameState, InputState, Objective};

/// Advance the game by `dt` seconds and return the events raised.
///
/// `dt` is clamped to `[0, max_frame_dt]` so a long stall can't teleport
/// anything through geometry. Terminal phases don't advance.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase.is_terminal() {
        return events;
    }

    // min/max rather than clamp: a bad max_frame_dt must not panic
    let dt = if dt.is_finite() {
        dt.min(state.tuning.max_frame_dt).max(0.0)
    } else {
        0.0
    };
    state.time_ticks += 1;

    move_player(state, input, dt, &mut events);
    move_pursuers(state, dt);

    if check_transitions(state, &mut events) {
        log::info!("Phase -> {:?} after {} ticks", state.phase, state.time_ticks);
    }

    if state.phase == GamePhase::Playing {
        spawn_pursuers(state, dt);
    }

    if !state.player.concealed() {
        state.camera.follow(
            state.player.pos().x,
            state.tuning.viewport_width,
            state.tuning.camera_buffer,
            state.arena.width(),
        );
    }

    events
}

fn move_player(state: &mut GameState, input: &InputState, dt: f32, events: &mut Vec<GameEvent>) {
    if state.player.concealed() {
        return;
    }
    let moving = state
        .player
        .step(input, state.tuning.player_speed, dt, &state.arena);
    if moving != state.player.moving {
        state.player.moving = moving;
        events.push(if moving {
            GameEvent::MoveStart
        } else {
            GameEvent::MoveStop
        });
    }
}

fn move_pursuers(state: &mut GameState, dt: f32) {
    let target = state.player.pos();
    let concealed = state.player.concealed();
    let speed = state.tuning.pursuer_speed;
    for pursuer in &mut state.pursuers {
        pursuer.steer(target, concealed, speed, dt, &mut state.rng, &state.arena);
    }
}

/// Loss, drop-off and win checks, in that order. At most one fires per tick.
/// Returns true if the phase changed.
fn check_transitions(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let player = &state.player;
    let exposed = !player.concealed();
    let caught = exposed && state.pursuers.iter().any(|p| p.rect.intersects(&player.rect));
    let at_dropoff = player.rect.intersects(state.arena.dropoff());
    let at_start = player.rect.intersects(state.arena.start());
    let carrying = player.carrying_item;

    if caught {
        state.phase = GamePhase::Caught;
        stop_moving(state, events);
        events.push(GameEvent::PlayerCaught);
        return true;
    }

    if carrying && at_dropoff {
        state.player.carrying_item = false;
        state.objective = Objective::ReturnToStart;
        events.push(GameEvent::ItemDelivered);
        log::info!("Item delivered, {} pursuers out", state.pursuers.len());
        return false;
    }

    if !carrying && at_start {
        state.phase = GamePhase::Delivered;
        stop_moving(state, events);
        events.push(GameEvent::ObjectiveCompleted);
        return true;
    }

    false
}

fn stop_moving(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.player.moving {
        state.player.moving = false;
        events.push(GameEvent::MoveStop);
    }
}

fn spawn_pursuers(state: &mut GameState, dt: f32) {
    let cap = state.tuning.pursuer_cap(state.player.carrying_item);
    let ready = state.spawner.advance(
        dt * 1000.0,
        state.pursuers.len(),
        cap,
        state.tuning.spawn_interval_ms,
    );
    if !ready {
        return;
    }
    let pos = Spawner::spawn_position(
        state.camera.offset_x,
        state.tuning.viewport_width,
        &state.arena,
        &mut state.rng,
    );
    log::debug!("Spawned pursuer #{} at ({:.0}, {:.0})", state.pursuers.len() + 1, pos.x, pos.y);
    state.pursuers.push(Pursuer::at(pos));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Action;
    use glam::Vec2;
    use proptest::prelude::*;

    const FRAME: f32 = 0.016;

    fn held(actions: &[Action]) -> InputState {
        let mut input = InputState::default();
        for &a in actions {
            input.set(a, true);
        }
        input
    }

    #[test]
    fn test_idle_tick_keeps_player_still() {
        let mut state = GameState::new(1);
        let events = tick(&mut state, &InputState::default(), FRAME);
        assert_eq!(state.player.pos(), Vec2::new(100.0, 200.0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(events.is_empty());
    }

    #[test]
    fn test_movement_events_on_edges_only() {
        let mut state = GameState::new(1);
        let right = held(&[Action::Right]);
        assert_eq!(tick(&mut state, &right, FRAME), vec![GameEvent::MoveStart]);
        assert!(tick(&mut state, &right, FRAME).is_empty());
        assert_eq!(
            tick(&mut state, &InputState::default(), FRAME),
            vec![GameEvent::MoveStop]
        );
    }

    #[test]
    fn test_speed_scales_with_elapsed_time() {
        let mut a = GameState::new(1);
        let mut b = GameState::new(1);
        let right = held(&[Action::Right]);
        for _ in 0..4 {
            tick(&mut a, &right, 0.025);
        }
        tick(&mut b, &right, 0.05);
        tick(&mut b, &right, 0.05);
        assert!((a.player.pos().x - b.player.pos().x).abs() < 1e-3);
    }

    #[test]
    fn test_huge_dt_is_clamped() {
        let mut state = GameState::new(1);
        tick(&mut state, &held(&[Action::Right]), 30.0);
        let max_step = state.tuning().player_speed * state.tuning().max_frame_dt;
        assert!((state.player.pos().x - (100.0 + max_step)).abs() < 1e-3);
    }

    #[test]
    fn test_negative_frame_cap_stalls_instead_of_panicking() {
        let mut state = GameState::new(1);
        state.tuning.max_frame_dt = -0.5;
        tick(&mut state, &held(&[Action::Right]), FRAME);
        assert_eq!(state.player.pos(), Vec2::new(100.0, 200.0));

        state.tuning.max_frame_dt = f32::NAN;
        tick(&mut state, &held(&[Action::Right]), FRAME);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_caught_when_overlapping() {
        let mut state = GameState::new(1);
        state.pursuers.push(Pursuer::at(Vec2::new(105.0, 205.0)));
        let events = tick(&mut state, &InputState::default(), FRAME);
        assert_eq!(state.phase, GamePhase::Caught);
        assert_eq!(events, vec![GameEvent::PlayerCaught]);
        // Terminal: nothing fires again
        assert!(tick(&mut state, &InputState::default(), FRAME).is_empty());
    }

    #[test]
    fn test_concealed_player_is_never_caught() {
        let mut state = GameState::new(1);
        state.player.rect.pos = Vec2::new(200.0, 320.0);
        state.toggle_conceal();
        assert!(state.player.concealed());
        for _ in 0..50 {
            // Park a pursuer right on top of the player every tick
            state.pursuers.clear();
            state.pursuers.push(Pursuer::at(Vec2::new(200.0, 320.0)));
            tick(&mut state, &InputState::default(), FRAME);
            assert_eq!(state.phase, GamePhase::Playing);
        }
    }

    #[test]
    fn test_concealed_player_does_not_move() {
        let mut state = GameState::new(1);
        state.player.rect.pos = Vec2::new(200.0, 320.0);
        state.toggle_conceal();
        let events = tick(&mut state, &held(&[Action::Left, Action::Up]), FRAME);
        assert_eq!(state.player.pos(), Vec2::new(200.0, 320.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_position() {
        let mut state = GameState::new(1);
        state.player.rect.pos = Vec2::new(390.0, 300.0);
        state.toggle_conceal();
        state.toggle_conceal();
        assert!(!state.player.concealed());
        assert_eq!(state.player.pos(), Vec2::new(390.0, 300.0));
    }

    #[test]
    fn test_dropoff_fires_once() {
        let mut state = GameState::new(1);
        state.player.rect.pos = Vec2::new(1060.0, 330.0);
        let mut delivered = 0;
        for _ in 0..10 {
            let events = tick(&mut state, &InputState::default(), FRAME);
            delivered += events.iter().filter(|e| **e == GameEvent::ItemDelivered).count();
        }
        assert_eq!(delivered, 1);
        assert!(!state.player.carrying_item);
        assert_eq!(state.objective, Objective::ReturnToStart);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_return_to_start_wins() {
        let mut state = GameState::new(1);
        state.player.carrying_item = false;
        state.objective = Objective::ReturnToStart;
        state.player.rect.pos = Vec2::new(60.0, 310.0);
        let events = tick(&mut state, &InputState::default(), FRAME);
        assert_eq!(state.phase, GamePhase::Delivered);
        assert_eq!(events, vec![GameEvent::ObjectiveCompleted]);
    }

    #[test]
    fn test_start_with_item_does_not_win() {
        let mut state = GameState::new(1);
        state.player.rect.pos = Vec2::new(60.0, 310.0);
        tick(&mut state, &InputState::default(), FRAME);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_caught_takes_priority_over_dropoff() {
        let mut state = GameState::new(1);
        state.player.rect.pos = Vec2::new(1060.0, 330.0);
        state.pursuers.push(Pursuer::at(Vec2::new(1060.0, 330.0)));
        let events = tick(&mut state, &InputState::default(), FRAME);
        assert_eq!(state.phase, GamePhase::Caught);
        assert!(state.player.carrying_item);
        assert!(!events.contains(&GameEvent::ItemDelivered));
    }

    #[test]
    fn test_spawns_after_interval_up_to_cap() {
        let mut state = GameState::new(9);
        // Spawns land on the world edges, well clear of the start position
        for _ in 0..((2.0 / FRAME) as usize + 2) {
            tick(&mut state, &InputState::default(), FRAME);
        }
        assert_eq!(state.pursuers.len(), 1);

        let mut state = GameState::new(9);
        for _ in 0..3 {
            state.pursuers.push(Pursuer::at(Vec2::new(1100.0, 0.0)));
        }
        state.spawner.advance(1999.0, 0, 3, 10_000.0);
        tick(&mut state, &InputState::default(), 0.001);
        assert_eq!(state.pursuers.len(), 3);
        assert_eq!(state.spawner.timer_ms(), 0.0);
    }

    #[test]
    fn test_cap_rises_after_dropoff() {
        let mut state = GameState::new(3);
        state.player.rect.pos = Vec2::new(1060.0, 330.0);
        tick(&mut state, &InputState::default(), FRAME);
        assert!(!state.player.carrying_item);

        // Hide at the last spot so the growing crowd can't catch the player
        state.player.rect.pos = Vec2::new(1000.0, 320.0);
        state.toggle_conceal();
        assert!(state.player.concealed());
        for _ in 0..(7 * 20) {
            tick(&mut state, &InputState::default(), 0.1);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.pursuers.len(), 5);
    }

    #[test]
    fn test_camera_follows_and_freezes_while_hidden() {
        let mut state = GameState::new(1);
        state.player.rect.pos = Vec2::new(700.0, 100.0);
        tick(&mut state, &InputState::default(), FRAME);
        assert_eq!(state.camera.offset_x, 200.0);

        state.player.rect.pos = Vec2::new(1000.0, 320.0);
        state.toggle_conceal();
        tick(&mut state, &InputState::default(), FRAME);
        assert_eq!(state.camera.offset_x, 200.0);
    }

    fn arb_input() -> impl Strategy<Value = (InputState, bool)> {
        (any::<[bool; 4]>(), proptest::bool::weighted(0.05)).prop_map(|(dirs, toggle)| {
            (
                InputState {
                    up: dirs[0],
                    down: dirs[1],
                    left: dirs[2],
                    right: dirs[3],
                },
                toggle,
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn entities_stay_in_bounds(
            seed in any::<u64>(),
            frames in proptest::collection::vec((arb_input(), 0.0f32..0.2), 1..400),
        ) {
            let mut state = GameState::new(seed);
            let (w, h) = (state.arena().width(), state.arena().height());
            for ((input, toggle), dt) in frames {
                if toggle {
                    state.toggle_conceal();
                }
                tick(&mut state, &input, dt);
                prop_assert!(state.player.rect.within(w, h));
                for p in &state.pursuers {
                    prop_assert!(p.rect.within(w, h), "pursuer out of bounds: {:?}", p.rect);
                }
                let max_offset = w - state.tuning().viewport_width;
                prop_assert!(state.camera.offset_x >= 0.0 && state.camera.offset_x <= max_offset);
                prop_assert_eq!(state.player.concealed_at().is_some(), state.player.concealed());
            }
        }
    }
}
