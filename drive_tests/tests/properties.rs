//! Behavioral properties of the vehicle update and key mapping, exercised
//! through the `Game` context.

use drive_client::{
    game::Game,
    input::{Key, KeyEvent},
};
use drive_shared::{
    controls::{Control, ControlSet},
    vehicle::VehicleState,
};

#[test]
fn held_right_turn_keeps_heading_in_range() {
    let mut game = Game::default();
    game.on_key_down(&Key::ArrowRight, false);
    for _ in 0..1000 {
        game.update(16.0);
        let h = game.state().heading;
        assert!((0.0..360.0).contains(&h), "heading {h}");
    }
}

#[test]
fn held_left_turn_keeps_heading_in_range() {
    let mut game = Game::default();
    game.on_key_down(&Key::ArrowLeft, false);
    for _ in 0..1000 {
        game.update(16.0);
        let h = game.state().heading;
        assert!((0.0..360.0).contains(&h), "heading {h}");
    }
}

#[test]
fn both_turns_from_zero_leave_heading_unchanged() {
    let mut game = Game::default();
    game.on_key_down(&Key::ArrowRight, false);
    game.on_key_down(&Key::ArrowLeft, false);
    game.update(0.0);
    assert_eq!(game.state().heading, 0.0);
}

#[test]
fn repeat_key_down_does_not_press() {
    let mut game = Game::default();
    assert!(!game.on_key_down(&Key::ArrowUp, true));
    assert!(!game.state().accelerating());
}

#[test]
fn repeat_key_up_does_not_release() {
    let mut game = Game::default();
    game.on_key_down(&Key::ArrowUp, false);
    game.on_key_up(&Key::ArrowUp, true);
    assert!(game.state().accelerating());
}

#[test]
fn ten_units_per_second_along_x() {
    let mut game = Game::default();
    game.state_mut().speed = 10.0;
    game.update(1000.0);
    assert_eq!(game.state().x, 10.0);
    assert_eq!(game.state().y, 0.0);
}

#[test]
fn zero_dt_accelerates_without_moving() {
    let mut game = Game::default();
    game.handle_key(&KeyEvent::down(Key::ArrowUp));
    for _ in 0..3 {
        game.update(0.0);
    }
    assert_eq!(game.state().speed, 3.0);
    assert_eq!((game.state().x, game.state().y), (0.0, 0.0));
}

#[test]
fn idle_zero_dt_is_idempotent_for_every_heading() {
    for heading in (0..360).step_by(15) {
        let mut state = VehicleState {
            x: -7.25,
            y: 3.0,
            heading: heading as f64,
            speed: 12.0,
            controls: ControlSet::empty(),
        };
        let before = state;
        for _ in 0..5 {
            state.update(0.0);
        }
        assert_eq!(state, before, "heading {heading}");
    }
}

#[test]
fn every_control_combination_keeps_invariants() {
    for bits in 0u8..16 {
        let controls: ControlSet = Control::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << *i) != 0)
            .map(|(_, c)| *c)
            .collect();
        let mut state = VehicleState {
            controls,
            ..VehicleState::default()
        };
        for _ in 0..100 {
            state.update(16.0);
            assert!((0.0..360.0).contains(&state.heading));
        }

        let expected_speed = match (state.accelerating(), state.braking()) {
            (true, false) => 100.0,
            (false, true) => -100.0,
            _ => 0.0,
        };
        assert_eq!(state.speed, expected_speed, "controls {controls:?}");
    }
}

#[test]
fn unknown_keys_never_change_controls() {
    let mut game = Game::default();
    game.on_key_down(&Key::ArrowDown, false);
    let before = game.state().controls;
    for name in ["a", "Enter", "arrowup", "Escape", " "] {
        let key = Key::from_name(name);
        assert!(!game.on_key_down(&key, false));
        assert!(!game.on_key_up(&key, false));
    }
    assert_eq!(game.state().controls, before);
}
