//! Motion domain: per-frame input sampling and edge latching.

use bevy::prelude::*;

use crate::motion::{InputLatch, InputSettings, InputSnapshot};

/// Apply dead zones, optionally snapping each axis to -1/0/1.
pub fn snap_axes(raw: Vec2, settings: &InputSettings) -> Vec2 {
    let axis = |value: f32, dead_zone: f32| {
        if value.abs() < dead_zone {
            0.0
        } else if settings.snap_input {
            value.signum()
        } else {
            value.clamp(-1.0, 1.0)
        }
    };
    Vec2::new(
        axis(raw.x, settings.horizontal_dead_zone),
        axis(raw.y, settings.vertical_dead_zone),
    )
}

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    settings: Res<InputSettings>,
    fixed_time: Res<Time<Fixed>>,
    mut snapshot: ResMut<InputSnapshot>,
    mut latch: ResMut<InputLatch>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (grapple aim)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let jump_keys = [KeyCode::Space, KeyCode::KeyK];
    let grapple_keys = [KeyCode::KeyE, KeyCode::KeyL];
    let boost_keys = [KeyCode::ShiftLeft, KeyCode::KeyJ];

    let mut next = InputSnapshot {
        move_axes: Vec2::new(x, y),
        jump_pressed: keyboard.any_just_pressed(jump_keys),
        jump_held: keyboard.any_pressed(jump_keys),
        grapple_pressed: keyboard.any_just_pressed(grapple_keys),
        grapple_released: keyboard.any_just_released(grapple_keys),
        boost_pressed: keyboard.any_just_pressed(boost_keys),
        boost_held: keyboard.any_pressed(boost_keys),
        boost_released: keyboard.any_just_released(boost_keys),
    };

    for gamepad in &gamepads {
        next.move_axes += gamepad.left_stick();
        next.jump_pressed |= gamepad.just_pressed(GamepadButton::South);
        next.jump_held |= gamepad.pressed(GamepadButton::South);
        next.grapple_pressed |= gamepad.just_pressed(GamepadButton::RightTrigger);
        next.grapple_released |= gamepad.just_released(GamepadButton::RightTrigger);
        next.boost_pressed |= gamepad.just_pressed(GamepadButton::West);
        next.boost_held |= gamepad.pressed(GamepadButton::West);
        next.boost_released |= gamepad.just_released(GamepadButton::West);
    }

    next.move_axes = snap_axes(next.move_axes, &settings);

    latch.latch_snapshot(&next, fixed_time.elapsed_secs());
    *snapshot = next;
}
