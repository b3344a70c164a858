//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::LocomotionInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<LocomotionInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut jump = keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let mut dive =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);

    // First connected gamepad only
    if let Some(gamepad) = gamepads.iter().next() {
        x += gamepad.left_stick().x;
        jump |= gamepad.just_pressed(GamepadButton::South);
        dive |= gamepad.just_pressed(GamepadButton::East);
    }

    input.axis = x.clamp(-1.0, 1.0);
    input.jump_just_pressed = jump;
    input.dive_just_pressed = dive;
}
