//! Movement domain: jump, dive, and fixed-tick locomotion systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    BodySnapshot, DivedEvent, LocomotionController, LocomotionInput, LocomotionTuning, Player,
    PlayerModel, evaluate_dive, evaluate_jump, integrate_tick,
};

pub(crate) fn handle_jump(
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (&LocomotionController, &ComputedMass, &mut LinearVelocity),
        With<Player>,
    >,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (controller, mass, mut velocity) in &mut query {
        let body = BodySnapshot {
            velocity: velocity.0,
            inverse_mass: mass.inverse(),
        };

        // Dropped silently when not grounded, no buffering
        if let Some(new_velocity) = evaluate_jump(controller, body, &tuning) {
            velocity.0 = new_velocity;
            debug!(
                "Jump: posture={:?}, ground={:?}, vy={}",
                controller.posture, controller.ground, new_velocity.y
            );
        }
    }
}

pub(crate) fn handle_dive(
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut dived: MessageWriter<DivedEvent>,
    mut query: Query<
        (
            Entity,
            &mut LocomotionController,
            &ComputedMass,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    if !input.dive_just_pressed {
        return;
    }

    for (entity, mut controller, mass, mut velocity) in &mut query {
        let body = BodySnapshot {
            velocity: velocity.0,
            inverse_mass: mass.inverse(),
        };

        let Some(dive) = evaluate_dive(&controller, body, &tuning) else {
            continue;
        };

        dive.apply_to(&mut controller);
        velocity.0 = dive.change.velocity;
        dived.write(DivedEvent {
            entity,
            posture: dive.change.posture,
        });
        debug!(
            "Dive: posture now {:?}, impulse={} queued, velocity={}",
            dive.change.posture, dive.impulse, dive.change.velocity
        );
    }
}

pub(crate) fn integrate_locomotion(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (&mut LocomotionController, &ComputedMass, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut controller, mass, mut velocity) in &mut query {
        let body = BodySnapshot {
            velocity: velocity.0,
            inverse_mass: mass.inverse(),
        };
        let tick = integrate_tick(&controller, input.axis, body, dt, &tuning);
        tick.apply_to(&mut controller);
        velocity.0 = tick.velocity;
    }
}

/// Copy the controller's pose onto the visible model.
pub(crate) fn sync_model_pose(
    controllers: Query<(&LocomotionController, &Children), With<Player>>,
    mut models: Query<&mut Transform, With<PlayerModel>>,
) {
    for (controller, children) in &controllers {
        let rotation = controller.pose.to_quat();
        for child in children.iter() {
            if let Ok(mut transform) = models.get_mut(child) {
                transform.rotation = rotation;
            }
        }
    }
}
