//! Movement domain: pure locomotion rules.
//!
//! Everything here works on plain snapshots so the ECS systems only have to
//! gather inputs and write results back.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    FACING_DEAD_ZONE, GroundProbes, GroundState, LocomotionController, LocomotionTuning, Pose,
    Posture,
};

/// Facing yaw (degrees) when moving right.
pub const YAW_RIGHT: f32 = 0.0;
/// Facing yaw (degrees) when moving left.
pub const YAW_LEFT: f32 = 180.0;

/// Read-only access to static and kinematic ground geometry.
pub trait GroundQuery {
    fn overlaps_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool;
}

/// What the controller needs to know about the rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub velocity: Vec2,
    pub inverse_mass: f32,
}

impl BodySnapshot {
    /// Velocity after an instantaneous impulse.
    pub fn with_impulse(&self, impulse: Vec2) -> Vec2 {
        self.velocity + impulse * self.inverse_mass
    }
}

pub fn sample_ground(world: &impl GroundQuery, probe: Vec2, radius: f32, mask: LayerMask) -> bool {
    world.overlaps_circle(probe, radius, mask)
}

/// World position of a probe anchored in the body's pose frame.
pub fn probe_position(body_position: Vec2, pose: Pose, anchor: Vec3) -> Vec2 {
    body_position + (pose.to_quat() * anchor).truncate()
}

/// Samples both probes. Both are always queried, whatever the posture.
pub fn sense_ground(
    world: &impl GroundQuery,
    body_position: Vec2,
    pose: Pose,
    probes: &GroundProbes,
    radius: f32,
    mask: LayerMask,
) -> GroundState {
    GroundState {
        standing: sample_ground(
            world,
            probe_position(body_position, pose, probes.standing),
            radius,
            mask,
        ),
        sliding: sample_ground(
            world,
            probe_position(body_position, pose, probes.sliding),
            radius,
            mask,
        ),
    }
}

pub fn can_jump(posture: Posture, ground: GroundState) -> bool {
    ground.standing || (posture == Posture::Sliding && ground.sliding)
}

/// Returns the body velocity after a jump, or `None` if the jump is not allowed.
pub fn evaluate_jump(
    controller: &LocomotionController,
    body: BodySnapshot,
    tuning: &LocomotionTuning,
) -> Option<Vec2> {
    if !can_jump(controller.posture, controller.ground) {
        return None;
    }
    Some(body.with_impulse(Vec2::Y * tuning.jump_force))
}

/// Result of toggling posture: new posture, pose, and rescaled body velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostureChange {
    pub posture: Posture,
    pub pose: Pose,
    pub velocity: Vec2,
}

pub fn toggle_posture(
    controller: &LocomotionController,
    velocity: Vec2,
    tuning: &LocomotionTuning,
) -> PostureChange {
    let posture = controller.posture.toggled();
    let pose = tuning
        .posture_params(posture)
        .pose
        .unwrap_or(controller.standing_pose);

    PostureChange {
        posture,
        pose,
        velocity: Vec2::new(velocity.x * tuning.speed_ratio(posture), velocity.y),
    }
}

/// A dive: impulse and posture change, always applied together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiveOutcome {
    pub impulse: Vec2,
    pub change: PostureChange,
}

impl DiveOutcome {
    /// Switches posture now; the impulse waits for the next physics tick.
    pub fn apply_to(&self, controller: &mut LocomotionController) {
        controller.posture = self.change.posture;
        controller.pose = self.change.pose;
        controller.pending_impulse += self.impulse;
    }
}

/// Only allowed while both probes are off the ground.
///
/// The impulse follows the pose held before the toggle. It is not part of
/// `change.velocity`: it is queued on the controller and added by
/// `integrate_tick` after the smoothed overwrite, so the solver sees it.
pub fn evaluate_dive(
    controller: &LocomotionController,
    body: BodySnapshot,
    tuning: &LocomotionTuning,
) -> Option<DiveOutcome> {
    if !controller.ground.airborne() {
        return None;
    }

    let impulse = (controller.pose.forward() * tuning.dive_force).truncate();
    let change = toggle_posture(controller, body.velocity, tuning);

    Some(DiveOutcome { impulse, change })
}

/// Moves `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Yaw for the given horizontal input, holding `current` inside the dead zone.
pub fn facing_yaw(axis: f32, current: f32) -> f32 {
    if axis > FACING_DEAD_ZONE {
        YAW_RIGHT
    } else if axis < -FACING_DEAD_ZONE {
        YAW_LEFT
    } else {
        current
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub smoothed_velocity: f32,
    pub pose: Pose,
    pub velocity: Vec2,
}

impl TickOutcome {
    pub fn apply_to(&self, controller: &mut LocomotionController) {
        controller.smoothed_velocity = self.smoothed_velocity;
        controller.pose = self.pose;
        // Consumed by this tick's velocity
        controller.pending_impulse = Vec2::ZERO;
    }
}

/// One fixed physics tick of horizontal locomotion and facing.
///
/// Queued impulses are added after the smoothed value replaces the body's
/// horizontal velocity, so they last exactly one solver step.
pub fn integrate_tick(
    controller: &LocomotionController,
    axis: f32,
    body: BodySnapshot,
    dt: f32,
    tuning: &LocomotionTuning,
) -> TickOutcome {
    let speed_cap = tuning.posture_params(controller.posture).speed_cap;
    let target = axis * speed_cap;
    let smoothed_velocity = move_towards(
        controller.smoothed_velocity,
        target,
        tuning.acceleration * dt,
    );

    TickOutcome {
        smoothed_velocity,
        pose: controller
            .pose
            .with_yaw(facing_yaw(axis, controller.pose.yaw)),
        velocity: BodySnapshot {
            velocity: Vec2::new(smoothed_velocity, body.velocity.y),
            ..body
        }
        .with_impulse(controller.pending_impulse),
    }
}
