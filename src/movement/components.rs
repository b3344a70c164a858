//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Child entity carrying the visible body and its pose rotation.
/// The physics root keeps its rotation locked.
#[derive(Component, Debug)]
pub struct PlayerModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Posture {
    #[default]
    Standing,
    Sliding,
}

impl Posture {
    pub fn toggled(self) -> Self {
        match self {
            Posture::Standing => Posture::Sliding,
            Posture::Sliding => Posture::Standing,
        }
    }
}

/// Ground contact for both probes, sampled every frame regardless of posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct GroundState {
    pub standing: bool,
    pub sliding: bool,
}

impl GroundState {
    pub fn airborne(&self) -> bool {
        !self.standing && !self.sliding
    }
}

/// Body orientation in degrees.
///
/// Converted with yaw about Y first, then pitch about X, then roll about Z,
/// so yaw can flip the facing without disturbing an applied roll.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct Pose {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Pose {
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        Self {
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
        }
    }

    /// Local +X axis in world space.
    pub fn forward(self) -> Vec3 {
        self.to_quat() * Vec3::X
    }

    pub fn with_yaw(self, yaw: f32) -> Self {
        Self { yaw, ..self }
    }
}

/// Per-character locomotion state machine.
#[derive(Component, Debug, Clone, Reflect)]
pub struct LocomotionController {
    pub posture: Posture,
    pub ground: GroundState,
    /// Horizontal velocity after rate limiting; written to the body every tick.
    pub smoothed_velocity: f32,
    pub pose: Pose,
    /// Pose captured at spawn, restored when returning to Standing.
    pub standing_pose: Pose,
    /// Dive impulse waiting for the next physics tick.
    pub pending_impulse: Vec2,
}

impl LocomotionController {
    pub fn new(spawn_pose: Pose) -> Self {
        Self {
            posture: Posture::Standing,
            ground: GroundState::default(),
            smoothed_velocity: 0.0,
            pose: spawn_pose,
            standing_pose: spawn_pose,
            pending_impulse: Vec2::ZERO,
        }
    }
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(Pose::default())
    }
}

/// Probe anchors as offsets in the model's pose frame.
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct GroundProbes {
    pub standing: Vec3,
    pub sliding: Vec3,
}
