//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::{Pose, Posture};

/// Radius of each ground probe, in world units.
pub const GROUND_PROBE_RADIUS: f32 = 0.1;

/// Horizontal input magnitude below which facing is left unchanged.
pub const FACING_DEAD_ZONE: f32 = 0.1;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LocomotionTuning {
    pub normal_move_speed: f32,
    pub slide_move_speed: f32,
    /// Impulse applied upward on jump.
    pub jump_force: f32,
    /// Impulse applied along the body's forward axis on dive.
    pub dive_force: f32,
    /// Maximum change of horizontal velocity per second.
    pub acceleration: f32,
    pub probe_radius: f32,
    pub standing_probe_anchor: Vec3,
    pub sliding_probe_anchor: Vec3,
    pub slide_pose: Pose,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            normal_move_speed: 5.0,
            slide_move_speed: 10.0,
            jump_force: 7.0,
            dive_force: 10.0,
            acceleration: 20.0,
            probe_radius: GROUND_PROBE_RADIUS,
            // Feet of a 0.5 x 1.0 body
            standing_probe_anchor: Vec3::new(0.0, -0.5, 0.0),
            // Rolled -90 degrees this lands under the body's side
            sliding_probe_anchor: Vec3::new(0.25, 0.0, 0.0),
            slide_pose: Pose::new(0.0, 0.0, -90.0),
        }
    }
}

/// Posture-dependent locomotion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostureParams {
    pub speed_cap: f32,
    /// Fixed pose for postures that impose one; `None` restores the spawn pose.
    pub pose: Option<Pose>,
}

impl LocomotionTuning {
    pub fn posture_params(&self, posture: Posture) -> PostureParams {
        match posture {
            Posture::Standing => PostureParams {
                speed_cap: self.normal_move_speed,
                pose: None,
            },
            Posture::Sliding => PostureParams {
                speed_cap: self.slide_move_speed,
                pose: Some(self.slide_pose),
            },
        }
    }

    /// Ratio applied to horizontal velocity when entering `posture`.
    pub fn speed_ratio(&self, posture: Posture) -> f32 {
        self.posture_params(posture).speed_cap / self.normal_move_speed
    }
}

#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub dive_just_pressed: bool,
}
