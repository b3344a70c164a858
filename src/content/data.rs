//! Serializable definitions for data-driven locomotion tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{LocomotionTuning, Pose};

/// Serializable Vec3 for RON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vec3Def {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3Def> for Vec3 {
    fn from(v: Vec3Def) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Serializable pose in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PoseDef {
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub roll: f32,
}

impl From<PoseDef> for Pose {
    fn from(p: PoseDef) -> Self {
        Pose::new(p.pitch, p.yaw, p.roll)
    }
}

/// Overrides for `LocomotionTuning`. Omitted fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionDef {
    pub normal_move_speed: Option<f32>,
    pub slide_move_speed: Option<f32>,
    pub jump_force: Option<f32>,
    pub dive_force: Option<f32>,
    pub acceleration: Option<f32>,
    pub probe_radius: Option<f32>,
    pub standing_probe_anchor: Option<Vec3Def>,
    pub sliding_probe_anchor: Option<Vec3Def>,
    pub slide_pose: Option<PoseDef>,
}

impl LocomotionDef {
    pub fn apply_to(&self, tuning: &mut LocomotionTuning) {
        macro_rules! override_field {
            ($field:ident) => {
                if let Some(value) = self.$field {
                    tuning.$field = value.into();
                }
            };
        }

        override_field!(normal_move_speed);
        override_field!(slide_move_speed);
        override_field!(jump_force);
        override_field!(dive_force);
        override_field!(acceleration);
        override_field!(probe_radius);
        override_field!(standing_probe_anchor);
        override_field!(sliding_probe_anchor);
        override_field!(slide_pose);
    }

    pub fn into_tuning(self) -> LocomotionTuning {
        let mut tuning = LocomotionTuning::default();
        self.apply_to(&mut tuning);
        tuning
    }
}
