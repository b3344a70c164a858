//! Validation for locomotion tuning values.

use bevy::prelude::*;

use crate::movement::LocomotionTuning;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "locomotion tuning field '{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a scalar against a lower bound
macro_rules! check_scalar {
    ($errors:expr, $tuning:expr, $field:ident, > $bound:expr) => {
        let value = $tuning.$field;
        if !value.is_finite() || value <= $bound {
            $errors.push(TuningError {
                field: stringify!($field),
                message: format!("must be a finite value above {}, got {}", $bound, value),
            });
        }
    };
    ($errors:expr, $tuning:expr, $field:ident, >= $bound:expr) => {
        let value = $tuning.$field;
        if !value.is_finite() || value < $bound {
            $errors.push(TuningError {
                field: stringify!($field),
                message: format!("must be a finite value of at least {}, got {}", $bound, value),
            });
        }
    };
}

fn check_anchor(errors: &mut Vec<TuningError>, field: &'static str, anchor: Vec3) {
    if !anchor.is_finite() {
        errors.push(TuningError {
            field,
            message: format!("must be a finite offset, got {}", anchor),
        });
    }
}

/// Validate all tuning values.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    // Normal speed divides the posture rescale ratio
    check_scalar!(errors, tuning, normal_move_speed, > 0.0);
    check_scalar!(errors, tuning, slide_move_speed, > 0.0);
    check_scalar!(errors, tuning, probe_radius, > 0.0);
    check_scalar!(errors, tuning, jump_force, >= 0.0);
    check_scalar!(errors, tuning, dive_force, >= 0.0);
    check_scalar!(errors, tuning, acceleration, >= 0.0);

    check_anchor(
        &mut errors,
        "standing_probe_anchor",
        tuning.standing_probe_anchor,
    );
    check_anchor(
        &mut errors,
        "sliding_probe_anchor",
        tuning.sliding_probe_anchor,
    );

    let pose = tuning.slide_pose;
    if !(pose.pitch.is_finite() && pose.yaw.is_finite() && pose.roll.is_finite()) {
        errors.push(TuningError {
            field: "slide_pose",
            message: format!("must have finite angles, got {:?}", pose),
        });
    }

    errors
}
