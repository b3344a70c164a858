//! Content domain: tests for tuning parsing and validation.

use bevy::prelude::*;
use std::path::Path;

use super::data::{LocomotionDef, Vec3Def};
use super::loader::{load_tuning, parse_tuning};
use super::validate_tuning;
use crate::movement::{LocomotionTuning, Pose};

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_empty_file_yields_defaults() {
    let tuning = parse_tuning("inline", "()").unwrap();
    assert_eq!(tuning, LocomotionTuning::default());
}

#[test]
fn test_partial_overrides_keep_other_defaults() {
    let tuning = parse_tuning(
        "inline",
        "(normal_move_speed: 6.0, slide_pose: (roll: -45.0))",
    )
    .unwrap();

    assert_eq!(tuning.normal_move_speed, 6.0);
    assert_eq!(tuning.slide_pose, Pose::new(0.0, 0.0, -45.0));
    assert_eq!(tuning.slide_move_speed, 10.0);
    assert_eq!(tuning.jump_force, 7.0);
}

#[test]
fn test_probe_anchor_override() {
    let tuning = parse_tuning(
        "inline",
        "(standing_probe_anchor: (x: 0.0, y: -1.0, z: 0.0))",
    )
    .unwrap();

    assert_eq!(tuning.standing_probe_anchor, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("locomotion.ron", "(normal_move_speed: \"fast\")").unwrap_err();
    assert_eq!(err.file, "locomotion.ron");
    assert!(err.to_string().contains("locomotion.ron"));
}

#[test]
fn test_missing_file_is_not_an_error() {
    let loaded = load_tuning(Path::new("does/not/exist/locomotion.ron")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_def_applies_onto_existing_tuning() {
    let def = LocomotionDef {
        dive_force: Some(12.0),
        sliding_probe_anchor: Some(Vec3Def {
            x: 0.5,
            y: 0.0,
            z: 0.0,
        }),
        ..Default::default()
    };
    let mut tuning = LocomotionTuning::default();
    def.apply_to(&mut tuning);

    assert_eq!(tuning.dive_force, 12.0);
    assert_eq!(tuning.sliding_probe_anchor, Vec3::new(0.5, 0.0, 0.0));
    assert_eq!(tuning.acceleration, 20.0);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&LocomotionTuning::default()).is_empty());
}

#[test]
fn test_zero_normal_speed_is_rejected() {
    let tuning = LocomotionTuning {
        normal_move_speed: 0.0,
        ..Default::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "normal_move_speed");
}

#[test]
fn test_zero_forces_are_allowed() {
    let tuning = LocomotionTuning {
        jump_force: 0.0,
        dive_force: 0.0,
        acceleration: 0.0,
        ..Default::default()
    };
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_every_bad_field_is_reported() {
    let tuning = LocomotionTuning {
        slide_move_speed: -1.0,
        probe_radius: 0.0,
        jump_force: f32::NAN,
        standing_probe_anchor: Vec3::new(f32::INFINITY, 0.0, 0.0),
        slide_pose: Pose::new(0.0, f32::NAN, -90.0),
        ..Default::default()
    };
    let fields: Vec<_> = validate_tuning(&tuning).iter().map(|e| e.field).collect();

    assert_eq!(
        fields,
        vec![
            "slide_move_speed",
            "probe_radius",
            "jump_force",
            "standing_probe_anchor",
            "slide_pose",
        ]
    );
}
