//! Core domain: camera, fixed tick rate, and world gravity.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics tick rate; one tick lasts 0.02 s.
pub const FIXED_TICK_HZ: f64 = 50.0;

/// World units per screen pixel.
pub const CAMERA_SCALE: f32 = 1.0 / 40.0;

pub const GRAVITY: f32 = 9.81;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
