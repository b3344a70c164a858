//! Movement domain: player and test level bootstrap.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    DivedEvent, GameLayer, GroundProbes, LocomotionController, LocomotionTuning, Player,
    PlayerModel, Pose, Posture,
};

/// Collider size while standing (width, height).
pub const STANDING_BODY_SIZE: Vec2 = Vec2::new(0.5, 1.0);
/// Collider size while lying in a slide.
pub const SLIDING_BODY_SIZE: Vec2 = Vec2::new(1.0, 0.5);

pub fn body_collider(posture: Posture) -> Collider {
    let size = match posture {
        Posture::Standing => STANDING_BODY_SIZE,
        Posture::Sliding => SLIDING_BODY_SIZE,
    };
    Collider::rectangle(size.x, size.y)
}

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<LocomotionTuning>) {
    let model_transform = Transform::default();
    // Captured once; restored every time the player stands back up
    let spawn_pose = Pose::from_quat(model_transform.rotation);

    info!(
        "Spawning player: pose={:?}, standing_probe={}, sliding_probe={}",
        spawn_pose, tuning.standing_probe_anchor, tuning.sliding_probe_anchor
    );

    commands.spawn((
        // Identity & Locomotion
        (
            Player,
            LocomotionController::new(spawn_pose),
            GroundProbes {
                standing: tuning.standing_probe_anchor,
                sliding: tuning.sliding_probe_anchor,
            },
        ),
        Transform::from_xyz(0.0, 2.0, 0.0),
        Visibility::default(),
        // Physics
        (
            RigidBody::Dynamic,
            body_collider(Posture::Standing),
            Mass(1.0),
            NoAutoMass,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
        // Rendering
        children![(
            PlayerModel,
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(STANDING_BODY_SIZE),
                ..default()
            },
            model_transform,
        )],
    ));
}

/// Match the physics shape to the posture entered by a dive.
pub(crate) fn apply_posture_collider(mut commands: Commands, mut dived: MessageReader<DivedEvent>) {
    for event in dived.read() {
        commands
            .entity(event.entity)
            .insert(body_collider(event.posture));
    }
}

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut spawn_block = |layers: CollisionLayers, color: Color, size: Vec2, position: Vec2| {
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ));
    };

    // Floor
    spawn_block(ground_layers, ground_color, Vec2::new(30.0, 1.0), Vec2::new(0.0, -3.0));

    // Side walls
    spawn_block(wall_layers, wall_color, Vec2::new(1.0, 12.0), Vec2::new(-15.5, 2.5));
    spawn_block(wall_layers, wall_color, Vec2::new(1.0, 12.0), Vec2::new(15.5, 2.5));

    // Platforms to dive off
    spawn_block(ground_layers, platform_color, Vec2::new(4.0, 0.4), Vec2::new(-8.0, 0.5));
    spawn_block(ground_layers, platform_color, Vec2::new(4.0, 0.4), Vec2::new(7.0, 2.0));
    spawn_block(ground_layers, platform_color, Vec2::new(3.0, 0.4), Vec2::new(0.0, 4.0));
}
