//! Movement domain: slide/dive locomotion plugin wiring and public exports.
//!
//! Frame work (input, ground probes, jump, dive) runs in `Update`; horizontal
//! velocity and facing integrate in `FixedUpdate`.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;


pub use components::{
    GameLayer, GroundProbes, GroundState, LocomotionController, Player, PlayerModel, Pose, Posture,
};
pub use controller::{
    BodySnapshot, GroundQuery, YAW_LEFT, YAW_RIGHT, can_jump, evaluate_dive, evaluate_jump,
    facing_yaw, integrate_tick, move_towards, probe_position, sample_ground, sense_ground,
    toggle_posture,
};
pub use events::DivedEvent;
pub use resources::{FACING_DEAD_ZONE, LocomotionInput, LocomotionTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::{apply_posture_collider, spawn_player, spawn_test_level};
use crate::movement::systems::{
    detect_ground, handle_dive, handle_jump, integrate_locomotion, read_input, sync_model_pose,
};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Once per rendered frame
    Frame,
    /// Once per fixed physics tick
    Tick,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionInput>()
            .register_type::<LocomotionController>()
            .register_type::<GroundProbes>()
            .add_message::<DivedEvent>()
            .add_systems(Startup, (spawn_test_level, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    handle_jump,
                    handle_dive,
                    apply_posture_collider,
                    sync_model_pose,
                )
                    .chain()
                    .in_set(LocomotionSet::Frame),
            )
            .add_systems(
                FixedUpdate,
                integrate_locomotion.in_set(LocomotionSet::Tick),
            );

        #[cfg(feature = "dev-tools")]
        {
            use crate::movement::dev::{
                ProbeOverlay, draw_probe_overlay, reload_tuning, toggle_probe_overlay,
            };

            app.init_resource::<ProbeOverlay>().add_systems(
                Update,
                (
                    toggle_probe_overlay,
                    reload_tuning,
                    draw_probe_overlay.after(LocomotionSet::Frame),
                ),
            );
        }
    }
}
