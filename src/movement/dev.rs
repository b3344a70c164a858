//! Movement domain: debug-only probe overlay and tuning reload.

use bevy::prelude::*;
use std::path::Path;

use crate::content::{TUNING_PATH, load_validated_tuning};
use crate::movement::{
    GroundProbes, LocomotionController, LocomotionTuning, Player, probe_position,
};

/// Resource tracking whether the probe overlay is drawn
#[derive(Resource, Debug, Default)]
pub struct ProbeOverlay {
    pub visible: bool,
}

/// Toggle the probe overlay with F1
pub(crate) fn toggle_probe_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<ProbeOverlay>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        overlay.visible = !overlay.visible;
        info!("Probe overlay: {}", overlay.visible);
    }
}

/// Draw both ground probes and the facing direction.
pub(crate) fn draw_probe_overlay(
    overlay: Res<ProbeOverlay>,
    tuning: Res<LocomotionTuning>,
    query: Query<(&Transform, &GroundProbes, &LocomotionController), With<Player>>,
    mut gizmos: Gizmos,
) {
    if !overlay.visible {
        return;
    }

    let contact_color = |touching: bool| {
        if touching {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        }
    };

    for (transform, probes, controller) in &query {
        let origin = transform.translation.truncate();
        let pose = controller.pose;

        gizmos.circle_2d(
            probe_position(origin, pose, probes.standing),
            tuning.probe_radius,
            contact_color(controller.ground.standing),
        );
        gizmos.circle_2d(
            probe_position(origin, pose, probes.sliding),
            tuning.probe_radius,
            contact_color(controller.ground.sliding),
        );
        gizmos.arrow_2d(
            origin,
            origin + pose.forward().truncate() * 0.75,
            Color::srgb(0.9, 0.8, 0.2),
        );
    }
}

/// Reload the tuning file with F5.
/// Unlike startup, a bad file is rejected and the current tuning kept.
pub(crate) fn reload_tuning(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<LocomotionTuning>,
    mut probes: Query<&mut GroundProbes, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    match load_validated_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            for mut p in &mut probes {
                p.standing = loaded.standing_probe_anchor;
                p.sliding = loaded.sliding_probe_anchor;
            }
            *tuning = loaded;
            info!("Reloaded locomotion tuning");
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Tuning reload rejected, keeping current values");
        }
    }
}
