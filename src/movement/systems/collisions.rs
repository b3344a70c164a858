//! Movement domain: ground probes against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundProbes, GroundQuery, LocomotionController, LocomotionTuning, Player,
    sense_ground,
};

impl GroundQuery for SpatialQuery<'_, '_> {
    fn overlaps_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);
        !self
            .shape_intersections(&Collider::circle(radius), center, 0.0, &filter)
            .is_empty()
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&Transform, &GroundProbes, &mut LocomotionController), With<Player>>,
) {
    // Only Ground layer entities count (not walls or other characters)
    let ground_mask = LayerMask::from(GameLayer::Ground);

    for (transform, probes, mut controller) in &mut query {
        let previous = controller.ground;

        let ground = sense_ground(
            &spatial_query,
            transform.translation.truncate(),
            controller.pose,
            probes,
            tuning.probe_radius,
            ground_mask,
        );
        controller.ground = ground;

        if ground.standing != previous.standing {
            debug!("Standing probe contact: {}", ground.standing);
        }
        if ground.sliding != previous.sliding {
            debug!("Sliding probe contact: {}", ground.sliding);
        }
        if ground.airborne() && !previous.airborne() {
            debug!("Left ground: posture={:?}", controller.posture);
        } else if !ground.airborne() && previous.airborne() {
            debug!("Landed: posture={:?}", controller.posture);
        }
    }
}
