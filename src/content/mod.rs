//! Content domain: data-driven locomotion tuning loaded at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use loader::{TUNING_PATH, load_validated_tuning};
pub use validation::validate_tuning;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::LocomotionTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .add_systems(PreStartup, load_locomotion_tuning);
    }
}

/// Load tuning before anything is spawned.
/// A tuning file that fails to parse or validate is a fatal configuration error.
fn load_locomotion_tuning(mut tuning: ResMut<LocomotionTuning>) {
    match load_validated_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            info!(
                "Locomotion tuning: normal_speed={}, slide_speed={}, jump={}, dive={}, accel={}",
                loaded.normal_move_speed,
                loaded.slide_move_speed,
                loaded.jump_force,
                loaded.dive_force,
                loaded.acceleration
            );
            *tuning = loaded;
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            panic!(
                "Invalid locomotion configuration ({} error(s)), see log",
                errors.len()
            );
        }
    }
}
