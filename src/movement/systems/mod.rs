//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{handle_dive, handle_jump, integrate_locomotion, sync_model_pose};
