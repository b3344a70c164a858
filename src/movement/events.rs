//! Movement domain: locomotion messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Posture;

/// Emitted when a dive toggles posture, carrying the posture entered
#[derive(Debug)]
pub struct DivedEvent {
    pub entity: Entity,
    pub posture: Posture,
}

impl Message for DivedEvent {}
