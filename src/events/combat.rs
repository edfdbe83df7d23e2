//! Attack and ability events.

use bevy_ecs::prelude::*;

use crate::components::attackdriver::ActionKind;
use crate::components::partymember::CharacterType;

/// An attack or ability was accepted. Fired before its effect is spawned.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ActionPerformedEvent {
    pub entity: Entity,
    pub character: CharacterType,
    pub kind: ActionKind,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CooldownChangedEvent {
    pub entity: Entity,
    pub kind: ActionKind,
    pub remaining: f32,
    /// Share of the cooldown still to run, 0 when ready.
    pub fraction: f32,
}
