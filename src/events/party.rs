//! Party membership events.

use bevy_ecs::prelude::*;

use crate::components::partymember::CharacterType;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MemberDiedEvent {
    pub entity: Entity,
    pub character: CharacterType,
    pub roster_index: usize,
}

/// Every member is dead. Fired at most once per run.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PartyWipedEvent;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ActiveMemberChangedEvent {
    pub previous: Option<usize>,
    pub index: usize,
    pub entity: Entity,
    pub character: CharacterType,
}
