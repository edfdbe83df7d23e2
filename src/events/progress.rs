//! Run progress and character unlock events.

use bevy_ecs::prelude::*;

use crate::components::partymember::CharacterType;

/// Fired every frame while the run advances.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DistanceChangedEvent {
    pub distance: f32,
}

/// Fired when the rounded score changes.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScoreChangedEvent {
    pub score: i64,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CharacterRescuedEvent {
    pub character: CharacterType,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct UnlocksChangedEvent {
    pub unlocked: Vec<CharacterType>,
}
