use bevy_ecs::prelude::*;

use crate::components::partymember::CharacterType;
use crate::resources::spawntable::TemplateId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnKind {
    Enemy(TemplateId),
    Obstacle(TemplateId),
    Rescue(CharacterType),
}

/// A director instantiated something.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SpawnedEvent {
    pub entity: Entity,
    pub kind: SpawnKind,
}
