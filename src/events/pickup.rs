use bevy_ecs::prelude::*;

use crate::components::pickup::PickupKind;

/// A party member touched a pickup. The pickup is despawned afterwards.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PickupCollectedEvent {
    pub pickup: Entity,
    pub collector: Entity,
    pub kind: PickupKind,
}
