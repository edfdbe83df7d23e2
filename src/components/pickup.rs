//! Collectible pickups.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::partymember::CharacterType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Heal the collector by the given amount.
    Health(i32),
    Invulnerability,
    SpeedBoost,
    /// Unlock a character for future runs.
    CharacterRescue(CharacterType),
}

/// Collected when a party member touches it, then despawned.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    pub kind: PickupKind,
}

impl Pickup {
    pub fn new(kind: PickupKind) -> Self {
        Pickup { kind }
    }

    pub fn rescue(character: CharacterType) -> Self {
        Pickup {
            kind: PickupKind::CharacterRescue(character),
        }
    }
}
