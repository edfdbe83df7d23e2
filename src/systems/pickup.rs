//! Pickup effects.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::pickup::{Pickup, PickupKind};
use crate::events::health::HealEvent;
use crate::events::pickup::PickupCollectedEvent;
use crate::events::progress::{CharacterRescuedEvent, UnlocksChangedEvent};
use crate::resources::unlocks::CharacterUnlocks;

/// Apply a collected pickup and remove it from the world.
///
/// Rescuing a character that is already unlocked changes nothing and
/// announces nothing.
pub fn pickup_observer(
    trigger: On<PickupCollectedEvent>,
    mut commands: Commands,
    unlocks: Option<ResMut<CharacterUnlocks>>,
    pickups: Query<(), With<Pickup>>,
) {
    let event = trigger.event();
    if !pickups.contains(event.pickup) {
        return;
    }
    match event.kind {
        PickupKind::Health(amount) => {
            commands.trigger(HealEvent {
                target: event.collector,
                amount,
            });
        }
        PickupKind::CharacterRescue(character) => {
            if let Some(mut unlocks) = unlocks {
                if unlocks.rescue(character) {
                    info!("{} rescued", character);
                    commands.trigger(CharacterRescuedEvent { character });
                    commands.trigger(UnlocksChangedEvent {
                        unlocked: unlocks.unlocked().to_vec(),
                    });
                }
            }
        }
        PickupKind::Invulnerability | PickupKind::SpeedBoost => {
            debug!("{:?} collected, no effect", event.kind);
        }
    }
    commands.entity(event.pickup).try_despawn();
}
