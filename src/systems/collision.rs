//! Contact resolution.
//!
//! The host reports touching pairs through [`CollisionEvent`]. Each side is
//! checked against the other:
//!
//! - a [`DamageDealer`] hurts the other side's [`Health`] unless both share
//!   a team;
//! - a [`Projectile`] is destroyed on touching anything but its owner;
//! - a [`Pickup`] touched by a party member is collected.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::attackdriver::Projectile;
use crate::components::damagedealer::{DamageDealer, Team};
use crate::components::health::Health;
use crate::components::partymember::PartyMember;
use crate::components::pickup::Pickup;
use crate::events::collision::CollisionEvent;
use crate::events::health::DealDamageEvent;
use crate::events::pickup::PickupCollectedEvent;

#[allow(clippy::too_many_arguments)]
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    dealers: Query<&DamageDealer>,
    teams: Query<&Team>,
    healths: Query<(), With<Health>>,
    projectiles: Query<&Projectile>,
    pickups: Query<&Pickup>,
    members: Query<(), With<PartyMember>>,
) {
    let event = trigger.event();
    if event.a == event.b {
        return;
    }
    let team_of = |entity: Entity| {
        teams
            .get(entity)
            .ok()
            .copied()
            .or_else(|| dealers.get(entity).ok().map(|d| d.team))
    };

    for (this, other) in [(event.a, event.b), (event.b, event.a)] {
        if let Ok(dealer) = dealers.get(this) {
            if healths.contains(other) && dealer.can_hurt(team_of(other)) {
                commands.trigger(DealDamageEvent {
                    target: other,
                    amount: dealer.amount,
                    source: Some(this),
                });
            }
        }
        if let Ok(projectile) = projectiles.get(this) {
            if projectile.owner != other {
                debug!("Projectile {:?} hit {:?}", this, other);
                commands.entity(this).try_despawn();
            }
        }
        if let Ok(pickup) = pickups.get(this) {
            if members.contains(other) {
                commands.trigger(PickupCollectedEvent {
                    pickup: this,
                    collector: other,
                    kind: pickup.kind,
                });
            }
        }
    }
}
