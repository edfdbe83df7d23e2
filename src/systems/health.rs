//! Damage and healing observers.
//!
//! All hit point changes go through [`DealDamageEvent`] and [`HealEvent`]
//! so every change is announced. A killing blow triggers [`DiedEvent`]
//! exactly once; party members are then handled by the party observers and
//! every other dead entity is despawned by [`despawn_dead_spawns`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::health::{DamageOutcome, Health};
use crate::components::partymember::PartyMember;
use crate::events::health::{DamagedEvent, DealDamageEvent, DiedEvent, HealEvent, HealedEvent};

pub fn damage_observer(
    trigger: On<DealDamageEvent>,
    mut commands: Commands,
    mut healths: Query<&mut Health>,
) {
    let event = trigger.event();
    let Ok(mut health) = healths.get_mut(event.target) else {
        return;
    };
    match health.damage(event.amount) {
        DamageOutcome::Ignored => {}
        DamageOutcome::Damaged { amount } => {
            commands.trigger(DamagedEvent {
                entity: event.target,
                amount,
                remaining: health.current(),
            });
        }
        DamageOutcome::Killed { amount } => {
            debug!("{:?} killed by {:?}", event.target, event.source);
            commands.trigger(DamagedEvent {
                entity: event.target,
                amount,
                remaining: 0,
            });
            commands.trigger(DiedEvent {
                entity: event.target,
            });
        }
    }
}

pub fn heal_observer(
    trigger: On<HealEvent>,
    mut commands: Commands,
    mut healths: Query<&mut Health>,
) {
    let event = trigger.event();
    let Ok(mut health) = healths.get_mut(event.target) else {
        return;
    };
    let restored = health.heal(event.amount);
    if restored > 0 {
        commands.trigger(HealedEvent {
            entity: event.target,
            amount: restored,
            current: health.current(),
        });
    }
}

/// Dead enemies and obstacles leave the world. Party members stay, benched
/// as dead.
pub fn despawn_dead_spawns(
    trigger: On<DiedEvent>,
    mut commands: Commands,
    members: Query<(), With<PartyMember>>,
) {
    let entity = trigger.event().entity;
    if members.contains(entity) {
        return;
    }
    commands.entity(entity).try_despawn();
}
