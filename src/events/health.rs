//! Damage and healing requests and their outcomes.

use bevy_ecs::prelude::*;

/// Request to hurt `target`. Non-positive amounts are ignored.
#[derive(Event, Debug, Clone, Copy)]
pub struct DealDamageEvent {
    pub target: Entity,
    pub amount: i32,
    pub source: Option<Entity>,
}

/// Request to heal `target`. Non-positive amounts are ignored.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealEvent {
    pub target: Entity,
    pub amount: i32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamagedEvent {
    pub entity: Entity,
    pub amount: i32,
    pub remaining: i32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HealedEvent {
    pub entity: Entity,
    pub amount: i32,
    pub current: i32,
}

/// Fired once when an entity's health reaches zero.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DiedEvent {
    pub entity: Entity,
}
