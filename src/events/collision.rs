//! Contact events reported by the host physics.
//!
//! The core does no overlap detection of its own. The host triggers a
//! [`CollisionEvent`] (see [`Game::contact`](crate::game::Game::contact))
//! whenever two bodies touch, and
//! [`collision_observer`](crate::systems::collision::collision_observer)
//! applies contact damage, destroys projectiles and collects pickups.
use bevy_ecs::prelude::*;

/// Event fired when two entities touch.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
