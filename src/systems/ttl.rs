//! Lifetime expiry for attack effects.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Despawn hitboxes and projectiles whose [`Ttl`] ran out this frame.
pub fn ttl_system(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut effects: Query<(Entity, &mut Ttl)>,
) {
    for (entity, mut ttl) in effects.iter_mut() {
        if ttl.tick(time.delta) {
            commands.entity(entity).try_despawn();
        }
    }
}
