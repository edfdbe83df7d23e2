use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::playermotor::PlayerMotor;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate positions of free bodies (projectiles, rolling obstacles).
/// Player bodies are integrated by the motor at the fixed rate.
pub fn movement(
    mut query: Query<(&mut MapPosition, &RigidBody), Without<PlayerMotor>>,
    time: Res<WorldTime>,
) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos += rigidbody.displacement(time.delta);
    }
}
