//! Scroll the world past the stationary party.
//!
//! Each frame the [`environment_mover`] system translates every entity that
//! carries an [`EnvironmentMover`] by `-speed * delta` along x. The speed is
//! the active member's [`PlayerMotor`] target speed when available, the
//! mover's own fallback speed otherwise.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::environment::{EnvironmentMover, ScrollRoot};
use crate::components::mapposition::MapPosition;
use crate::components::partymember::ActiveMember;
use crate::components::playermotor::PlayerMotor;
use crate::resources::worldtime::WorldTime;

pub fn environment_mover(
    time: Res<WorldTime>,
    motors: Query<&PlayerMotor, With<ActiveMember>>,
    mut movers: Query<(&mut EnvironmentMover, &mut MapPosition)>,
) {
    let player_speed = motors.single().ok().map(|m| m.target_speed());
    for (mut mover, mut position) in movers.iter_mut() {
        let speed = mover.refresh_speed(player_speed);
        position.pos.x -= speed * time.delta;
    }
}

/// Resolve an entity position into world space. Children of a
/// [`ScrollRoot`] store root-relative positions.
pub fn world_position(
    position: &MapPosition,
    parent: Option<&ChildOf>,
    roots: &Query<&MapPosition, With<ScrollRoot>>,
) -> Vec2 {
    let root = parent
        .and_then(|child_of| roots.get(child_of.parent()).ok())
        .map(|root| root.pos)
        .unwrap_or(Vec2::ZERO);
    position.to_world(root)
}
