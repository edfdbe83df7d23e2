//! Ground probing against live wall segments.

use bevy_ecs::prelude::*;

use crate::components::environment::ScrollRoot;
use crate::components::groundcheck::{GroundCheck, GroundContact};
use crate::components::mapposition::MapPosition;
use crate::components::wallsegment::WallSegment;
use crate::systems::environment::world_position;

/// Write a fresh [`GroundContact`] for every probing body. When several
/// segments support the probe, the highest surface wins.
pub fn ground_check(
    roots: Query<&MapPosition, With<ScrollRoot>>,
    walls: Query<(&MapPosition, &WallSegment, Option<&ChildOf>)>,
    mut bodies: Query<(&MapPosition, &GroundCheck, &mut GroundContact), Without<WallSegment>>,
) {
    for (position, check, mut contact) in bodies.iter_mut() {
        let body = position.pos;
        let surface = walls
            .iter()
            .map(|(wall_pos, segment, parent)| {
                let center = world_position(wall_pos, parent, &roots);
                (center.x, segment.surface_y(center.y), segment.half_width)
            })
            .filter(|(x, y, half_width)| check.supports(body, *x, *half_width, *y))
            .map(|(_, y, _)| y)
            .fold(None, |best: Option<f32>, y| Some(best.map_or(y, |b| b.max(y))));

        let sample = match surface {
            Some(y) => GroundContact::on_surface(y),
            None => GroundContact::default(),
        };
        if *contact != sample {
            *contact = sample;
        }
    }
}
