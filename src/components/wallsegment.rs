//! Ground segment the party runs on.

use bevy_ecs::prelude::Component;

/// A flat running surface centered on the entity's position, spawned and
/// retired by the [`wall_generator`](crate::systems::wallgenerator::wall_generator).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub half_width: f32,
    /// Running surface height above the segment's pivot.
    pub surface_offset: f32,
    /// Fixed orientation around the vertical axis, in degrees.
    pub yaw_degrees: f32,
}

impl WallSegment {
    /// World height of the running surface for a segment whose pivot is at
    /// `pivot_y`.
    pub fn surface_y(&self, pivot_y: f32) -> f32 {
        pivot_y + self.surface_offset
    }
}
