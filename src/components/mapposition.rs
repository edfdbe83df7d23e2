//! World-space position component.
//!
//! [`MapPosition`] stores an entity's pivot. Entities parented to the
//! [`ScrollRoot`](crate::components::environment::ScrollRoot) keep their
//! position relative to the root, so translating the root scrolls all of them
//! at once. Use [`MapPosition::to_world`] / [`MapPosition::from_world`] to
//! convert between the two frames.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vec2::new(x, y),
        }
    }

    /// Resolve a root-relative position into world space.
    pub fn to_world(&self, root: Vec2) -> Vec2 {
        self.pos + root
    }

    /// Build a root-relative position from a world-space point.
    pub fn from_world(world: Vec2, root: Vec2) -> Self {
        MapPosition { pos: world - root }
    }
}
