//! Shared camera reference.
//!
//! Directors place spawns relative to the camera target. The host keeps it
//! in sync with its own camera; when the resource is missing, spawns are
//! placed relative to the origin.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera2DRes {
    pub target: Vec2,
}

impl Camera2DRes {
    pub fn new(target: Vec2) -> Self {
        Camera2DRes { target }
    }
}
