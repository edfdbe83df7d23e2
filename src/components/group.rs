//! Coarse category tag.
//!
//! Every spawned entity carries a [`Group`] so hosts and tests can count or
//! filter by category without knowing the gameplay components involved.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(pub &'static str);

impl Group {
    pub const PARTY: Group = Group("party");
    pub const WALL: Group = Group("wall");
    pub const ENEMY: Group = Group("enemy");
    pub const OBSTACLE: Group = Group("obstacle");
    pub const RESCUE: Group = Group("rescue");
    pub const HITBOX: Group = Group("hitbox");
    pub const PROJECTILE: Group = Group("projectile");
    pub const SCROLL_ROOT: Group = Group("scroll_root");

    pub fn new(name: &'static str) -> Self {
        Group(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}
