//! Fixed lifetimes for attack effects.
//!
//! Melee hitboxes and projectiles carry a [`Ttl`]; the
//! [`ttl_system`](crate::systems::ttl::ttl_system) retires them once it runs
//! out. The countdown follows the scaled frame delta, so pausing the run
//! keeps them alive.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ttl {
    /// Seconds left.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl {
            remaining: seconds.max(0.0),
        }
    }

    /// Count down by `dt` and report whether the lifetime is over.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt.max(0.0);
        self.remaining <= 0.0
    }
}
