//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity of an entity. Player
//! bodies only use the vertical component (the motor owns it); projectiles
//! and rolling obstacles are integrated by the
//! [`movement`](crate::systems::movement::movement) system.
//!
//! The `frozen` flag disables integration, e.g. while the run is paused by
//! the host outside of the time scale.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec2,
    /// When true, movement systems skip this entity.
    pub frozen: bool,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody already moving at `velocity`.
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            frozen: false,
        }
    }

    /// Freeze the rigid body, preventing movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze the rigid body, allowing movement system to update it.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Displacement over `dt` seconds, zero when frozen.
    pub fn displacement(&self, dt: f32) -> Vec2 {
        if self.frozen {
            Vec2::ZERO
        } else {
            self.velocity * dt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_body_does_not_move() {
        let mut rb = RigidBody::with_velocity(Vec2::new(3.0, 4.0));
        assert_eq!(rb.displacement(0.5), Vec2::new(1.5, 2.0));
        rb.freeze();
        assert_eq!(rb.displacement(0.5), Vec2::ZERO);
        rb.unfreeze();
        assert_eq!(rb.displacement(1.0), Vec2::new(3.0, 4.0));
    }
}
