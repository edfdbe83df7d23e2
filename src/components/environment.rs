//! Scrolling world root.
//!
//! The player never moves horizontally. Instead the entity tagged with
//! [`ScrollRoot`] is translated backwards every frame by the
//! [`environment_mover`](crate::systems::environment::environment_mover)
//! system, dragging every child (walls, enemies, obstacles, pickups) toward
//! the player.

use bevy_ecs::prelude::Component;

/// Tag for the single entity that parents all scrolling content.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScrollRoot;

/// Scroll speed source for the world root.
///
/// When `use_player_speed` is set and an active party member with a
/// [`PlayerMotor`](crate::components::playermotor::PlayerMotor) exists, the
/// motor's ramping target speed is used. Otherwise `move_speed` is the
/// fallback.
#[derive(Component, Clone, Copy, Debug)]
pub struct EnvironmentMover {
    pub move_speed: f32,
    pub use_player_speed: bool,
    current_speed: f32,
}

impl Default for EnvironmentMover {
    fn default() -> Self {
        Self::new(6.0)
    }
}

impl EnvironmentMover {
    pub fn new(move_speed: f32) -> Self {
        EnvironmentMover {
            move_speed,
            use_player_speed: true,
            current_speed: move_speed,
        }
    }

    pub fn with_player_speed(mut self, use_player_speed: bool) -> Self {
        self.use_player_speed = use_player_speed;
        self
    }

    /// Speed used for the most recent translation.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Pick the speed for this frame. `player_speed` is `None` when no
    /// motor could be resolved.
    pub fn refresh_speed(&mut self, player_speed: Option<f32>) -> f32 {
        self.current_speed = match (self.use_player_speed, player_speed) {
            (true, Some(speed)) => speed,
            _ => self.move_speed,
        };
        self.current_speed
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
        if !self.use_player_speed {
            self.current_speed = speed;
        }
    }
}
