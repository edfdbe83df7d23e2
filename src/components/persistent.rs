//! Persistent entity marker component.
//!
//! [`Game::restart`](crate::game::Game::restart) despawns every entity of the
//! finished run except those tagged [`Persistent`]: the observers the game
//! registers at construction, and anything the host wants to keep.

use bevy_ecs::prelude::Component;

/// Tag component for entities that survive a run restart.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Persistent;
