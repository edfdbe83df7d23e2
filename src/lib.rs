//! Castle Run gameplay core.
//!
//! An endless-runner simulation on top of `bevy_ecs`: the world scrolls past
//! a party of characters that jump, attack and switch places, while
//! directors spawn ground, enemies, obstacles and rescue pickups ahead of
//! them. [`game::Game`] assembles the world and exposes the tick entry
//! points a host calls.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
