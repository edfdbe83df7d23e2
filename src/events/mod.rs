//! Observer events.
//!
//! Input and contacts enter the world as events triggered by the host;
//! everything the UI and audio glue may want to react to leaves it the same
//! way, and is also forwarded to the
//! [`EventHub`](crate::resources::eventhub::EventHub).
//!
//! Submodules overview:
//! - [`collision`] – host-reported contacts between two entities
//! - [`combat`] – accepted actions and cooldown progress
//! - [`gamestate`] – state transition trigger, pause and game over
//! - [`health`] – damage/heal requests and their outcomes
//! - [`input`] – logical input actions
//! - [`party`] – member deaths, party wipe and active member changes
//! - [`pickup`] – collected pickups
//! - [`progress`] – distance, score and unlock progression
//! - [`spawn`] – instances created by the directors

pub mod collision;
pub mod combat;
pub mod gamestate;
pub mod health;
pub mod input;
pub mod party;
pub mod pickup;
pub mod progress;
pub mod spawn;
