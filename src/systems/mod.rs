//! Gameplay systems and observers.
//!
//! Frame systems run at display rate, the motor and ground probe at the
//! fixed rate (see [`Game`](crate::game::Game)). Observers react to events
//! as they are triggered.
//!
//! Submodules overview
//! - [`attack`] – cooldown ticking and attack/ability dispatch
//! - [`camera`] – keep the camera reference on the active member
//! - [`collision`] – contact damage, projectile hits and pickup collection
//! - [`contacts`] – distance-based contact sensing for hosts without physics
//! - [`environment`] – scroll the world root past the party
//! - [`eventhub`] – forward events to external subscribers
//! - [`gamestate`] – pause toggles, wipe to game over, pending transitions
//! - [`groundcheck`] – sample wall segments under each body
//! - [`health`] – damage and healing, despawn of dead spawns
//! - [`movement`] – integrate positions from rigid body velocities
//! - [`party`] – failover, explicit switching and body hand-over
//! - [`pickup`] – apply collected pickups
//! - [`playermotor`] – speed ramp, jump and gravity
//! - [`rescuedirector`] – rescue pickup spawning
//! - [`runstats`] – distance and score
//! - [`spawndirector`] – enemy/obstacle spawning and culling
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn entities when their time runs out
//! - [`wallgenerator`] – rolling window of ground segments

pub mod attack;
pub mod camera;
pub mod collision;
pub mod contacts;
pub mod environment;
pub mod eventhub;
pub mod gamestate;
pub mod groundcheck;
pub mod health;
pub mod movement;
pub mod party;
pub mod pickup;
pub mod playermotor;
pub mod rescuedirector;
pub mod runstats;
pub mod spawndirector;
pub mod time;
pub mod ttl;
pub mod wallgenerator;
