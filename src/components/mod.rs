//! ECS components for entities.
//!
//! Components carry the per-entity state of a run: party member bodies,
//! scrolling world content, spawned enemies and the short-lived effects of
//! attacks.
//!
//! Submodules overview:
//! - [`attackdriver`] – attack/ability cooldowns, melee hitboxes and projectiles
//! - [`damagedealer`] – contact damage and team membership
//! - [`environment`] – scrolling world root and its speed source
//! - [`groundcheck`] – ground probe and latest ground contact
//! - [`group`] – coarse category tag for spawned entities
//! - [`health`] – clamped hit points with a one-shot death transition
//! - [`mapposition`] – world- or root-relative position (pivot)
//! - [`partymember`] – character identity, stats and the active-member tag
//! - [`persistent`] – marker for entities that survive a restart
//! - [`pickup`] – collectible pickups
//! - [`playermotor`] – run speed ramp and jump timing
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`spawned`] – registry back-references that release slots on removal
//! - [`ttl`] – time-to-live countdown for automatic despawn
//! - [`wallsegment`] – ground segment the party runs on

pub mod attackdriver;
pub mod damagedealer;
pub mod environment;
pub mod groundcheck;
pub mod group;
pub mod health;
pub mod mapposition;
pub mod partymember;
pub mod persistent;
pub mod pickup;
pub mod playermotor;
pub mod rigidbody;
pub mod spawned;
pub mod ttl;
pub mod wallsegment;
