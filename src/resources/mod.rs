//! ECS resources.
//!
//! World-wide state shared by systems: configuration and data tables, the
//! directors, the party, progression and run bookkeeping.
//!
//! Submodules overview:
//! - [`attackstyles`] – open registry of character attack effects
//! - [`camera2d`] – camera reference spawns are placed from
//! - [`contactsensor`] – pairs touching on the last sensing pass
//! - [`eventhub`] – channel fan-out of events to external subscribers
//! - [`gameconfig`] – INI-backed tuning
//! - [`gamestate`] – current and pending run state
//! - [`party`] – roster, active index and wipe state
//! - [`registry`] – live-instance counts guarded by a lock
//! - [`rescuedirector`] – rescue pickup director state
//! - [`rescuetable`] – per-character rescue entries
//! - [`rng`] – seedable random source
//! - [`runstats`] – distance, time alive and score
//! - [`spawndirector`] – spawn cadence and enemy/obstacle director state
//! - [`spawntable`] – weighted, capped, distance-gated templates
//! - [`unlocks`] – character unlock progression and its preference stores
//! - [`wallgenerator`] – ground segment generator state
//! - [`worldtime`] – simulation time and time scale

pub mod attackstyles;
pub mod camera2d;
pub mod contactsensor;
pub mod eventhub;
pub mod gameconfig;
pub mod gamestate;
pub mod party;
pub mod registry;
pub mod rescuedirector;
pub mod rescuetable;
pub mod rng;
pub mod runstats;
pub mod spawndirector;
pub mod spawntable;
pub mod unlocks;
pub mod wallgenerator;
pub mod worldtime;
