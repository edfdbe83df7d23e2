//! Party member components and character data.
//!
//! Every controllable character is an entity carrying a [`PartyMember`], a
//! [`Health`](crate::components::health::Health), a
//! [`PlayerMotor`](crate::components::playermotor::PlayerMotor) and an
//! [`AttackDriver`](crate::components::attackdriver::AttackDriver). Exactly
//! one of them carries the [`ActiveMember`] marker at a time; the
//! [`Party`](crate::resources::party::Party) resource decides which.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterType {
    Knight,
    Mage,
}

impl CharacterType {
    /// Every known character, in roster order.
    pub const ALL: [CharacterType; 2] = [CharacterType::Knight, CharacterType::Mage];

    /// Stable name used for persistence and config sections.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterType::Knight => "Knight",
            CharacterType::Mage => "Mage",
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterType::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown character type: {s:?}"))
    }
}

/// Authored per-character stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    pub character_type: CharacterType,
    pub max_health: i32,
    /// Seconds between basic attacks.
    pub attack_cooldown: f32,
    /// Seconds between ability uses.
    pub ability_cooldown: f32,
}

impl CharacterStats {
    pub fn new(character_type: CharacterType) -> Self {
        CharacterStats {
            character_type,
            max_health: 3,
            attack_cooldown: 0.5,
            ability_cooldown: 2.0,
        }
    }
}

/// A roster slot. Aliveness is derived from the entity's `Health`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PartyMember {
    pub stats: CharacterStats,
    /// Position of this member in the party roster.
    pub roster_index: usize,
}

impl PartyMember {
    pub fn new(stats: CharacterStats, roster_index: usize) -> Self {
        PartyMember {
            stats,
            roster_index,
        }
    }

    pub fn character_type(&self) -> CharacterType {
        self.stats.character_type
    }
}

/// Marker for the member currently receiving input and drawn highlighted.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ActiveMember;
