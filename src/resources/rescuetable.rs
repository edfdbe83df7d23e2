//! Catalog of rescuable characters.
//!
//! Loaded from JSON like the spawn tables:
//!
//! ```json
//! { "entries": [ { "character": "Mage", "required_distance": 150.0 } ],
//!   "spawn_distance_ahead": 30.0, "spawn_y": 0.0 }
//! ```

use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::partymember::CharacterType;
use crate::resources::spawntable::weighted_pick;

fn default_required_distance() -> f32 {
    500.0
}

fn default_weight() -> f32 {
    1.0
}

fn default_max_instances() -> u32 {
    1
}

fn default_spawn_distance_ahead() -> f32 {
    30.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescueSpawnEntry {
    pub character: CharacterType,
    /// Run distance before this character's rescue may appear.
    #[serde(default = "default_required_distance")]
    pub required_distance: f32,
    #[serde(default = "default_weight")]
    pub spawn_weight: f32,
    #[serde(default = "default_max_instances")]
    pub max_instances: u32,
    /// Name shown by the UI. Falls back to the character type.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl RescueSpawnEntry {
    pub fn new(character: CharacterType, required_distance: f32) -> Self {
        RescueSpawnEntry {
            character,
            required_distance,
            spawn_weight: default_weight(),
            max_instances: default_max_instances(),
            display_name: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or(self.character.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescueSpawnTable {
    #[serde(default)]
    pub entries: Vec<RescueSpawnEntry>,
    #[serde(default = "default_spawn_distance_ahead")]
    pub spawn_distance_ahead: f32,
    #[serde(default)]
    pub spawn_y: f32,
}

impl Default for RescueSpawnTable {
    fn default() -> Self {
        RescueSpawnTable {
            entries: Vec::new(),
            spawn_distance_ahead: default_spawn_distance_ahead(),
            spawn_y: 0.0,
        }
    }
}

impl RescueSpawnTable {
    pub fn new(entries: Vec<RescueSpawnEntry>) -> Self {
        RescueSpawnTable {
            entries,
            ..Self::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse rescue table: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read rescue table {}: {}", path.display(), e))?;
        Self::from_json_str(&text)
    }

    pub fn entry_for(&self, character: CharacterType) -> Option<&RescueSpawnEntry> {
        self.entries.iter().find(|e| e.character == character)
    }

    /// Entries whose distance requirement is met.
    pub fn available(&self, distance: f32) -> Vec<&RescueSpawnEntry> {
        self.entries
            .iter()
            .filter(|e| distance >= e.required_distance)
            .collect()
    }

    /// Weighted draw among available entries for which `keep` holds.
    pub fn pick(
        &self,
        distance: f32,
        keep: impl Fn(&RescueSpawnEntry) -> bool,
        rng: &mut Rng,
    ) -> Option<&RescueSpawnEntry> {
        let candidates: Vec<&RescueSpawnEntry> = self
            .available(distance)
            .into_iter()
            .filter(|e| keep(*e))
            .collect();
        weighted_pick(&candidates, |e| e.spawn_weight, rng)
    }
}
