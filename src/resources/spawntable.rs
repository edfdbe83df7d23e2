//! Weighted spawn catalogs.
//!
//! A [`SpawnTable`] lists the enemy or obstacle templates a director may
//! instantiate. Each [`SpawnEntry`] carries a weight, a run-distance gate and
//! a cap on live instances. Tables are authored as JSON:
//!
//! ```json
//! { "entries": [
//!     { "template": { "id": "Skeleton", "max_health": 1 }, "weight": 3.0 },
//!     { "template": { "id": "FlyingBat" }, "weight": 1.0, "min_distance": 50.0,
//!       "max_instances_alive": 2 }
//! ] }
//! ```

use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::components::damagedealer::Team;

/// Stable identity of a template, used as the instance-registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        TemplateId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical placement of a spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Ground,
    Air,
}

fn default_touch_damage() -> i32 {
    1
}

fn default_team() -> Team {
    Team::Enemy
}

/// What gets spawned for an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTemplate {
    pub id: TemplateId,
    /// Explicit lane. When absent the lane follows the naming convention
    /// (see [`SpawnTemplate::lane`]).
    #[serde(default)]
    pub lane: Option<Lane>,
    /// Hit points. Templates without health cannot be destroyed by attacks.
    #[serde(default)]
    pub max_health: Option<i32>,
    #[serde(default = "default_touch_damage")]
    pub touch_damage: i32,
    #[serde(default = "default_team")]
    pub team: Team,
    /// Speed toward the player inside the scrolling world (rolling boulders).
    #[serde(default)]
    pub roll_speed: Option<f32>,
}

impl SpawnTemplate {
    pub fn new(id: impl Into<String>) -> Self {
        SpawnTemplate {
            id: TemplateId::new(id),
            lane: None,
            max_health: None,
            touch_damage: default_touch_damage(),
            team: default_team(),
            roll_speed: None,
        }
    }

    /// Flying creatures and liches take the air lane, everything else runs
    /// on the ground.
    pub fn lane(&self) -> Lane {
        if let Some(lane) = self.lane {
            return lane;
        }
        let name = self.id.as_str().to_ascii_lowercase();
        if name.contains("flying") || name.contains("lich") {
            Lane::Air
        } else {
            Lane::Ground
        }
    }
}

fn default_weight() -> f32 {
    1.0
}

fn default_max_instances() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub template: SpawnTemplate,
    #[serde(default = "default_weight")]
    pub weight: f32,
    /// Run distance before this entry becomes eligible.
    #[serde(default)]
    pub min_distance: f32,
    #[serde(default = "default_max_instances")]
    pub max_instances_alive: u32,
}

impl SpawnEntry {
    pub fn new(template: SpawnTemplate, weight: f32) -> Self {
        SpawnEntry {
            template,
            weight,
            min_distance: 0.0,
            max_instances_alive: default_max_instances(),
        }
    }

    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_cap(mut self, max_instances_alive: u32) -> Self {
        self.max_instances_alive = max_instances_alive;
        self
    }

    pub fn is_eligible(&self, distance: f32) -> bool {
        self.weight > 0.0 && distance >= self.min_distance
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTable {
    #[serde(default)]
    pub entries: Vec<SpawnEntry>,
}

impl SpawnTable {
    pub fn new(entries: Vec<SpawnEntry>) -> Self {
        SpawnTable { entries }
    }

    pub fn from_json_str(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse spawn table: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read spawn table {}: {}", path.display(), e))?;
        Self::from_json_str(&text)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn eligible(&self, distance: f32) -> Vec<&SpawnEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_eligible(distance))
            .collect()
    }

    /// Weighted draw among the entries eligible at `distance`.
    pub fn pick(&self, distance: f32, rng: &mut Rng) -> Option<&SpawnEntry> {
        weighted_pick(&self.eligible(distance), |entry| entry.weight, rng)
    }
}

/// Draw one candidate with probability proportional to its weight.
///
/// The draw is uniform in `[0, total)`; the first candidate whose running
/// weight reaches the draw wins, so ties go to table order. Candidates with
/// a non-positive weight never win. Falls back to the last positive candidate
/// when rounding leaves the draw past the running total, and returns `None`
/// when nothing carries weight.
pub fn weighted_pick<'a, T>(
    candidates: &[&'a T],
    weight: impl Fn(&T) -> f32,
    rng: &mut Rng,
) -> Option<&'a T> {
    let total: f32 = candidates
        .iter()
        .map(|c| weight(*c))
        .filter(|w| *w > 0.0)
        .sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let draw = rng.f32() * total;
    let mut running = 0.0;
    for candidate in candidates {
        let w = weight(*candidate);
        if w <= 0.0 {
            continue;
        }
        running += w;
        if running >= draw {
            return Some(*candidate);
        }
    }
    candidates.iter().rev().find(|c| weight(**c) > 0.0).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(weights: &[f32]) -> SpawnTable {
        SpawnTable::new(
            weights
                .iter()
                .enumerate()
                .map(|(i, w)| SpawnEntry::new(SpawnTemplate::new(format!("T{i}")), *w))
                .collect(),
        )
    }

    #[test]
    fn distribution_follows_weights() {
        let table = table(&[1.0, 3.0]);
        let mut rng = Rng::with_seed(0x5eed);
        let draws = 10_000;
        let mut second = 0;
        for _ in 0..draws {
            let entry = table.pick(0.0, &mut rng).unwrap();
            if entry.template.id.as_str() == "T1" {
                second += 1;
            }
        }
        let share = second as f32 / draws as f32;
        assert!((share - 0.75).abs() < 0.02, "share was {share}");
    }

    #[test]
    fn distance_gate_and_zero_weights() {
        let mut table = table(&[0.0, 2.0]);
        table.entries[1].min_distance = 100.0;
        let mut rng = Rng::with_seed(1);

        assert!(table.pick(50.0, &mut rng).is_none());
        assert_eq!(
            table.pick(100.0, &mut rng).map(|e| e.template.id.as_str()),
            Some("T1")
        );
    }

    #[test]
    fn empty_table_yields_nothing() {
        let mut rng = Rng::with_seed(2);
        assert!(SpawnTable::default().pick(0.0, &mut rng).is_none());
    }

    #[test]
    fn lane_follows_name_convention() {
        assert_eq!(SpawnTemplate::new("FlyingBat").lane(), Lane::Air);
        assert_eq!(SpawnTemplate::new("LichKing").lane(), Lane::Air);
        assert_eq!(SpawnTemplate::new("Skeleton").lane(), Lane::Ground);
        let mut boulder = SpawnTemplate::new("flying_boulder");
        boulder.lane = Some(Lane::Ground);
        assert_eq!(boulder.lane(), Lane::Ground);
    }

    #[test]
    fn parses_json_with_defaults() {
        let table = SpawnTable::from_json_str(
            r#"{ "entries": [
                { "template": { "id": "Boulder", "roll_speed": 5.0 }, "weight": 2.0 },
                { "template": { "id": "Skeleton", "max_health": 2, "team": "Enemy" },
                  "min_distance": 30.0, "max_instances_alive": 1 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.entries[0].max_instances_alive, 3);
        assert_eq!(table.entries[0].template.roll_speed, Some(5.0));
        assert_eq!(table.entries[1].weight, 1.0);
        assert_eq!(table.entries[1].template.max_health, Some(2));
        assert!(SpawnTable::from_json_str("{ nope").is_err());
    }
}
