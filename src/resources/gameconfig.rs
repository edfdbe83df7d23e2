//! Game configuration resource.
//!
//! Holds every externally authored tuning value the simulation reads: player
//! movement, spawn cadence and lanes, wall generation, rescue spawning and
//! per-character stats. Values are loaded from an INI file and any missing
//! key keeps its default, so a partial file (or no file at all) is always
//! usable.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! start_speed = 6
//! max_speed = 16
//! acceleration = 2.5
//! jump_force = 7.5
//! coyote_time = 0.12
//! jump_buffer = 0.15
//!
//! [tuning]
//! base_spawn_interval = 1.2
//! spawn_interval_min = 0.3
//! speed_ramp_per_second = 0.5
//!
//! [walls]
//! spacing = 5
//! spawn_interval = 0.8
//!
//! [rescue]
//! spawn_interval = 10
//! min_spawn_distance = 100
//!
//! [knight]
//! max_health = 3
//! attack_cooldown = 0.5
//! ability_cooldown = 2.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec2;
use log::info;
use std::path::PathBuf;

use crate::components::partymember::{CharacterStats, CharacterType};

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Auto-run, jump and gravity tuning for the player body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    pub start_speed: f32,
    pub max_speed: f32,
    /// Units per second squared added to the scroll speed.
    pub acceleration: f32,
    pub jump_force: f32,
    /// Seconds after leaving the ground during which a jump is still honored.
    pub coyote_time: f32,
    /// Seconds a jump request stays alive waiting for ground contact.
    pub jump_buffer: f32,
    pub extra_gravity: f32,
    pub fall_gravity_multiplier: f32,
    pub ground_check_radius: f32,
    pub ground_check_offset: Vec2,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_speed: 6.0,
            max_speed: 16.0,
            acceleration: 2.5,
            jump_force: 7.5,
            coyote_time: 0.12,
            jump_buffer: 0.15,
            extra_gravity: 15.0,
            fall_gravity_multiplier: 1.4,
            ground_check_radius: 0.25,
            ground_check_offset: Vec2::new(0.0, 0.1),
        }
    }
}

/// Spawn cadence, scoring and placement tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameTuning {
    pub speed_ramp_per_second: f32,
    pub base_spawn_interval: f32,
    pub spawn_interval_min: f32,
    pub distance_per_point: f32,
    /// Lead distance ahead of the camera where spawns appear.
    pub spawn_distance_ahead: f32,
    pub ground_lane_y: f32,
    pub air_lane_y: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            speed_ramp_per_second: 0.5,
            base_spawn_interval: 1.2,
            spawn_interval_min: 0.3,
            distance_per_point: 1.0,
            spawn_distance_ahead: 20.0,
            ground_lane_y: 0.0,
            air_lane_y: 2.0,
        }
    }
}

/// Ground segment generation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSettings {
    pub spacing: f32,
    /// Offset ahead of the player where timed spawns are placed.
    pub spawn_distance_ahead: f32,
    /// Negative offset behind the player past which segments are retired.
    pub destroy_distance_behind: f32,
    /// Height of each segment's pivot.
    pub wall_y: f32,
    /// Running surface height above the pivot.
    pub surface_offset: f32,
    pub yaw_degrees: f32,
    pub spawn_interval: f32,
    pub max_segments: usize,
    pub initial_segments: usize,
    /// Offset from the player of the first pre-populated segment.
    pub initial_offset: f32,
    pub segment_half_width: f32,
}

impl Default for WallSettings {
    fn default() -> Self {
        Self {
            spacing: 5.0,
            spawn_distance_ahead: 50.0,
            destroy_distance_behind: -30.0,
            wall_y: -3.0,
            surface_offset: 3.0,
            yaw_degrees: 90.0,
            spawn_interval: 0.8,
            max_segments: 20,
            initial_segments: 10,
            initial_offset: -20.0,
            segment_half_width: 2.5,
        }
    }
}

/// Rescue pickup spawning settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescueSettings {
    pub spawn_interval: f32,
    /// Run distance before any rescue may appear.
    pub min_spawn_distance: f32,
}

impl Default for RescueSettings {
    fn default() -> Self {
        Self {
            spawn_interval: 10.0,
            min_spawn_distance: 100.0,
        }
    }
}

/// Game configuration resource.
///
/// Consumers read it as `Option<Res<GameConfig>>` and fall back to
/// [`GameConfig::default`] when it is absent.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub tuning: GameTuning,
    pub walls: WallSettings,
    pub rescue: RescueSettings,
    pub knight: CharacterStats,
    pub mage: CharacterStats,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the authored default values.
    pub fn new() -> Self {
        Self {
            player: PlayerConfig::default(),
            tuning: GameTuning::default(),
            walls: WallSettings::default(),
            rescue: RescueSettings::default(),
            knight: CharacterStats::new(CharacterType::Knight),
            mage: CharacterStats::new(CharacterType::Mage),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Stats for the given character type.
    pub fn stats_for(&self, character: CharacterType) -> &CharacterStats {
        match character {
            CharacterType::Knight => &self.knight,
            CharacterType::Mage => &self.mage,
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: speed {}..{}, spawn interval {}..{}, walls every {}",
            self.player.start_speed,
            self.player.max_speed,
            self.tuning.base_spawn_interval,
            self.tuning.spawn_interval_min,
            self.walls.spacing
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used by tests and embedders that
    /// keep their tuning elsewhere.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str, target: &mut f32| {
            if let Some(value) = config.getfloat(section, key).ok().flatten() {
                *target = value as f32;
            }
        };

        // [player] section
        let p = &mut self.player;
        float("player", "start_speed", &mut p.start_speed);
        float("player", "max_speed", &mut p.max_speed);
        float("player", "acceleration", &mut p.acceleration);
        float("player", "jump_force", &mut p.jump_force);
        float("player", "coyote_time", &mut p.coyote_time);
        float("player", "jump_buffer", &mut p.jump_buffer);
        float("player", "extra_gravity", &mut p.extra_gravity);
        float(
            "player",
            "fall_gravity_multiplier",
            &mut p.fall_gravity_multiplier,
        );
        float("player", "ground_check_radius", &mut p.ground_check_radius);
        float(
            "player",
            "ground_check_offset_y",
            &mut p.ground_check_offset.y,
        );

        // [tuning] section
        let t = &mut self.tuning;
        float("tuning", "speed_ramp_per_second", &mut t.speed_ramp_per_second);
        float("tuning", "base_spawn_interval", &mut t.base_spawn_interval);
        float("tuning", "spawn_interval_min", &mut t.spawn_interval_min);
        float("tuning", "distance_per_point", &mut t.distance_per_point);
        float("tuning", "spawn_distance_ahead", &mut t.spawn_distance_ahead);
        float("tuning", "ground_lane_y", &mut t.ground_lane_y);
        float("tuning", "air_lane_y", &mut t.air_lane_y);

        // [walls] section
        let w = &mut self.walls;
        float("walls", "spacing", &mut w.spacing);
        float("walls", "spawn_distance_ahead", &mut w.spawn_distance_ahead);
        float(
            "walls",
            "destroy_distance_behind",
            &mut w.destroy_distance_behind,
        );
        float("walls", "wall_y", &mut w.wall_y);
        float("walls", "surface_offset", &mut w.surface_offset);
        float("walls", "yaw_degrees", &mut w.yaw_degrees);
        float("walls", "spawn_interval", &mut w.spawn_interval);
        float("walls", "initial_offset", &mut w.initial_offset);
        float("walls", "segment_half_width", &mut w.segment_half_width);
        if let Some(max) = config.getuint("walls", "max_segments").ok().flatten() {
            w.max_segments = max as usize;
        }
        if let Some(count) = config.getuint("walls", "initial_segments").ok().flatten() {
            w.initial_segments = count as usize;
        }

        // [rescue] section
        float("rescue", "spawn_interval", &mut self.rescue.spawn_interval);
        float(
            "rescue",
            "min_spawn_distance",
            &mut self.rescue.min_spawn_distance,
        );

        // one section per character
        for stats in [&mut self.knight, &mut self.mage] {
            let section = stats.character_type.as_str().to_ascii_lowercase();
            if let Some(hp) = config.getint(&section, "max_health").ok().flatten() {
                stats.max_health = hp as i32;
            }
            float(section.as_str(), "attack_cooldown", &mut stats.attack_cooldown);
            float(section.as_str(), "ability_cooldown", &mut stats.ability_cooldown);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        let p = &self.player;
        set("player", "start_speed", p.start_speed.to_string());
        set("player", "max_speed", p.max_speed.to_string());
        set("player", "acceleration", p.acceleration.to_string());
        set("player", "jump_force", p.jump_force.to_string());
        set("player", "coyote_time", p.coyote_time.to_string());
        set("player", "jump_buffer", p.jump_buffer.to_string());
        set("player", "extra_gravity", p.extra_gravity.to_string());
        set(
            "player",
            "fall_gravity_multiplier",
            p.fall_gravity_multiplier.to_string(),
        );

        let t = &self.tuning;
        set(
            "tuning",
            "speed_ramp_per_second",
            t.speed_ramp_per_second.to_string(),
        );
        set(
            "tuning",
            "base_spawn_interval",
            t.base_spawn_interval.to_string(),
        );
        set("tuning", "spawn_interval_min", t.spawn_interval_min.to_string());
        set("tuning", "distance_per_point", t.distance_per_point.to_string());

        let w = &self.walls;
        set("walls", "spacing", w.spacing.to_string());
        set("walls", "spawn_interval", w.spawn_interval.to_string());
        set("walls", "max_segments", w.max_segments.to_string());
        set("walls", "wall_y", w.wall_y.to_string());
        set("walls", "surface_offset", w.surface_offset.to_string());

        set(
            "rescue",
            "spawn_interval",
            self.rescue.spawn_interval.to_string(),
        );
        set(
            "rescue",
            "min_spawn_distance",
            self.rescue.min_spawn_distance.to_string(),
        );

        for stats in [&self.knight, &self.mage] {
            let section = stats.character_type.as_str().to_ascii_lowercase();
            set(section.as_str(), "max_health", stats.max_health.to_string());
            set(section.as_str(), "attack_cooldown", stats.attack_cooldown.to_string());
            set(
                section.as_str(),
                "ability_cooldown",
                stats.ability_cooldown.to_string(),
            );
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[player]\nmax_speed = 20\n\n[mage]\nmax_health = 2\n")
            .unwrap();
        assert_eq!(config.player.max_speed, 20.0);
        assert_eq!(config.player.start_speed, 6.0);
        assert_eq!(config.mage.max_health, 2);
        assert_eq!(config.knight.max_health, 3);
        assert_eq!(config.tuning, GameTuning::default());
    }

    #[test]
    fn wall_counts_parse_as_integers() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[walls]\nmax_segments = 12\ninitial_segments = 4\nspacing = 3.5\n")
            .unwrap();
        assert_eq!(config.walls.max_segments, 12);
        assert_eq!(config.walls.initial_segments, 4);
        assert_eq!(config.walls.spacing, 3.5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/castlerun/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn stats_lookup_by_type() {
        let config = GameConfig::new();
        assert_eq!(
            config.stats_for(CharacterType::Mage).character_type,
            CharacterType::Mage
        );
    }
}
