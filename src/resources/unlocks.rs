//! Character unlock progression.
//!
//! [`CharacterUnlocks`] is the explicitly constructed progression service:
//! it is built with a [`PrefsStore`], loads the unlocked set on construction,
//! and writes it back after every change. The set only grows; a reset brings
//! it back to the default baseline (the Knight).
//!
//! The persisted form is a comma-joined list of character names under the
//! `UnlockedCharacters` key. Unknown names are ignored on load.

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::path::PathBuf;

use crate::components::partymember::CharacterType;

pub const UNLOCKED_CHARACTERS_KEY: &str = "UnlockedCharacters";

/// Characters every profile starts with.
pub const DEFAULT_UNLOCKED: [CharacterType; 1] = [CharacterType::Knight];

/// String key/value persistence used by the progression service.
pub trait PrefsStore: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
    fn delete_key(&mut self, key: &str);
    /// Flush pending changes to the backing medium.
    fn save(&mut self) -> Result<(), String>;
}

/// In-memory store for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: FxHashMap<String, String>,
    saves: usize,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl PrefsStore for MemoryPrefs {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn delete_key(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn save(&mut self) -> Result<(), String> {
        self.saves += 1;
        Ok(())
    }
}

const PREFS_SECTION: &str = "prefs";

/// INI-file backed store. Keys live in the `[prefs]` section and keep their
/// case.
pub struct IniPrefs {
    ini: Ini,
    path: PathBuf,
}

impl IniPrefs {
    /// Open the file at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut ini = Ini::new_cs();
        if path.exists() {
            if let Err(e) = ini.load(&path) {
                warn!("Failed to read preferences {}: {}", path.display(), e);
            }
        }
        IniPrefs { ini, path }
    }
}

impl PrefsStore for IniPrefs {
    fn get_string(&self, key: &str) -> Option<String> {
        self.ini.get(PREFS_SECTION, key)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.ini
            .set(PREFS_SECTION, key, Some(value.to_string()));
    }

    fn delete_key(&mut self, key: &str) {
        self.ini.remove_key(PREFS_SECTION, key);
    }

    fn save(&mut self) -> Result<(), String> {
        self.ini
            .write(&self.path)
            .map_err(|e| format!("Failed to save preferences {}: {}", self.path.display(), e))
    }
}

/// Parse the persisted list, skipping unknown names and duplicates.
pub fn parse_unlocked(encoded: &str) -> Vec<CharacterType> {
    let mut unlocked = Vec::new();
    for token in encoded.split(',') {
        if let Ok(character) = token.parse::<CharacterType>() {
            if !unlocked.contains(&character) {
                unlocked.push(character);
            }
        }
    }
    unlocked
}

pub fn encode_unlocked(unlocked: &[CharacterType]) -> String {
    unlocked
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Resource)]
pub struct CharacterUnlocks {
    unlocked: Vec<CharacterType>,
    store: Box<dyn PrefsStore>,
}

impl CharacterUnlocks {
    /// Load the unlocked set from `store`, adding the default baseline if it
    /// is missing.
    pub fn new(store: impl PrefsStore + 'static) -> Self {
        let mut unlocks = CharacterUnlocks {
            unlocked: Vec::new(),
            store: Box::new(store),
        };
        unlocks.load();
        for character in DEFAULT_UNLOCKED {
            unlocks.unlock(character);
        }
        unlocks
    }

    fn load(&mut self) {
        self.unlocked = self
            .store
            .get_string(UNLOCKED_CHARACTERS_KEY)
            .map(|s| parse_unlocked(&s))
            .unwrap_or_default();
        info!("Unlocked characters: {}", encode_unlocked(&self.unlocked));
    }

    pub fn is_unlocked(&self, character: CharacterType) -> bool {
        self.unlocked.contains(&character)
    }

    /// Unlocked characters in unlock order.
    pub fn unlocked(&self) -> &[CharacterType] {
        &self.unlocked
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlock a rescued character. Returns true only the first time.
    pub fn rescue(&mut self, character: CharacterType) -> bool {
        let added = self.unlock(character);
        if added {
            info!("Rescued {}", character);
        }
        added
    }

    /// Forget every unlock except the default baseline.
    pub fn reset(&mut self) {
        self.unlocked.clear();
        self.store.delete_key(UNLOCKED_CHARACTERS_KEY);
        for character in DEFAULT_UNLOCKED {
            self.unlock(character);
        }
    }

    fn unlock(&mut self, character: CharacterType) -> bool {
        if self.is_unlocked(character) {
            return false;
        }
        self.unlocked.push(character);
        self.persist();
        true
    }

    fn persist(&mut self) {
        let encoded = encode_unlocked(&self.unlocked);
        self.store.set_string(UNLOCKED_CHARACTERS_KEY, &encoded);
        if let Err(e) = self.store.save() {
            warn!("{}", e);
        }
    }

    /// Roster order for a new run: unlocked characters in declaration order.
    pub fn roster(&self) -> Vec<CharacterType> {
        CharacterType::ALL
            .into_iter()
            .filter(|c| self.is_unlocked(*c))
            .collect()
    }
}

impl Default for CharacterUnlocks {
    fn default() -> Self {
        Self::new(MemoryPrefs::new())
    }
}
