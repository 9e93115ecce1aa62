//! User configuration, stored as RON next to the executable.
//!
//! Every field has a default, so a partial file (or none at all) is valid.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::*;

pub const DEFAULT_CONFIG_FILE: &str = "auto_reel.ron";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishingTweaksConfig {
    /// Initial value of the runtime auto-fishing mode.
    pub auto_fishing_on_start: bool,
    pub enable_skip_minigame: bool,
    /// Always award a perfect catch instead of rolling for one.
    pub skip_minigame_with_perfect: bool,
    /// Collect the treasure chest when the bar had one.
    pub skip_minigame_with_treasure: bool,
    pub min_catch_count_for_skip: u32,
    pub min_perfect_count_for_skip: u32,
    /// Where the fish counter is persisted. `None` keeps counts in memory only.
    pub counter_save_path: Option<PathBuf>,
}

impl Default for FishingTweaksConfig {
    fn default() -> Self {
        Self {
            auto_fishing_on_start: true,
            enable_skip_minigame: true,
            skip_minigame_with_perfect: false,
            skip_minigame_with_treasure: true,
            min_catch_count_for_skip: 5,
            min_perfect_count_for_skip: 1,
            counter_save_path: None,
        }
    }
}

impl FishingTweaksConfig {
    pub fn thresholds(&self) -> EligibilityThresholds {
        EligibilityThresholds {
            skip_enabled: self.enable_skip_minigame,
            min_catch_count: self.min_catch_count_for_skip,
            min_perfect_count: self.min_perfect_count_for_skip,
        }
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            force_perfect: self.skip_minigame_with_perfect,
            allow_treasure_capture: self.skip_minigame_with_treasure,
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        ron::from_str(text).map_err(|e| format!("Config parse failed: {}", e))
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
        Self::from_ron_str(&text)
    }

    /// Load the config, falling back to defaults when the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[Config] No config at {}, using defaults.", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => {
                info!("[Config] Loaded {}", path.display());
                config
            }
            Err(e) => {
                warn!("[Config] {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Serialization failed: {}", e))?;
        fs::write(path, text).map_err(|e| format!("Write failed for {}: {}", path.display(), e))
    }
}
