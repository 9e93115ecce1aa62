//! Shared components, resources, events, and states for auto-reel.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — the slice of the host state machine we hook into
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    /// The bobber-bar minigame is on screen.
    Fishing,
}

// ═══════════════════════════════════════════════════════════════════════
// FISH
// ═══════════════════════════════════════════════════════════════════════

pub type FishId = String;

/// How the fish moves inside the bobber bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MotionCategory {
    Dart,
    Smooth,
    FloaterOrSinker,
    #[default]
    Mixed,
}

impl MotionCategory {
    /// Map the host's raw motion code onto a category.
    ///
    /// 0 = mixed, 1 = dart, 2 = smooth, 3 = sinker, 4 = floater.
    /// Anything else is treated as mixed.
    pub fn from_motion_type(code: i32) -> Self {
        match code {
            1 => MotionCategory::Dart,
            2 => MotionCategory::Smooth,
            3 | 4 => MotionCategory::FloaterOrSinker,
            _ => MotionCategory::Mixed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishDef {
    pub id: FishId,
    pub name: String,
    pub motion: MotionCategory,
    /// Bobber-bar difficulty, 0 = trivial. Vanilla fish sit roughly in 15..=110.
    pub difficulty: f32,
    pub boss_fish: bool,
    pub sell_price: u32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct FishRegistry {
    pub fish: HashMap<FishId, FishDef>,
}

impl FishRegistry {
    /// Display name for a fish, falling back to the raw id for unknown fish.
    pub fn display_name<'a>(&'a self, fish_id: &'a str) -> &'a str {
        self.fish
            .get(fish_id)
            .map(|f| f.name.as_str())
            .unwrap_or(fish_id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CATCH ATTEMPT
// ═══════════════════════════════════════════════════════════════════════

/// `distance_from_catching` value written on auto-resolve. Anything >= 1.0 is a catch.
pub const MAX_CATCH_DISTANCE: f32 = 2.0;
/// Below this the fish got away.
pub const MISS_DISTANCE: f32 = 0.5;

/// Everything the outcome resolver needs to know about one minigame appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchAttemptContext {
    pub fish_id: FishId,
    pub motion: MotionCategory,
    pub is_boss_fish: bool,
    pub difficulty: f32,
    pub has_treasure: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// CATCH HISTORY — collaborator seam
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatchCounts {
    pub catch_count: u32,
    pub perfect_count: u32,
}

/// Per-fish catch history. The core only reads counts and requests increments;
/// whoever implements this owns storage.
pub trait CatchHistory {
    fn current_count(&self, fish_id: &str) -> CatchCounts;
    fn increment(&mut self, fish_id: &str, perfect: bool);
}

/// Default history store: every fish the player has landed while auto-fishing.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FishCounter {
    pub fish: HashMap<FishId, CatchCounts>,
}

impl CatchHistory for FishCounter {
    fn current_count(&self, fish_id: &str) -> CatchCounts {
        self.fish.get(fish_id).copied().unwrap_or_default()
    }

    fn increment(&mut self, fish_id: &str, perfect: bool) {
        let counts = self.fish.entry(fish_id.to_string()).or_default();
        counts.catch_count = counts.catch_count.saturating_add(1);
        if perfect {
            counts.perfect_count = counts.perfect_count.saturating_add(1);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CONFIG VIEWS — read-only slices of the user config handed to the core
// ═══════════════════════════════════════════════════════════════════════

/// When auto-resolve is allowed for a fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityThresholds {
    /// Global switch; when off the minigame is never skipped.
    pub skip_enabled: bool,
    pub min_catch_count: u32,
    pub min_perfect_count: u32,
}

impl EligibilityThresholds {
    pub fn satisfied_by(&self, counts: CatchCounts) -> bool {
        counts.catch_count >= self.min_catch_count
            && counts.perfect_count >= self.min_perfect_count
    }
}

/// Knobs for the outcome resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    pub force_perfect: bool,
    pub allow_treasure_capture: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// HUD notification for player feedback.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub message: String,
    pub duration_secs: f32,
    /// Item whose sprite is shown next to the message.
    pub icon: Option<FishId>,
}

/// Request to bump the catch counter for a fish.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct RecordCatchEvent {
    pub fish_id: FishId,
    pub perfect: bool,
}

/// Flip auto-fishing mode on or off.
#[derive(Event, Debug, Clone, Default)]
pub struct ToggleAutoFishingEvent;
