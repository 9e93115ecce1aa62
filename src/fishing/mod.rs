use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::FishingTweaksConfig;
use crate::counter::CounterPlugin;
use crate::i18n::Translations;
use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
mod eligibility;
mod minigame;
mod resolve;

pub use eligibility::*;
pub use minigame::*;
pub use resolve::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

/// Auto-resolves the bobber bar for fish the player already knows.
///
/// Resources are registered with `init_resource`, so a host that loaded its
/// own config, counter or translations can insert them before adding this.
pub struct FishingTweaksPlugin;

impl Plugin for FishingTweaksPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources (config first: AutoFishing and the counter read it)
            .init_resource::<FishingTweaksConfig>()
            .init_resource::<Translations>()
            .init_resource::<FishRegistry>()
            .init_resource::<FishingMinigameState>()
            .init_resource::<AutoFishing>()
            .init_resource::<FishingRng>()
            .add_event::<ToastEvent>()
            .add_event::<ToggleAutoFishingEvent>()
            .add_plugins(CounterPlugin)
            // The two lifecycle points of a bobber bar
            .add_systems(OnEnter(GameState::Fishing), minigame::skip_minigame_on_enter)
            .add_systems(OnExit(GameState::Fishing), minigame::record_fishing_on_exit)
            .add_systems(Update, minigame::handle_auto_fishing_toggle);
    }
}

// ─── Mode & RNG Resources ────────────────────────────────────────────────────

/// Runtime auto-fishing mode. Starts from `auto_fishing_on_start`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoFishing(pub bool);

impl FromWorld for AutoFishing {
    fn from_world(world: &mut World) -> Self {
        let enabled = world
            .get_resource::<FishingTweaksConfig>()
            .map(|c| c.auto_fishing_on_start)
            .unwrap_or(true);
        Self(enabled)
    }
}

/// Random source for perfect-catch rolls.
#[derive(Resource, Debug)]
pub struct FishingRng(pub StdRng);

impl Default for FishingRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl FishingRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

// ─── Minigame State Resource ─────────────────────────────────────────────────

/// Live bobber-bar state, shared with the host.
///
/// The host fills in the fish fields before entering `GameState::Fishing`,
/// drives `distance_from_catching` while the player plays, and sets
/// `handled_fish_result` once the catch has been processed.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FishingMinigameState {
    pub which_fish: FishId,
    pub motion: MotionCategory,
    pub boss_fish: bool,
    pub difficulty: f32,
    /// A treasure chest is in play this round.
    pub treasure: bool,
    /// Catch progress. >= 1.0 lands the fish, < 0.5 at the end is a miss.
    pub distance_from_catching: f32,
    pub treasure_caught: bool,
    /// Starts true and is cleared by the host when the fish slips out of the bar.
    pub perfect: bool,
    pub handled_fish_result: bool,
    /// Set when this round was completed by `skip_minigame`.
    pub auto_resolved: bool,
}

impl Default for FishingMinigameState {
    fn default() -> Self {
        Self {
            which_fish: String::new(),
            motion: MotionCategory::Mixed,
            boss_fish: false,
            difficulty: 0.0,
            treasure: false,
            distance_from_catching: 0.3,
            treasure_caught: false,
            perfect: true,
            handled_fish_result: false,
            auto_resolved: false,
        }
    }
}

impl FishingMinigameState {
    /// Reset for a fresh bobber bar on `fish`.
    pub fn setup(&mut self, fish: &FishDef, treasure: bool) {
        *self = Self {
            which_fish: fish.id.clone(),
            motion: fish.motion,
            boss_fish: fish.boss_fish,
            difficulty: fish.difficulty,
            treasure,
            ..Self::default()
        };
    }

    pub fn context(&self) -> CatchAttemptContext {
        CatchAttemptContext {
            fish_id: self.which_fish.clone(),
            motion: self.motion,
            is_boss_fish: self.boss_fish,
            difficulty: self.difficulty,
            has_treasure: self.treasure,
        }
    }

    /// Write a resolved outcome back into the bar. Progress always goes to the top.
    pub fn apply_outcome(&mut self, outcome: &ResolutionOutcome) {
        self.distance_from_catching = MAX_CATCH_DISTANCE;
        self.treasure_caught = outcome.treasure_caught;
        self.perfect = outcome.is_perfect;
        self.auto_resolved = true;
    }

    pub fn is_miss(&self) -> bool {
        self.distance_from_catching < MISS_DISTANCE
    }
}
