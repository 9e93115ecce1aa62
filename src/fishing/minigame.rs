//! The two bobber-bar lifecycle points.
//!
//! `skip_minigame` runs when the bar appears: unfamiliar fish get a toast saying
//! how many more catches are needed, familiar ones are reeled in on the spot.
//! `record_fishing` runs when the bar goes away and turns a landed fish into a
//! counter increment. Both are plain functions; the systems below only fetch
//! resources and forward the results as events.

use bevy::prelude::*;
use rand::Rng;

use crate::config::FishingTweaksConfig;
use crate::i18n::{Translations, KEY_AUTO_OFF, KEY_AUTO_ON, KEY_FAMILIAR, KEY_NEEDED};
use crate::shared::*;
use super::eligibility::{check_eligibility, Eligibility};
use super::resolve::resolve;
use super::{AutoFishing, FishingMinigameState, FishingRng};

const TOAST_SECS: f32 = 3.0;

// ─── Lifecycle calls ─────────────────────────────────────────────────────────

/// Attempt begins. Returns the toast to show, if any.
///
/// The bar is only touched when the fish is eligible.
pub fn skip_minigame<R: Rng>(
    bar: &mut FishingMinigameState,
    auto_fishing: bool,
    config: &FishingTweaksConfig,
    history: &impl CatchHistory,
    fish_name: &str,
    translations: &Translations,
    rng: &mut R,
) -> Option<ToastEvent> {
    if !auto_fishing {
        return None;
    }

    let eligibility = check_eligibility(&bar.which_fish, fish_name, &config.thresholds(), history);
    let message = match eligibility {
        Eligibility::Disabled => return None,
        Eligibility::NotYet(needed) => translations.get(
            KEY_NEEDED,
            &[
                ("fishName", needed.fish_name),
                ("catchNeeded", needed.catch_needed.to_string()),
                ("perfectNeeded", needed.perfect_needed.to_string()),
            ],
        ),
        Eligibility::Eligible => {
            let outcome = resolve(&bar.context(), config.resolve_options(), rng);
            bar.apply_outcome(&outcome);
            info!(
                "[Fishing] Auto-reeled {} (perfect: {}, treasure: {})",
                bar.which_fish, outcome.is_perfect, outcome.treasure_caught
            );
            translations.get(KEY_FAMILIAR, &[])
        }
    };

    Some(ToastEvent {
        message,
        duration_secs: TOAST_SECS,
        icon: Some(bar.which_fish.clone()),
    })
}

/// Attempt ends. Returns the counter increment for a landed fish.
///
/// Every handled catch counts while auto-fishing is on, played or skipped.
pub fn record_fishing(bar: &FishingMinigameState, auto_fishing: bool) -> Option<RecordCatchEvent> {
    if !auto_fishing || !bar.handled_fish_result || bar.is_miss() {
        return None;
    }
    Some(RecordCatchEvent {
        fish_id: bar.which_fish.clone(),
        perfect: bar.perfect,
    })
}

// ─── Systems ─────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn skip_minigame_on_enter(
    mut bar: ResMut<FishingMinigameState>,
    auto_fishing: Res<AutoFishing>,
    config: Res<FishingTweaksConfig>,
    counter: Res<FishCounter>,
    fish_registry: Res<FishRegistry>,
    translations: Res<Translations>,
    mut rng: ResMut<FishingRng>,
    mut toast_events: EventWriter<ToastEvent>,
) {
    let fish_name = fish_registry.display_name(&bar.which_fish).to_string();
    let toast = skip_minigame(
        &mut bar,
        auto_fishing.0,
        &config,
        &*counter,
        &fish_name,
        &translations,
        &mut rng.0,
    );
    if let Some(toast) = toast {
        toast_events.send(toast);
    }
}

pub fn record_fishing_on_exit(
    bar: Res<FishingMinigameState>,
    auto_fishing: Res<AutoFishing>,
    mut records: EventWriter<RecordCatchEvent>,
) {
    match record_fishing(&bar, auto_fishing.0) {
        Some(record) => {
            records.send(record);
        }
        None if bar.handled_fish_result && bar.is_miss() => {
            debug!("[Fishing] {} got away, not counted", bar.which_fish);
        }
        None => {}
    }
}

pub fn handle_auto_fishing_toggle(
    mut events: EventReader<ToggleAutoFishingEvent>,
    mut auto_fishing: ResMut<AutoFishing>,
    translations: Res<Translations>,
    mut toast_events: EventWriter<ToastEvent>,
) {
    for _ in events.read() {
        auto_fishing.0 = !auto_fishing.0;
        let key = if auto_fishing.0 { KEY_AUTO_ON } else { KEY_AUTO_OFF };
        info!("[Fishing] Auto fishing {}", if auto_fishing.0 { "on" } else { "off" });
        toast_events.send(ToastEvent {
            message: translations.get(key, &[]),
            duration_secs: TOAST_SECS,
            icon: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn familiar_counter(fish_id: &str) -> FishCounter {
        let mut counter = FishCounter::default();
        for _ in 0..10 {
            counter.increment(fish_id, true);
        }
        counter
    }

    fn bar_for(fish_id: &str, motion: MotionCategory, difficulty: f32, treasure: bool) -> FishingMinigameState {
        FishingMinigameState {
            which_fish: fish_id.to_string(),
            motion,
            difficulty,
            treasure,
            ..Default::default()
        }
    }

    #[test]
    fn test_unfamiliar_fish_gets_needed_toast_and_bar_untouched() {
        let mut bar = bar_for("tuna", MotionCategory::Smooth, 70.0, true);
        let before = bar.clone();
        let mut counter = FishCounter::default();
        counter.increment("tuna", false);
        counter.increment("tuna", true);
        let config = FishingTweaksConfig {
            min_catch_count_for_skip: 5,
            min_perfect_count_for_skip: 2,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        let toast = skip_minigame(
            &mut bar,
            true,
            &config,
            &counter,
            "Tuna",
            &Translations::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(bar, before);
        assert!(toast.message.contains("Tuna"));
        assert!(toast.message.contains("catch 3 more"));
        assert!(toast.message.contains("1 more perfect"));
        assert_eq!(toast.icon.as_deref(), Some("tuna"));
    }

    #[test]
    fn test_familiar_fish_is_reeled_in() {
        let mut bar = bar_for("bream", MotionCategory::Smooth, 0.0, true);
        let mut rng = StdRng::seed_from_u64(2);

        let toast = skip_minigame(
            &mut bar,
            true,
            &FishingTweaksConfig::default(),
            &familiar_counter("bream"),
            "Bream",
            &Translations::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(bar.distance_from_catching, MAX_CATCH_DISTANCE);
        assert!(bar.perfect, "smooth fish at difficulty 0 is always perfect");
        assert!(bar.treasure_caught);
        assert!(bar.auto_resolved);
        assert_eq!(toast.message, Translations::default().get(KEY_FAMILIAR, &[]));
    }

    #[test]
    fn test_treasure_left_behind_when_disabled() {
        let mut bar = bar_for("bream", MotionCategory::Smooth, 0.0, true);
        let config = FishingTweaksConfig {
            skip_minigame_with_treasure: false,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        skip_minigame(
            &mut bar,
            true,
            &config,
            &familiar_counter("bream"),
            "Bream",
            &Translations::default(),
            &mut rng,
        );
        assert!(bar.auto_resolved);
        assert!(!bar.treasure_caught);
    }

    #[test]
    fn test_forced_perfect_on_hopeless_fish() {
        let mut bar = bar_for("legend", MotionCategory::Dart, 10_000.0, false);
        bar.boss_fish = true;
        let config = FishingTweaksConfig {
            skip_minigame_with_perfect: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        skip_minigame(
            &mut bar,
            true,
            &config,
            &familiar_counter("legend"),
            "Legend",
            &Translations::default(),
            &mut rng,
        );
        assert!(bar.perfect);
    }

    #[test]
    fn test_auto_fishing_off_is_silent() {
        let mut bar = bar_for("bream", MotionCategory::Smooth, 0.0, false);
        let before = bar.clone();
        let mut rng = StdRng::seed_from_u64(5);
        let toast = skip_minigame(
            &mut bar,
            false,
            &FishingTweaksConfig::default(),
            &familiar_counter("bream"),
            "Bream",
            &Translations::default(),
            &mut rng,
        );
        assert!(toast.is_none());
        assert_eq!(bar, before);
    }

    #[test]
    fn test_skip_disabled_is_silent() {
        let mut bar = bar_for("bream", MotionCategory::Smooth, 0.0, false);
        let before = bar.clone();
        let config = FishingTweaksConfig {
            enable_skip_minigame: false,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let toast = skip_minigame(
            &mut bar,
            true,
            &config,
            &FishCounter::default(),
            "Bream",
            &Translations::default(),
            &mut rng,
        );
        assert!(toast.is_none());
        assert_eq!(bar, before);
    }

    #[test]
    fn test_record_landed_fish() {
        let mut bar = bar_for("eel", MotionCategory::Smooth, 70.0, false);
        bar.distance_from_catching = 1.0;
        bar.perfect = false;
        bar.handled_fish_result = true;

        assert_eq!(
            record_fishing(&bar, true),
            Some(RecordCatchEvent {
                fish_id: "eel".to_string(),
                perfect: false,
            })
        );
    }

    #[test]
    fn test_record_skips_miss_unhandled_and_mode_off() {
        let mut bar = bar_for("eel", MotionCategory::Smooth, 70.0, false);
        bar.handled_fish_result = true;
        bar.distance_from_catching = 0.49;
        assert_eq!(record_fishing(&bar, true), None);

        bar.distance_from_catching = 0.5;
        assert!(record_fishing(&bar, true).is_some());
        assert_eq!(record_fishing(&bar, false), None);

        bar.handled_fish_result = false;
        assert_eq!(record_fishing(&bar, true), None);
    }
}
