//! Whether a fish is familiar enough to skip its bobber bar.

use crate::shared::*;

/// What the player still has to do before a fish is auto-reeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressNotification {
    pub fish_name: String,
    pub catch_needed: u32,
    pub perfect_needed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// Skipping is switched off in the config. Nothing to tell the player.
    Disabled,
    NotYet(ProgressNotification),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

pub fn check_eligibility(
    fish_id: &str,
    fish_name: &str,
    thresholds: &EligibilityThresholds,
    history: &impl CatchHistory,
) -> Eligibility {
    if !thresholds.skip_enabled {
        return Eligibility::Disabled;
    }

    let counts = history.current_count(fish_id);
    if thresholds.satisfied_by(counts) {
        return Eligibility::Eligible;
    }

    Eligibility::NotYet(ProgressNotification {
        fish_name: fish_name.to_string(),
        catch_needed: thresholds.min_catch_count.saturating_sub(counts.catch_count),
        perfect_needed: thresholds.min_perfect_count.saturating_sub(counts.perfect_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(min_catch: u32, min_perfect: u32) -> EligibilityThresholds {
        EligibilityThresholds {
            skip_enabled: true,
            min_catch_count: min_catch,
            min_perfect_count: min_perfect,
        }
    }

    fn history(fish_id: &str, catches: u32, perfects: u32) -> FishCounter {
        let mut counter = FishCounter::default();
        counter.fish.insert(
            fish_id.to_string(),
            CatchCounts {
                catch_count: catches,
                perfect_count: perfects,
            },
        );
        counter
    }

    #[test]
    fn test_reports_both_shortfalls() {
        let result = check_eligibility("tuna", "Tuna", &thresholds(5, 2), &history("tuna", 3, 1));
        assert_eq!(
            result,
            Eligibility::NotYet(ProgressNotification {
                fish_name: "Tuna".to_string(),
                catch_needed: 2,
                perfect_needed: 1,
            })
        );
        assert!(!result.is_eligible());
    }

    #[test]
    fn test_meeting_both_thresholds_is_eligible() {
        let result = check_eligibility("tuna", "Tuna", &thresholds(5, 2), &history("tuna", 5, 2));
        assert!(result.is_eligible());
    }

    #[test]
    fn test_one_unmet_threshold_blocks_and_other_clamps_to_zero() {
        // Plenty of catches, no perfects.
        let result = check_eligibility("eel", "Eel", &thresholds(5, 2), &history("eel", 40, 0));
        match result {
            Eligibility::NotYet(n) => {
                assert_eq!(n.catch_needed, 0);
                assert_eq!(n.perfect_needed, 2);
            }
            other => panic!("expected NotYet, got {:?}", other),
        }

        // Plenty of perfects, not enough catches.
        let result = check_eligibility("eel", "Eel", &thresholds(5, 2), &history("eel", 4, 9));
        match result {
            Eligibility::NotYet(n) => {
                assert_eq!(n.catch_needed, 1);
                assert_eq!(n.perfect_needed, 0);
            }
            other => panic!("expected NotYet, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_fish_needs_everything() {
        let result = check_eligibility("legend", "Legend", &thresholds(3, 1), &FishCounter::default());
        assert_eq!(
            result,
            Eligibility::NotYet(ProgressNotification {
                fish_name: "Legend".to_string(),
                catch_needed: 3,
                perfect_needed: 1,
            })
        );
    }

    #[test]
    fn test_disabled_toggle_blocks_even_familiar_fish() {
        let mut t = thresholds(0, 0);
        t.skip_enabled = false;
        let result = check_eligibility("carp", "Carp", &t, &history("carp", 100, 100));
        assert_eq!(result, Eligibility::Disabled);
        assert!(!result.is_eligible());
    }

    #[test]
    fn test_zero_thresholds_admit_new_fish() {
        let result = check_eligibility("carp", "Carp", &thresholds(0, 0), &FishCounter::default());
        assert!(result.is_eligible());
    }
}
