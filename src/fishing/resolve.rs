//! Outcome resolution for an auto-completed bobber bar.
//!
//! A perfect catch is rolled, not played:
//!
//! | Motion            | Base chance | Boss fish |
//! |-------------------|-------------|-----------|
//! | Dart              | 5%          | 1%        |
//! | Smooth            | 90%         | 18%       |
//! | Floater / Sinker  | 22%         | 5%        |
//! | Mixed             | 54%         | 11%       |
//!
//! The base chance is then scaled by a curve over the fish's difficulty that
//! starts near 1.19 and sinks to -0.0372. Past difficulty ~229 the threshold goes
//! negative and no roll can be perfect.

use rand::Rng;

use crate::shared::*;

// ─── Curve constants ─────────────────────────────────────────────────────────

const CURVE_OFFSET: f64 = -3.72;
const CURVE_PEAK: f64 = 123.0;
const CURVE_SCALE: f64 = 44.29;
const CURVE_EXPONENT: f64 = 2.11;

/// Rolls are drawn from `0..ROLL_RANGE`.
pub const ROLL_RANGE: u32 = 100;

// ─── Data types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionOutcome {
    pub is_perfect: bool,
    pub treasure_caught: bool,
    /// Always true; the resolver only runs for attempts it will complete.
    pub progress_complete: bool,
}

// ─── Chance table ─────────────────────────────────────────────────────────────

/// Perfect-catch chance in percent before boss and difficulty adjustments.
pub fn base_chance_percent(motion: MotionCategory) -> u32 {
    match motion {
        MotionCategory::Dart => 5,
        MotionCategory::Smooth => 90,
        MotionCategory::FloaterOrSinker => 22,
        MotionCategory::Mixed => 54,
    }
}

/// Boss fish keep a fifth of the chance, rounded up.
pub fn boss_adjusted_chance(base: u32, is_boss_fish: bool) -> u32 {
    if is_boss_fish {
        base.div_ceil(5)
    } else {
        base
    }
}

pub fn difficulty_multiplier(difficulty: f32) -> f64 {
    let ratio = f64::from(difficulty) / CURVE_SCALE;
    (CURVE_OFFSET + CURVE_PEAK / (1.0 + ratio.powf(CURVE_EXPONENT))) / 100.0
}

/// Highest roll that still counts as perfect. Not rounded, and may be negative.
pub fn perfect_threshold(motion: MotionCategory, is_boss_fish: bool, difficulty: f32) -> f64 {
    let chance = boss_adjusted_chance(base_chance_percent(motion), is_boss_fish);
    f64::from(chance) * difficulty_multiplier(difficulty)
}

pub fn is_perfect_roll(roll: u32, threshold: f64) -> bool {
    f64::from(roll) <= threshold
}

// ─── Resolution ───────────────────────────────────────────────────────────────

/// Decide how an approved attempt ends.
pub fn resolve<R: Rng>(
    context: &CatchAttemptContext,
    options: ResolveOptions,
    rng: &mut R,
) -> ResolutionOutcome {
    let treasure_caught = context.has_treasure && options.allow_treasure_capture;

    let is_perfect = if options.force_perfect {
        true
    } else {
        let threshold =
            perfect_threshold(context.motion, context.is_boss_fish, context.difficulty);
        let roll = rng.gen_range(0..ROLL_RANGE);
        is_perfect_roll(roll, threshold)
    };

    ResolutionOutcome {
        is_perfect,
        treasure_caught,
        progress_complete: true,
    }
}
