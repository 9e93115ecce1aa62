//! Headless fishing session.
//!
//! A stand-in host casts at random fish, plays the bobber bar by dice when the
//! plugin leaves it alone, and lets the plugin reel in fish it has learned.
//! Reads `auto_reel.ron` and `i18n.json` from the working directory if present.

use std::path::Path;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use auto_reel::config::{FishingTweaksConfig, DEFAULT_CONFIG_FILE};
use auto_reel::data::DataPlugin;
use auto_reel::fishing::{FishingMinigameState, FishingTweaksPlugin};
use auto_reel::i18n::Translations;
use auto_reel::shared::*;

const CASTS: u32 = 60;
const TREASURE_CHANCE: f64 = 0.15;

fn main() {
    let config = FishingTweaksConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE));
    let translations = Translations::load_or_default(Path::new("i18n.json"));

    App::new()
        .add_plugins((MinimalPlugins, StatesPlugin, LogPlugin::default()))
        .init_state::<GameState>()
        .insert_resource(config)
        .insert_resource(translations)
        .add_plugins(DataPlugin)
        .add_plugins(FishingTweaksPlugin)
        .insert_resource(SimulatedHost {
            casts_left: CASTS,
            rng: StdRng::from_entropy(),
        })
        .add_systems(Update, cast_line.run_if(in_state(GameState::Playing)))
        .add_systems(Update, play_bobber_bar.run_if(in_state(GameState::Fishing)))
        .add_systems(Update, show_toasts)
        .run();
}

#[derive(Resource)]
struct SimulatedHost {
    casts_left: u32,
    rng: StdRng,
}

fn cast_line(
    mut host: ResMut<SimulatedHost>,
    fish_registry: Res<FishRegistry>,
    counter: Res<FishCounter>,
    mut bar: ResMut<FishingMinigameState>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    if host.casts_left == 0 {
        let mut ids: Vec<&FishId> = counter.fish.keys().collect();
        ids.sort();
        for id in ids {
            let counts = counter.current_count(id);
            info!(
                "[Session] {:<16} caught {:>3}, perfect {:>3}",
                fish_registry.display_name(id),
                counts.catch_count,
                counts.perfect_count
            );
        }
        exit.send(AppExit::Success);
        return;
    }

    let mut ids: Vec<&FishId> = fish_registry.fish.keys().collect();
    if ids.is_empty() {
        warn!("[Session] Fish registry is empty, nothing to catch.");
        exit.send(AppExit::error());
        return;
    }
    ids.sort();

    let host = &mut *host;
    let id = ids[host.rng.gen_range(0..ids.len())];
    let treasure = host.rng.gen_bool(TREASURE_CHANCE);
    if let Some(def) = fish_registry.fish.get(id) {
        bar.setup(def, treasure);
        host.casts_left -= 1;
        next_state.set(GameState::Fishing);
    }
}

/// Plays the round by dice unless the plugin already finished it.
fn play_bobber_bar(
    mut host: ResMut<SimulatedHost>,
    mut bar: ResMut<FishingMinigameState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !bar.auto_resolved {
        let land_chance = (1.0 - f64::from(bar.difficulty) / 150.0).clamp(0.1, 0.95);
        let landed = host.rng.gen_bool(land_chance);
        bar.distance_from_catching = if landed { 1.0 } else { 0.0 };
        bar.perfect = landed && host.rng.gen_bool(0.3);
        bar.treasure_caught = bar.treasure && landed && host.rng.gen_bool(0.5);
        info!(
            "[Session] Played {}: {}{}",
            bar.which_fish,
            if landed { "landed" } else { "got away" },
            if bar.perfect { ", perfect" } else { "" }
        );
    }
    bar.handled_fish_result = true;
    next_state.set(GameState::Playing);
}

fn show_toasts(mut toasts: EventReader<ToastEvent>) {
    for toast in toasts.read() {
        info!("[HUD] {}", toast.message);
    }
}
