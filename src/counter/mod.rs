use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FishingTweaksConfig;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

/// Owns the fish counter. A counter or save path inserted by the host wins;
/// otherwise both come from `FishingTweaksConfig::counter_save_path`.
pub struct CounterPlugin;

impl Plugin for CounterPlugin {
    fn build(&self, app: &mut App) {
        let configured = app
            .world()
            .get_resource::<FishingTweaksConfig>()
            .and_then(|c| c.counter_save_path.clone());

        if !app.world().contains_resource::<CounterSavePath>() {
            app.insert_resource(CounterSavePath(configured));
        }
        if !app.world().contains_resource::<FishCounter>() {
            let counter = app
                .world()
                .resource::<CounterSavePath>()
                .0
                .as_deref()
                .map(load_counter_or_default)
                .unwrap_or_default();
            app.insert_resource(counter);
        }

        app.add_event::<RecordCatchEvent>()
            .add_systems(Update, apply_catch_records);
    }
}

/// Where `apply_catch_records` persists the counter. `None` = memory only.
#[derive(Resource, Debug, Clone, Default)]
pub struct CounterSavePath(pub Option<PathBuf>);

// ═══════════════════════════════════════════════════════════════════════
// FILESYSTEM
// ═══════════════════════════════════════════════════════════════════════

pub fn read_counter(path: &Path) -> Result<FishCounter, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))
}

/// A missing file is a fresh counter; a broken one is logged and replaced.
pub fn load_counter_or_default(path: &Path) -> FishCounter {
    if !path.exists() {
        return FishCounter::default();
    }
    match read_counter(path) {
        Ok(counter) => {
            info!(
                "[Counter] Loaded {} fish from {}",
                counter.fish.len(),
                path.display()
            );
            counter
        }
        Err(e) => {
            warn!("[Counter] {}. Starting from zero.", e);
            FishCounter::default()
        }
    }
}

pub fn write_counter(path: &Path, counter: &FishCounter) -> Result<(), String> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Could not create {}: {}", dir.display(), e))?;
    }

    let json = serde_json::to_string_pretty(counter)
        .map_err(|e| format!("Serialization failed: {}", e))?;

    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, path).map_err(|e| format!("Rename failed: {}", e))?;

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Apply increment requests, then persist once per frame if anything changed.
pub fn apply_catch_records(
    mut events: EventReader<RecordCatchEvent>,
    mut counter: ResMut<FishCounter>,
    save_path: Res<CounterSavePath>,
) {
    let mut changed = false;
    for ev in events.read() {
        counter.increment(&ev.fish_id, ev.perfect);
        let counts = counter.current_count(&ev.fish_id);
        debug!(
            "[Counter] {} → {} caught, {} perfect",
            ev.fish_id, counts.catch_count, counts.perfect_count
        );
        changed = true;
    }

    if !changed {
        return;
    }
    if let Some(path) = &save_path.0 {
        if let Err(e) = write_counter(path, &counter) {
            warn!("[Counter] Save failed: {}", e);
        }
    }
}
