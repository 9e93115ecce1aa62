//! HUD message text with `{{token}}` placeholders.
//!
//! English strings are built in. A JSON object of `key: template` pairs can be
//! layered on top to translate or reword any of them.

use bevy::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const KEY_NEEDED: &str = "bobber-bar.needed";
pub const KEY_FAMILIAR: &str = "bobber-bar.familiar";
pub const KEY_AUTO_ON: &str = "auto-fishing.enabled";
pub const KEY_AUTO_OFF: &str = "auto-fishing.disabled";

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (
        KEY_NEEDED,
        "Not familiar with {{fishName}} yet: catch {{catchNeeded}} more ({{perfectNeeded}} more perfect) to skip.",
    ),
    (KEY_FAMILIAR, "Familiar fish, reeled in without a fight."),
    (KEY_AUTO_ON, "Auto fishing on."),
    (KEY_AUTO_OFF, "Auto fishing off."),
];

#[derive(Resource, Debug, Clone)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Translations {
    /// Render `key`, substituting each `{{name}}` with its value.
    pub fn get(&self, key: &str, tokens: &[(&str, String)]) -> String {
        let Some(template) = self.entries.get(key) else {
            return format!("(no translation:{})", key);
        };
        let mut text = template.clone();
        for (name, value) in tokens {
            text = text.replace(&format!("{{{{{}}}}}", name), value);
        }
        text
    }

    pub fn merge_json(&mut self, json: &str) -> Result<usize, String> {
        let overrides: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| format!("Deserialization failed: {}", e))?;
        let n = overrides.len();
        self.entries.extend(overrides);
        Ok(n)
    }

    /// Defaults plus whatever `path` overrides. Missing or broken files keep the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        let mut translations = Self::default();
        if !path.exists() {
            return translations;
        }
        let result = fs::read_to_string(path)
            .map_err(|e| format!("Read failed for {}: {}", path.display(), e))
            .and_then(|json| translations.merge_json(&json));
        match result {
            Ok(n) => info!("[I18n] {} entries from {}", n, path.display()),
            Err(e) => warn!("[I18n] {}", e),
        }
        translations
    }
}
