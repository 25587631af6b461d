//! Game settings and preferences
//!
//! Stored as JSON next to the binary. A missing or broken file is never
//! fatal: the defaults are used instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Key;

/// Maps one terminal character to a logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: char,
    pub action: Key,
}

impl KeyBinding {
    pub const fn new(key: char, action: Key) -> Self {
        Self { key, action }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terrain seed; fresh entropy when absent
    pub seed: Option<u64>,
    /// Log a JSON snapshot of the world after each frame (debug level)
    pub log_frames: bool,
    /// Character bindings, first match wins
    pub bindings: Vec<KeyBinding>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_frames: false,
            bindings: default_bindings(),
        }
    }
}

fn default_bindings() -> Vec<KeyBinding> {
    vec![
        // Player movement
        KeyBinding::new('w', Key::Up),
        KeyBinding::new('s', Key::Down),
        KeyBinding::new('a', Key::Left),
        KeyBinding::new('d', Key::Right),
        // Selection cursor
        KeyBinding::new('i', Key::CursorUp),
        KeyBinding::new('k', Key::CursorDown),
        KeyBinding::new('j', Key::CursorLeft),
        KeyBinding::new('l', Key::CursorRight),
        // Terrain edits
        KeyBinding::new('q', Key::Grow),
        KeyBinding::new('e', Key::Shrink),
        KeyBinding::new('r', Key::Rotate),
        // Session
        KeyBinding::new(' ', Key::Reset),
        KeyBinding::new('x', Key::Quit),
        KeyBinding::new('\u{1b}', Key::Quit),
    ]
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "ORB_GRID_SETTINGS";
    /// Settings file used when the variable is unset
    pub const DEFAULT_PATH: &'static str = "orb_grid.json";

    /// Logical key bound to a character, if any
    pub fn binding_for(&self, c: char) -> Option<Key> {
        self.bindings
            .iter()
            .find(|binding| binding.key == c)
            .map(|binding| binding.action)
    }

    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `ORB_GRID_SETTINGS`, or the default path
    pub fn load_from_env() -> Self {
        let path = std::env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());
        Self::load(path)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
