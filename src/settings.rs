//! User settings
//!
//! Window, asset and table parameters, stored as pretty-printed JSON in the
//! platform config directory (`~/.config/card-table/settings.json` on Linux).
//! Every field has a default, so a partial or missing file is fine.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::table::Direction;

/// Card spacings offered by the settings screen
pub const SPACING_CHOICES: [i32; 3] = [30, 45, 60];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings format error: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    /// Root of the `images/` tree
    pub asset_dir: PathBuf,

    /// Sleep between frames
    pub frame_delay_ms: u64,

    pub player_name: String,
    pub seat: Direction,

    pub card_width: u32,
    pub card_height: u32,
    /// Horizontal distance between neighbouring cards in the hand
    pub card_spacing: i32,
    /// How far a selected card is lifted out of the hand
    pub raise_offset: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window_title: "Card Table".to_string(),
            window_width: 480,
            window_height: 800,
            asset_dir: PathBuf::from("assets"),
            frame_delay_ms: 50,
            player_name: "YOU".to_string(),
            seat: Direction::South,
            card_width: 80,
            card_height: 120,
            card_spacing: 45,
            raise_offset: 100,
        }
    }
}

impl Settings {
    /// `<config dir>/card-table/settings.json`, or `./settings.json` without a config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("card-table").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Loads settings, falling back to defaults when the file is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No settings at {}, using defaults", path.display());
            return Settings::default();
        }

        match Settings::load_from_file(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Moves the local seat one step clockwise
    pub fn cycle_seat(&mut self) {
        self.seat = self.seat.next();
    }

    /// Steps through `SPACING_CHOICES`; a custom value restarts at the first choice
    pub fn cycle_spacing(&mut self) {
        self.card_spacing = match SPACING_CHOICES.iter().position(|&s| s == self.card_spacing) {
            Some(i) => SPACING_CHOICES[(i + 1) % SPACING_CHOICES.len()],
            None => SPACING_CHOICES[0],
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("card-table-test-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "player_name": "Sam", "seat": "West" }"#).unwrap();

        assert_eq!(settings.player_name, "Sam");
        assert_eq!(settings.seat, Direction::West);
        assert_eq!(settings.window_width, 480);
        assert_eq!(settings.card_spacing, 45);
    }

    #[test]
    fn test_cycle_spacing() {
        let mut settings = Settings::default();
        settings.cycle_spacing();
        assert_eq!(settings.card_spacing, 60);
        settings.cycle_spacing();
        assert_eq!(settings.card_spacing, 30);

        settings.card_spacing = 17;
        settings.cycle_spacing();
        assert_eq!(settings.card_spacing, 30);
    }

    #[test]
    fn test_cycle_seat() {
        let mut settings = Settings::default();
        settings.cycle_seat();
        assert_eq!(settings.seat, Direction::West);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut settings = Settings::default();
        settings.player_name = "Robin".to_string();
        settings.seat = Direction::North;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_or_broken_file_gives_defaults() {
        let missing = temp_path("missing");
        assert_eq!(Settings::load_or_default(&missing), Settings::default());

        let broken = temp_path("broken");
        fs::create_dir_all(broken.parent().unwrap()).unwrap();
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&broken),
            Err(SettingsError::Format(_))
        ));
        assert_eq!(Settings::load_or_default(&broken), Settings::default());

        let _ = fs::remove_dir_all(broken.parent().unwrap());
    }
}
