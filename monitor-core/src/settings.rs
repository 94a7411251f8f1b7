//! Display preferences: active theme id, mode and the background/panel/
//! sidebar color choices. Read once at startup from a local TOML file and
//! written only on explicit save, mirroring how the dashboard persisted
//! these keys in browser storage.

use crate::constants::settings;
use crate::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// One built-in theme preset; colors are HSL triplet strings.
#[derive(Debug, Clone)]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mode: &'static str,
    pub background: &'static str,
    pub panel: &'static str,
    pub sidebar: &'static str,
}

/// The shipped theme presets. Order is the display order.
pub const THEMES: &[ThemePreset] = &[
    ThemePreset {
        id: "dark",
        name: "Dark Theme",
        description: "Modern dark theme with glassmorphism effects",
        mode: "dark",
        background: "220 13% 9%",
        panel: "220 13% 12%",
        sidebar: "220 13% 10%",
    },
    ThemePreset {
        id: "light",
        name: "Light Theme",
        description: "Clean light theme with subtle shadows",
        mode: "light",
        background: "0 0% 100%",
        panel: "0 0% 100%",
        sidebar: "0 0% 100%",
    },
    ThemePreset {
        id: "light-blue",
        name: "Light Blue",
        description: "Soft blue theme with cool undertones",
        mode: "light",
        background: "220 50% 98%",
        panel: "220 50% 99%",
        sidebar: "220 50% 96%",
    },
    ThemePreset {
        id: "saffron",
        name: "Saffron",
        description: "Warm saffron theme with golden accents",
        mode: "light",
        background: "45 100% 96%",
        panel: "45 80% 98%",
        sidebar: "45 60% 94%",
    },
    ThemePreset {
        id: "purple-night",
        name: "Purple Night",
        description: "Deep purple theme with mystical vibes",
        mode: "dark",
        background: "270 30% 8%",
        panel: "270 30% 12%",
        sidebar: "270 30% 10%",
    },
    ThemePreset {
        id: "forest-green",
        name: "Forest Green",
        description: "Natural green theme inspired by forests",
        mode: "dark",
        background: "160 30% 10%",
        panel: "160 30% 13%",
        sidebar: "160 30% 11%",
    },
];

/// Look up a preset by id
pub fn find_theme(id: &str) -> Option<&'static ThemePreset> {
    THEMES.iter().find(|t| t.id == id)
}

/// Persisted display preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    pub theme: String,
    pub mode: String,
    pub background: String,
    pub panel: String,
    pub sidebar: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        // the default theme always exists in THEMES
        Self::from_preset(find_theme(settings::DEFAULT_THEME).expect("default theme registered"))
    }
}

impl DisplaySettings {
    pub fn from_preset(preset: &ThemePreset) -> Self {
        Self {
            theme: preset.id.to_string(),
            mode: preset.mode.to_string(),
            background: preset.background.to_string(),
            panel: preset.panel.to_string(),
            sidebar: preset.sidebar.to_string(),
        }
    }

    /// Switch to a named preset; unknown ids are an error.
    pub fn apply_theme(&mut self, theme_id: &str) -> Result<()> {
        let preset =
            find_theme(theme_id).ok_or_else(|| MonitorError::UnknownTheme(theme_id.to_string()))?;
        *self = Self::from_preset(preset);
        Ok(())
    }

    /// Find and load the settings file, checking the candidate names in
    /// order. Missing file means defaults; it is not written until the
    /// user explicitly saves.
    pub fn find_and_load() -> Self {
        for candidate in settings::FILE_CANDIDATES {
            if Path::new(candidate).exists() {
                match Self::load_from_file(candidate) {
                    Ok(loaded) => {
                        info!("Loaded display settings from {candidate}");
                        return loaded;
                    }
                    Err(err) => {
                        warn!("Ignoring unreadable settings file {candidate}: {err}");
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Explicit save; the only write path for these preferences.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved display settings to {}", path.as_ref().display());
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(settings::DEFAULT_FILE)
    }

    /// Reset to the default dark preset (not persisted until saved).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_builtin_themes_with_unique_ids() {
        assert_eq!(THEMES.len(), 6);
        for (i, theme) in THEMES.iter().enumerate() {
            assert!(
                THEMES[i + 1..].iter().all(|other| other.id != theme.id),
                "duplicate theme id {}",
                theme.id
            );
        }
    }

    #[test]
    fn default_settings_use_dark_theme() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.mode, "dark");
    }

    #[test]
    fn apply_known_and_unknown_theme() {
        let mut settings = DisplaySettings::default();
        settings.apply_theme("saffron").unwrap();
        assert_eq!(settings.theme, "saffron");
        assert_eq!(settings.mode, "light");

        assert!(settings.apply_theme("neon-void").is_err());
        // failed apply leaves settings untouched
        assert_eq!(settings.theme, "saffron");
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = DisplaySettings::default();
        settings.apply_theme("purple-night").unwrap();
        settings.save_to_file(&path).unwrap();

        let loaded = DisplaySettings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn reset_returns_to_default() {
        let mut settings = DisplaySettings::default();
        settings.apply_theme("forest-green").unwrap();
        settings.reset();
        assert_eq!(settings, DisplaySettings::default());
    }
}
