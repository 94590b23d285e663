//! Settings snapshot: the read-only view of global configuration used for
//! rendering.
//!
//! A [`Settings`] value is never mutated once it is handed to the rendering
//! layer. Configuration changes produce a *new* snapshot that replaces the
//! old one atomically (see `birdview_app::settings_store`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Global configuration relevant to the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub birdnet: BirdNetSettings,
    pub locale: LocaleSettings,
    pub audio: AudioSettings,
    pub dashboard: DashboardSettings,
    pub species: SpeciesSettings,
}

/// Analyzer options shown on the main settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdNetSettings {
    /// Minimum confidence for a detection to be reported.
    pub threshold: f64,
    pub sensitivity: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Locale selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    /// Locale used for species labels and the UI.
    pub active: String,
    /// Locale codes offered in the language selector, in display order.
    pub available: Vec<String>,
}

/// Audio capture and clip export options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Capture device name, empty for the system default.
    pub source: String,
    pub export: AudioExportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioExportSettings {
    pub enabled: bool,
    pub path: String,
    /// Container format of exported clips (`wav`, `flac`, …).
    pub format: String,
}

/// Dashboard display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub thumbnails: ThumbnailSettings,
    /// Maximum number of species in the daily summary table.
    pub summary_limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSettings {
    /// Show bird thumbnails in the daily summary.
    pub summary: bool,
    /// Show bird thumbnails in the recent detections list.
    pub recent: bool,
    pub image_provider: String,
}

/// Species include/exclude lists and per-species overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesSettings {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Per-species overrides keyed by species name.
    pub config: BTreeMap<String, SpeciesConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesConfig {
    pub threshold: Option<f64>,
    pub interval: Option<u32>,
    pub actions: Vec<String>,
}

impl Settings {
    /// Check the semantic invariants of a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when no locale is configured, the active
    /// locale is not offered, or a confidence threshold lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.locale.available.is_empty() {
            return Err(SettingsError::NoLocales);
        }
        if !self
            .locale
            .available
            .iter()
            .any(|code| *code == self.locale.active)
        {
            return Err(SettingsError::UnknownActiveLocale(
                self.locale.active.clone(),
            ));
        }
        check_threshold("birdnet", self.birdnet.threshold)?;
        for (name, config) in &self.species.config {
            if let Some(threshold) = config.threshold {
                check_threshold(name, threshold)?;
            }
        }
        Ok(())
    }
}

fn check_threshold(scope: &str, value: f64) -> Result<(), SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::ThresholdOutOfRange {
            scope: scope.to_string(),
            value,
        })
    }
}

impl Default for BirdNetSettings {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            sensitivity: 1.0,
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            active: "en".to_string(),
            available: ["en", "de", "es", "fi", "fr", "nl", "sv"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for AudioExportSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "clips/".to_string(),
            format: "wav".to_string(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            thumbnails: ThumbnailSettings::default(),
            summary_limit: 30,
        }
    }
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            summary: false,
            recent: true,
            image_provider: "wikimedia".to_string(),
        }
    }
}
