//! Settings snapshot store backed by [`ArcSwap`].
//!
//! Readers take an `Arc<Settings>` without locking; a writer replaces the
//! whole snapshot in one atomic store. A reader therefore always sees either
//! the old or the new settings, never a mix of both.

use std::sync::Arc;

use arc_swap::ArcSwap;

use birdview_domain::settings::Settings;

use crate::ports::SettingsProvider;

/// Holds the settings snapshot currently in effect.
pub struct SettingsStore {
    current: ArcSwap<Settings>,
}

impl SettingsStore {
    #[must_use]
    pub fn new(initial: Settings) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    /// Replace the current snapshot, returning the previous one.
    pub fn publish(&self, settings: Settings) -> Arc<Settings> {
        let previous = self.current.swap(Arc::new(settings));
        tracing::info!("settings snapshot published");
        previous
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SettingsProvider for SettingsStore {
    fn snapshot(&self) -> Arc<Settings> {
        self.current.load_full()
    }
}
