//! Settings port: access to the current configuration snapshot.

use std::sync::Arc;

use birdview_domain::settings::Settings;

/// Hands out immutable settings snapshots.
///
/// Callers take one snapshot per request and use it for the whole request.
pub trait SettingsProvider {
    /// The snapshot currently in effect.
    fn snapshot(&self) -> Arc<Settings>;
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for Arc<T> {
    fn snapshot(&self) -> Arc<Settings> {
        (**self).snapshot()
    }
}
