//! Config file watcher for settings hot reload.
//!
//! Only the dashboard settings are reloaded. Server and logging sections are
//! read once at startup.
//!
//! The watch is installed on the file's directory so that it survives
//! editors that save by renaming a temporary file over the config.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use birdview_app::settings_store::SettingsStore;

use crate::config::{Config, ConfigError};

/// Reload `path` and publish the new settings snapshot.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file is missing, empty, or cannot be
/// read, parsed or validated. The current snapshot stays in effect in that
/// case.
pub fn reload(path: &Path, store: &SettingsStore) -> Result<(), ConfigError> {
    let config = Config::load_existing(path)?;
    store.publish(config.settings());
    Ok(())
}

/// Start watching `path`, publishing a new snapshot after every change.
///
/// The returned watcher stops when dropped.
///
/// # Errors
///
/// Returns [`notify::Error`] if `path` has no file name or the watch cannot
/// be installed.
pub fn spawn(path: &Path, store: Arc<SettingsStore>) -> Result<RecommendedWatcher, notify::Error> {
    let file_name = path
        .file_name()
        .ok_or_else(|| notify::Error::generic("config path has no file name"))?
        .to_os_string();
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let watched = path.to_path_buf();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) if is_config_change(&event, &file_name) => {
            tracing::debug!(path = %watched.display(), kind = ?event.kind, "config file changed");
            log_reload(&watched, reload(&watched, &store));
        }
        Ok(_) => {}
        Err(err) => tracing::error!(error = %err, "config watch error"),
    })?;

    watcher.watch(directory, RecursiveMode::NonRecursive)?;
    tracing::info!(path = %path.display(), "config watcher started");
    Ok(watcher)
}

/// Whether `event` modifies or creates the file called `file_name`.
fn is_config_change(event: &Event, file_name: &OsStr) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|changed| changed.file_name() == Some(file_name))
}

fn log_reload(path: &Path, result: Result<(), ConfigError>) {
    match result {
        Ok(()) => tracing::info!(path = %path.display(), "settings reloaded"),
        // a save in progress: the next event carries the final content
        Err(ConfigError::Empty) => {
            tracing::debug!(path = %path.display(), "config file is empty, waiting for content");
        }
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file is gone, waiting for it to reappear");
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to reload settings, keeping current snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birdview_app::ports::SettingsProvider;
    use birdview_domain::settings::Settings;
    use notify::EventKind;
    use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "birdview-{name}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn store_with_summary_limit(limit: u32) -> SettingsStore {
        let mut settings = Settings::default();
        settings.dashboard.summary_limit = limit;
        SettingsStore::new(settings)
    }

    fn wait_for(condition: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        condition()
    }

    #[test]
    fn should_publish_reloaded_settings() {
        let path = temp_config("reload-ok", "[dashboard]\nsummary_limit = 9\n");
        let store = SettingsStore::default();

        reload(&path, &store).unwrap();

        assert_eq!(store.snapshot().dashboard.summary_limit, 9);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_keep_snapshot_when_reload_is_invalid() {
        let path = temp_config("reload-invalid", "[locale]\nactive = 'xx'\n");
        let store = SettingsStore::default();
        let before = store.snapshot();

        let result = reload(&path, &store);

        assert!(matches!(result, Err(ConfigError::Settings(_))));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_keep_snapshot_when_reload_is_malformed() {
        let path = temp_config("reload-malformed", "[dashboard\n");
        let store = SettingsStore::default();

        assert!(matches!(reload(&path, &store), Err(ConfigError::Parse(_))));
        assert_eq!(*store.snapshot(), Settings::default());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_keep_snapshot_when_file_vanishes() {
        let store = store_with_summary_limit(7);
        let path = std::env::temp_dir().join(format!(
            "birdview-vanished-{}.toml",
            std::process::id()
        ));

        let result = reload(&path, &store);

        assert!(matches!(result, Err(ConfigError::Io(_))));
        assert_eq!(store.snapshot().dashboard.summary_limit, 7);
    }

    #[test]
    fn should_keep_snapshot_when_file_is_truncated() {
        let path = temp_config("reload-truncated", "");
        let store = store_with_summary_limit(7);

        let result = reload(&path, &store);

        assert!(matches!(result, Err(ConfigError::Empty)));
        assert_eq!(store.snapshot().dashboard.summary_limit, 7);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_only_react_to_changes_of_the_config_file() {
        let name = OsStr::new("birdview.toml");
        let config = PathBuf::from("/etc/birdview/birdview.toml");
        let sibling = PathBuf::from("/etc/birdview/birdview.toml.tmp");

        let modified = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(config.clone());
        let renamed = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::To)))
            .add_path(config.clone());
        let created = Event::new(EventKind::Create(CreateKind::File)).add_path(config.clone());
        let removed = Event::new(EventKind::Remove(RemoveKind::File)).add_path(config);
        let other = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(sibling);

        assert!(is_config_change(&modified, name));
        assert!(is_config_change(&renamed, name));
        assert!(is_config_change(&created, name));
        assert!(!is_config_change(&removed, name));
        assert!(!is_config_change(&other, name));
    }

    #[test]
    fn should_reload_after_file_is_replaced_by_rename() {
        let dir = std::env::temp_dir().join(format!("birdview-watch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("birdview.toml");
        let staged = dir.join("birdview.toml.tmp");
        std::fs::write(&path, "[dashboard]\nsummary_limit = 5\n").unwrap();

        let store = Arc::new(store_with_summary_limit(5));
        let _watcher = spawn(&path, Arc::clone(&store)).unwrap();

        std::fs::write(&staged, "[dashboard]\nsummary_limit = 11\n").unwrap();
        std::fs::rename(&staged, &path).unwrap();
        assert!(wait_for(|| store.snapshot().dashboard.summary_limit == 11));

        // the original inode is gone; later saves must still be picked up
        std::fs::write(&staged, "[dashboard]\nsummary_limit = 12\n").unwrap();
        std::fs::rename(&staged, &path).unwrap();
        assert!(wait_for(|| store.snapshot().dashboard.summary_limit == 12));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
