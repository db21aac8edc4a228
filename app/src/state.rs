//! Application state management
//!
//! One value owns everything a command needs: the configuration and the
//! in-memory store loaded from the snapshot.
//!
//! # Design Principles
//!
//! 1. **Load once**: the snapshot is read a single time at startup
//! 2. **Single writer**: mutation goes through `db_mut`, there is no sharing
//! 3. **Explicit persistence**: nothing touches disk until `flush`

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::store::{snapshot, Database};

/// Everything a command runs against
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// The in-memory store
    pub db: Database,
}

impl App {
    /// Load the snapshot named by the configuration
    ///
    /// A missing snapshot file yields an empty store; a corrupt one is an
    /// error rather than a silent reset.
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let db = snapshot::load(&config.snapshot_path())?;
        Ok(Self { config, db })
    }

    /// Write the store back to the snapshot file
    pub fn flush(&self) -> AppResult<()> {
        snapshot::save(&self.db, &self.config.snapshot_path())
    }

    /// Where the store persists to
    #[inline]
    pub fn snapshot_path(&self) -> PathBuf {
        self.config.snapshot_path()
    }

    /// Get a reference to the store
    #[inline]
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Get a mutable reference to the store
    #[inline]
    pub fn db_mut(&mut self) -> &mut Database {
        &mut self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::services::ProfileService;

    fn config_in(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                data_dir: dir.to_string_lossy().into_owned(),
                snapshot_file: "wellbeing.json".to_string(),
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_open_without_snapshot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::open(config_in(dir.path())).unwrap();
        assert_eq!(app.db().counts().profiles, 0);
    }

    #[test]
    fn test_flush_then_reopen_preserves_state() {
        let dir = tempfile::tempdir().unwrap();

        let mut app = App::open(config_in(dir.path())).unwrap();
        let profile = ProfileService::ensure_default(app.db_mut(), "Default").unwrap();
        app.flush().unwrap();

        let reopened = App::open(config_in(dir.path())).unwrap();
        assert_eq!(
            ProfileService::active(reopened.db()).map(|p| p.id),
            Some(profile.id)
        );
    }
}
