//! Snapshot persistence for the in-memory database
//!
//! The whole database serializes to one versioned JSON document. A missing
//! file is an empty database, not an error; a present-but-unreadable file
//! is, so a corrupt snapshot is never silently replaced by an empty one.
//! Saves write a temp file and rename it over the target, so a crash
//! mid-write leaves the previous snapshot intact.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use wellbeing_tracker_shared::models::{
    ActivityItem, DailyLog, FoodItem, Profile, UserSettings, WorkoutItem,
};

use super::database::{Database, LogKey};
use crate::error::{AppError, AppResult};

/// Version written into every snapshot; loads reject anything else
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFile {
    version: u32,
    saved_at: DateTime<Utc>,
    #[serde(default)]
    food_inventory: Vec<FoodItem>,
    #[serde(default)]
    workout_inventory: Vec<WorkoutItem>,
    #[serde(default)]
    activity_inventory: Vec<ActivityItem>,
    #[serde(default)]
    daily_logs: Vec<DailyLog>,
    #[serde(default)]
    user_settings: Vec<UserSettings>,
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Load a database from `path`, or an empty one if no snapshot exists
pub fn load(path: &Path) -> AppResult<Database> {
    if !path.exists() {
        info!("No snapshot at {}, starting empty", path.display());
        return Ok(Database::new());
    }

    let raw = fs::read_to_string(path)?;
    let file: SnapshotFile = serde_json::from_str(&raw).map_err(|e| {
        AppError::Storage(format!("Corrupt snapshot {}: {}", path.display(), e))
    })?;
    if file.version != SNAPSHOT_VERSION {
        return Err(AppError::Storage(format!(
            "Unsupported snapshot version {} (expected {})",
            file.version, SNAPSHOT_VERSION
        )));
    }

    let mut db = Database::new();
    for item in file.food_inventory {
        db.food_inventory.put(item.id, item);
    }
    for item in file.workout_inventory {
        db.workout_inventory.put(item.id, item);
    }
    for item in file.activity_inventory {
        db.activity_inventory.put(item.id, item);
    }
    for log in file.daily_logs {
        db.daily_logs.put(LogKey::new(log.profile_id, log.date), log);
    }
    for settings in file.user_settings {
        db.user_settings.put(settings.profile_id, settings);
    }
    for profile in file.profiles {
        db.profiles.put(profile.id, profile);
    }

    let counts = db.counts();
    info!(
        "Snapshot loaded: {} profiles, {} daily logs, {} inventory items",
        counts.profiles,
        counts.daily_logs,
        counts.food_items + counts.workout_items + counts.activity_items
    );
    Ok(db)
}

/// Write the database to `path` atomically (temp file, then rename)
pub fn save(db: &Database, path: &Path) -> AppResult<()> {
    let file = SnapshotFile {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        food_inventory: db.food_inventory.all(),
        workout_inventory: db.workout_inventory.all(),
        activity_inventory: db.activity_inventory.all(),
        daily_logs: db.daily_logs.all(),
        user_settings: db.user_settings.all(),
        profiles: db.profiles.all(),
    };
    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Snapshot serialization error: {}", e)))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!("Snapshot saved to {}", path.display());
    Ok(())
}
