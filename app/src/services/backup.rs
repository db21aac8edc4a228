//! Backup and share-pack service
//!
//! JSON export/import of the whole store and shareable inventory packs.
//! Backups are profile-scoped: daily logs and settings belong to the
//! exporting profile, while the inventory collections are process-wide.
//! Import parses and validates the entire document before touching the
//! database, so a rejected file makes no partial change.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbeing_tracker_shared::models::{
    ActivityItem, DailyLog, FoodItem, UserSettings, WorkoutItem,
};

use crate::error::{AppError, AppResult};
use crate::repositories::{
    ActivityInventoryRepository, DailyLogRepository, FoodInventoryRepository, SettingsRepository,
    WorkoutInventoryRepository,
};
use crate::services::SummaryService;
use crate::store::Database;

/// Envelope version this build reads and writes
pub const BACKUP_VERSION: u32 = 1;

/// `type` discriminator of a shareable inventory pack
pub const SHARE_PACK_TYPE: &str = "inventory";

// =============================================================================
// Envelope formats
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackupFile {
    version: u32,
    // Older exports sometimes lack the timestamp; it carries no meaning
    // on import.
    #[serde(default = "Utc::now")]
    exported_at: DateTime<Utc>,
    data: BackupData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackupData {
    #[serde(default)]
    food_inventory: Vec<FoodItem>,
    #[serde(default)]
    workout_inventory: Vec<WorkoutItem>,
    #[serde(default)]
    activity_inventory: Vec<ActivityItem>,
    #[serde(default)]
    daily_logs: Vec<DailyLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_settings: Option<UserSettings>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SharePackFile {
    version: u32,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default = "Utc::now")]
    exported_at: DateTime<Utc>,
    name: String,
    data: SharePackData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SharePackData {
    #[serde(default)]
    food_inventory: Vec<FoodItem>,
    #[serde(default)]
    workout_inventory: Vec<WorkoutItem>,
}

// =============================================================================
// Import mode and result
// =============================================================================

/// How incoming records combine with stored ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Upsert incoming records by id, keeping everything else
    Merge,
    /// Clear the inventories and the profile's logs first
    Overwrite,
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(ImportMode::Merge),
            "overwrite" => Ok(ImportMode::Overwrite),
            _ => Err(format!("Unknown import mode: {} (merge|overwrite)", s)),
        }
    }
}

/// What an import wrote, for reporting
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub food_items: usize,
    pub workout_items: usize,
    pub activity_items: usize,
    pub daily_logs: usize,
    pub settings_applied: bool,
}

/// Backup service for export/import and CSV
pub struct BackupService;

impl BackupService {
    // =========================================================================
    // Full backups
    // =========================================================================

    /// Serialize the store to a pretty-printed backup document
    pub fn export_json(db: &Database, profile_id: Uuid) -> AppResult<String> {
        let file = BackupFile {
            version: BACKUP_VERSION,
            exported_at: Utc::now(),
            data: BackupData {
                food_inventory: FoodInventoryRepository::all(db),
                workout_inventory: WorkoutInventoryRepository::all(db),
                activity_inventory: ActivityInventoryRepository::all(db),
                daily_logs: DailyLogRepository::for_profile(db, profile_id),
                user_settings: SettingsRepository::get(db, profile_id),
            },
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Backup serialization error: {}", e)))
    }

    /// Apply a backup document to the store
    ///
    /// Logs and settings are re-keyed to the importing profile regardless
    /// of the ids they carried when exported.
    pub fn import_json(
        db: &mut Database,
        profile_id: Uuid,
        raw: &str,
        mode: ImportMode,
    ) -> AppResult<ImportSummary> {
        let file: BackupFile = serde_json::from_str(raw)
            .map_err(|e| AppError::Import(format!("Invalid backup file: {}", e)))?;
        if file.version != BACKUP_VERSION {
            return Err(AppError::Import(format!(
                "Unsupported backup version {}",
                file.version
            )));
        }
        let data = file.data;

        if mode == ImportMode::Overwrite {
            FoodInventoryRepository::clear(db);
            WorkoutInventoryRepository::clear(db);
            ActivityInventoryRepository::clear(db);
            DailyLogRepository::delete_for_profile(db, profile_id);
        }

        let mut summary = ImportSummary {
            food_items: data.food_inventory.len(),
            workout_items: data.workout_inventory.len(),
            activity_items: data.activity_inventory.len(),
            daily_logs: data.daily_logs.len(),
            settings_applied: data.user_settings.is_some(),
        };

        for item in data.food_inventory {
            FoodInventoryRepository::put(db, item);
        }
        for item in data.workout_inventory {
            WorkoutInventoryRepository::put(db, item);
        }
        for item in data.activity_inventory {
            ActivityInventoryRepository::put(db, item);
        }
        // Two incoming logs for the same date collapse after re-keying;
        // the later one wins, mirroring upsert semantics.
        let mut seen_dates = std::collections::BTreeSet::new();
        for mut log in data.daily_logs {
            log.profile_id = profile_id;
            if !seen_dates.insert(log.date) {
                summary.daily_logs -= 1;
            }
            DailyLogRepository::put(db, log);
        }
        if let Some(mut settings) = data.user_settings {
            settings.profile_id = profile_id;
            SettingsRepository::put(db, settings);
        }

        Ok(summary)
    }

    // =========================================================================
    // Inventory share packs
    // =========================================================================

    /// Serialize the food and workout inventories as a named share pack
    pub fn share_export_json(db: &Database, name: &str) -> AppResult<String> {
        let file = SharePackFile {
            version: BACKUP_VERSION,
            kind: SHARE_PACK_TYPE.to_string(),
            exported_at: Utc::now(),
            name: name.to_string(),
            data: SharePackData {
                food_inventory: FoodInventoryRepository::all(db),
                workout_inventory: WorkoutInventoryRepository::all(db),
            },
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Share serialization error: {}", e)))
    }

    /// Import a share pack, minting fresh ids and timestamps
    ///
    /// Importing the same pack twice yields two independent copies.
    pub fn share_import_json(db: &mut Database, raw: &str) -> AppResult<ImportSummary> {
        let file: SharePackFile = serde_json::from_str(raw)
            .map_err(|e| AppError::Import(format!("Invalid share pack: {}", e)))?;
        if file.version != BACKUP_VERSION {
            return Err(AppError::Import(format!(
                "Unsupported share pack version {}",
                file.version
            )));
        }
        if file.kind != SHARE_PACK_TYPE {
            return Err(AppError::Import(format!(
                "Not an inventory share pack: type '{}'",
                file.kind
            )));
        }

        let now = Utc::now();
        let summary = ImportSummary {
            food_items: file.data.food_inventory.len(),
            workout_items: file.data.workout_inventory.len(),
            ..ImportSummary::default()
        };

        for item in file.data.food_inventory {
            FoodInventoryRepository::put(
                db,
                FoodItem {
                    id: Uuid::new_v4(),
                    created_at: now,
                    updated_at: now,
                    ..item
                },
            );
        }
        for item in file.data.workout_inventory {
            WorkoutInventoryRepository::put(
                db,
                WorkoutItem {
                    id: Uuid::new_v4(),
                    created_at: now,
                    updated_at: now,
                    ..item
                },
            );
        }

        Ok(summary)
    }

    // =========================================================================
    // CSV
    // =========================================================================

    /// Trend series as CSV, one row per day
    pub fn trend_csv(
        db: &Database,
        profile_id: Uuid,
        end_date: NaiveDate,
        days: u32,
    ) -> AppResult<String> {
        let points = SummaryService::trend(db, profile_id, end_date, days);

        let mut wtr = csv::Writer::from_writer(vec![]);
        for point in &points {
            wtr.serialize(point).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("CSV serialization error: {}", e))
            })?;
        }
        let data = wtr
            .into_inner()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV buffer error: {}", e)))?;
        String::from_utf8(data)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{DailyLogService, InventoryService};
    use wellbeing_tracker_shared::models::WorkoutUnit;
    use wellbeing_tracker_shared::types::{FoodItemInput, ScalarField, WorkoutItemInput};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn seeded(db: &mut Database) -> Uuid {
        let profile = Uuid::new_v4();
        let food = InventoryService::add_food(
            db,
            FoodItemInput {
                name: "Oats".to_string(),
                calories: 389.0,
                kilojoules: 1628.0,
                protein: 16.9,
                carbs: 66.3,
                fiber: 10.6,
                sugars: 0.0,
                added_sugars: 0.0,
                fat: 6.9,
                saturated_fat: 1.2,
            },
        )
        .unwrap();
        InventoryService::add_workout(
            db,
            WorkoutItemInput {
                name: "Running".to_string(),
                calories_per_unit: 10.0,
                unit: WorkoutUnit::Minutes,
            },
        )
        .unwrap();
        DailyLogService::add_food_entry(db, profile, date(), food.id, 1.0).unwrap();
        profile
    }

    #[test]
    fn test_import_mode_parses() {
        assert_eq!("merge".parse::<ImportMode>().unwrap(), ImportMode::Merge);
        assert_eq!(
            "Overwrite".parse::<ImportMode>().unwrap(),
            ImportMode::Overwrite
        );
        assert!("replace".parse::<ImportMode>().is_err());
    }

    #[test]
    fn test_import_rejects_malformed_json_without_changes() {
        let mut db = Database::new();
        let profile = seeded(&mut db);
        let before = db.counts();

        let result = BackupService::import_json(&mut db, profile, "{not json", ImportMode::Merge);

        assert!(matches!(result, Err(AppError::Import(_))));
        assert_eq!(db.counts(), before);
    }

    #[test]
    fn test_import_rejects_missing_envelope_fields() {
        let mut db = Database::new();
        let profile = Uuid::new_v4();

        for raw in [r#"{"data": {}}"#, r#"{"version": 1}"#] {
            assert!(matches!(
                BackupService::import_json(&mut db, profile, raw, ImportMode::Merge),
                Err(AppError::Import(_))
            ));
        }
    }

    #[test]
    fn test_import_rejects_unsupported_version() {
        let mut db = Database::new();
        let profile = Uuid::new_v4();
        let raw = r#"{"version": 9, "data": {}}"#;

        let result = BackupService::import_json(&mut db, profile, raw, ImportMode::Overwrite);

        assert!(matches!(result, Err(AppError::Import(ref msg)) if msg.contains("version 9")));
    }

    #[test]
    fn test_import_rejects_malformed_collection_without_changes() {
        let mut db = Database::new();
        let profile = seeded(&mut db);
        let before = db.counts();
        // Trailing collection is corrupt, so nothing may be applied
        let raw = r#"{"version": 1, "data": {"dailyLogs": [{"date": "not-a-date"}]}}"#;

        let result = BackupService::import_json(&mut db, profile, raw, ImportMode::Overwrite);

        assert!(matches!(result, Err(AppError::Import(_))));
        assert_eq!(db.counts(), before);
    }

    #[test]
    fn test_import_merge_re_keys_logs() {
        let mut db = Database::new();
        let profile = Uuid::new_v4();
        let raw = format!(
            r#"{{"version": 1, "data": {{"dailyLogs": [
                {{"profileId": "{}", "date": "2024-03-15"}}
            ]}}}}"#,
            Uuid::new_v4()
        );

        let summary =
            BackupService::import_json(&mut db, profile, &raw, ImportMode::Merge).unwrap();

        assert_eq!(summary.daily_logs, 1);
        assert_eq!(DailyLogRepository::for_profile(&db, profile).len(), 1);
    }

    #[test]
    fn test_import_accepts_profileless_logs() {
        // Documents from before profiles existed carry no profileId at all
        let mut db = Database::new();
        let profile = Uuid::new_v4();
        let raw = r#"{"version": 1, "data": {"dailyLogs": [{"date": "2024-03-15", "steps": 4000}]}}"#;

        BackupService::import_json(&mut db, profile, raw, ImportMode::Merge).unwrap();

        let logs = DailyLogRepository::for_profile(&db, profile);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].steps, 4000);
    }

    #[test]
    fn test_overwrite_clears_other_profiles_inventories_but_not_logs() {
        let mut db = Database::new();
        let other = seeded(&mut db);
        DailyLogService::set_scalar(&mut db, other, date(), ScalarField::Steps(1234)).unwrap();
        let importing = Uuid::new_v4();

        let raw = r#"{"version": 1, "data": {}}"#;
        BackupService::import_json(&mut db, importing, raw, ImportMode::Overwrite).unwrap();

        // Inventories are process-wide and get cleared
        assert!(FoodInventoryRepository::all(&db).is_empty());
        // The other profile's logs survive an overwrite targeted elsewhere
        assert_eq!(DailyLogRepository::for_profile(&db, other).len(), 1);
    }

    #[test]
    fn test_share_import_rejects_wrong_type() {
        let mut db = Database::new();
        let raw = r#"{"version": 1, "type": "backup", "name": "x", "data": {}}"#;

        let result = BackupService::share_import_json(&mut db, raw);

        assert!(matches!(result, Err(AppError::Import(ref msg)) if msg.contains("backup")));
    }

    #[test]
    fn test_share_double_import_yields_independent_copies() {
        let mut db = Database::new();
        seeded(&mut db);
        let pack = BackupService::share_export_json(&db, "Starter pack").unwrap();

        BackupService::share_import_json(&mut db, &pack).unwrap();
        BackupService::share_import_json(&mut db, &pack).unwrap();

        let foods = FoodInventoryRepository::all(&db);
        assert_eq!(foods.len(), 3);
        let mut ids: Vec<_> = foods.iter().map(|f| f.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_trend_csv_shape() {
        let mut db = Database::new();
        let profile = seeded(&mut db);

        let csv = BackupService::trend_csv(&db, profile, date(), 2).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("date,caloriesConsumed,caloriesBurned,netCalories,sleepHours,steps,waterMl")
        );
        let rows: Vec<_> = lines.collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].starts_with("2024-03-15,389.0,"));
    }
}
