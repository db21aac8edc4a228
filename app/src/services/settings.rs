//! Settings service
//!
//! Per-profile daily targets and custom metric definitions. Reads never
//! fail: a profile without stored settings gets the defaults. Custom
//! metrics are upserted by id; built-in metrics use slug ids ("caffeine"),
//! user-created ones get a fresh uuid string.

use uuid::Uuid;

use wellbeing_tracker_shared::models::{CustomMetric, DailyTargets, UserSettings};
use wellbeing_tracker_shared::types::CustomMetricInput;
use wellbeing_tracker_shared::validation;

use crate::error::{AppError, AppResult};
use crate::repositories::SettingsRepository;
use crate::store::Database;

/// Settings service for business logic
pub struct SettingsService;

impl SettingsService {
    /// The profile's settings, falling back to defaults. Never writes.
    pub fn get(db: &Database, profile_id: Uuid) -> UserSettings {
        SettingsRepository::get(db, profile_id)
            .unwrap_or_else(|| UserSettings::default_for(profile_id))
    }

    /// Persist default settings for the profile if none exist yet
    pub fn ensure_initialized(db: &mut Database, profile_id: Uuid) -> UserSettings {
        match SettingsRepository::get(db, profile_id) {
            Some(settings) => settings,
            None => {
                let settings = UserSettings::default_for(profile_id);
                SettingsRepository::put(db, settings.clone());
                settings
            }
        }
    }

    /// Replace the profile's daily targets
    pub fn update_targets(
        db: &mut Database,
        profile_id: Uuid,
        targets: DailyTargets,
    ) -> AppResult<UserSettings> {
        let values = [
            targets.calories,
            targets.kilojoules,
            targets.protein,
            targets.carbs,
            targets.fiber,
            targets.sugars,
            targets.fat,
            targets.saturated_fat,
            targets.sleep_hours,
        ];
        for value in values {
            validation::validate_target_value(value).map_err(AppError::Validation)?;
        }
        let mut settings = Self::get(db, profile_id);
        settings.daily_targets = targets;
        SettingsRepository::put(db, settings.clone());
        Ok(settings)
    }

    /// Create or replace a custom metric definition
    ///
    /// With an id the existing metric is replaced (NotFound if absent);
    /// without one a fresh id is minted.
    pub fn upsert_custom_metric(
        db: &mut Database,
        profile_id: Uuid,
        id: Option<String>,
        input: CustomMetricInput,
    ) -> AppResult<CustomMetric> {
        validation::validate_metric_name(&input.name).map_err(AppError::Validation)?;
        validation::validate_metric_unit(&input.unit).map_err(AppError::Validation)?;
        if let Some(target) = input.target {
            validation::validate_target_value(target).map_err(AppError::Validation)?;
        }

        let mut settings = Self::get(db, profile_id);
        let metric = CustomMetric {
            id: id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: input.name,
            unit: input.unit,
            target: input.target,
            kind: input.kind,
        };

        match id {
            Some(existing_id) => {
                let slot = settings
                    .custom_metrics
                    .iter_mut()
                    .find(|m| m.id == existing_id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Custom metric {} not found", existing_id))
                    })?;
                *slot = metric.clone();
            }
            None => settings.custom_metrics.push(metric.clone()),
        }

        SettingsRepository::put(db, settings);
        Ok(metric)
    }

    /// Remove a custom metric definition; logged values stay behind
    pub fn remove_custom_metric(
        db: &mut Database,
        profile_id: Uuid,
        metric_id: &str,
    ) -> AppResult<()> {
        let mut settings = Self::get(db, profile_id);
        let before = settings.custom_metrics.len();
        settings.custom_metrics.retain(|m| m.id != metric_id);
        if settings.custom_metrics.len() == before {
            return Err(AppError::NotFound(format!(
                "Custom metric {} not found",
                metric_id
            )));
        }
        SettingsRepository::put(db, settings);
        Ok(())
    }

    /// Restore default targets and the built-in metric set
    pub fn reset_to_defaults(db: &mut Database, profile_id: Uuid) -> UserSettings {
        let settings = UserSettings::default_for(profile_id);
        SettingsRepository::put(db, settings.clone());
        settings
    }
}
