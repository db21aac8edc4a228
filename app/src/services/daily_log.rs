//! Daily log service
//!
//! All writes against one profile's entries for one calendar day. Logs are
//! created lazily: reads fall back to an empty [`DailyLog`] without writing,
//! and the first mutation persists the document. Entry additions validate
//! the referenced inventory item up front, so dangling references can only
//! come in through imports, never through logging.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use wellbeing_tracker_shared::aggregate::merge_custom_metric;
use wellbeing_tracker_shared::models::{
    BowelMovement, DailyLog, DiscomfortLevel, LoggedFood, LoggedWorkout, MetricValue,
    SleepQuality, SleepSession,
};
use wellbeing_tracker_shared::types::{PhysioField, ScalarField, WellbeingField};
use wellbeing_tracker_shared::units::ClockTime;
use wellbeing_tracker_shared::validation;

use crate::error::{AppError, AppResult};
use crate::repositories::{
    DailyLogRepository, FoodInventoryRepository, WorkoutInventoryRepository,
};
use crate::store::Database;

/// Daily log service for business logic
pub struct DailyLogService;

impl DailyLogService {
    // =========================================================================
    // Reads
    // =========================================================================

    /// The stored log for the day, or an empty one. Never writes.
    pub fn get_or_default(db: &Database, profile_id: Uuid, date: NaiveDate) -> DailyLog {
        DailyLogRepository::get(db, profile_id, date)
            .unwrap_or_else(|| DailyLog::empty(profile_id, date))
    }

    /// Persist an empty log for the day if none exists yet. Idempotent.
    pub fn ensure_exists(db: &mut Database, profile_id: Uuid, date: NaiveDate) {
        if !DailyLogRepository::exists(db, profile_id, date) {
            DailyLogRepository::put(db, DailyLog::empty(profile_id, date));
        }
    }

    // =========================================================================
    // Food and workout entries
    // =========================================================================

    /// Log a quantity of a food from the inventory
    pub fn add_food_entry(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        inventory_id: Uuid,
        quantity: f64,
    ) -> AppResult<LoggedFood> {
        validation::validate_quantity(quantity).map_err(AppError::Validation)?;
        if FoodInventoryRepository::get(db, inventory_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Food item {} not found",
                inventory_id
            )));
        }
        let entry = LoggedFood {
            id: Uuid::new_v4(),
            inventory_id,
            quantity,
        };
        let mut log = Self::get_or_default(db, profile_id, date);
        log.food_items.push(entry.clone());
        DailyLogRepository::put(db, log);
        Ok(entry)
    }

    /// Remove one logged food entry by its entry id
    pub fn remove_food_entry(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        entry_id: Uuid,
    ) -> AppResult<()> {
        let mut log = Self::require(db, profile_id, date)?;
        let before = log.food_items.len();
        log.food_items.retain(|entry| entry.id != entry_id);
        if log.food_items.len() == before {
            return Err(AppError::NotFound(format!(
                "Food entry {} not found on {}",
                entry_id, date
            )));
        }
        DailyLogRepository::put(db, log);
        Ok(())
    }

    /// Log a quantity of a workout from the inventory
    pub fn add_workout_entry(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        inventory_id: Uuid,
        quantity: f64,
    ) -> AppResult<LoggedWorkout> {
        validation::validate_quantity(quantity).map_err(AppError::Validation)?;
        if WorkoutInventoryRepository::get(db, inventory_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Workout item {} not found",
                inventory_id
            )));
        }
        let entry = LoggedWorkout {
            id: Uuid::new_v4(),
            inventory_id,
            quantity,
        };
        let mut log = Self::get_or_default(db, profile_id, date);
        log.workout_items.push(entry.clone());
        DailyLogRepository::put(db, log);
        Ok(entry)
    }

    /// Remove one logged workout entry by its entry id
    pub fn remove_workout_entry(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        entry_id: Uuid,
    ) -> AppResult<()> {
        let mut log = Self::require(db, profile_id, date)?;
        let before = log.workout_items.len();
        log.workout_items.retain(|entry| entry.id != entry_id);
        if log.workout_items.len() == before {
            return Err(AppError::NotFound(format!(
                "Workout entry {} not found on {}",
                entry_id, date
            )));
        }
        DailyLogRepository::put(db, log);
        Ok(())
    }

    // =========================================================================
    // Sleep sessions
    // =========================================================================

    /// Record a sleep session from HH:MM wall-clock bounds
    ///
    /// Sessions may cross midnight; duration math lives in the aggregate
    /// layer, so the bounds are stored as given.
    pub fn add_sleep_session(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        start: &str,
        end: &str,
        quality: Option<SleepQuality>,
    ) -> AppResult<SleepSession> {
        validation::validate_clock_time(start).map_err(AppError::Validation)?;
        validation::validate_clock_time(end).map_err(AppError::Validation)?;
        let start_time: ClockTime = start.parse().map_err(AppError::Validation)?;
        let end_time: ClockTime = end.parse().map_err(AppError::Validation)?;
        let session = SleepSession {
            id: Uuid::new_v4(),
            start_time,
            end_time,
            quality,
        };
        let mut log = Self::get_or_default(db, profile_id, date);
        log.sleep_sessions.push(session.clone());
        DailyLogRepository::put(db, log);
        Ok(session)
    }

    /// Remove one sleep session by its id
    pub fn remove_sleep_session(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        session_id: Uuid,
    ) -> AppResult<()> {
        let mut log = Self::require(db, profile_id, date)?;
        let before = log.sleep_sessions.len();
        log.sleep_sessions.retain(|session| session.id != session_id);
        if log.sleep_sessions.len() == before {
            return Err(AppError::NotFound(format!(
                "Sleep session {} not found on {}",
                session_id, date
            )));
        }
        DailyLogRepository::put(db, log);
        Ok(())
    }

    // =========================================================================
    // Bowel movements
    // =========================================================================

    /// Record a bowel movement; time defaults to now, consistency is Bristol 1-7
    pub fn add_bowel_movement(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        time: Option<DateTime<Utc>>,
        consistency: Option<u8>,
        discomfort: Option<DiscomfortLevel>,
    ) -> AppResult<BowelMovement> {
        if let Some(scale) = consistency {
            validation::validate_bristol_scale(scale).map_err(AppError::Validation)?;
        }
        let movement = BowelMovement {
            id: Uuid::new_v4(),
            time: time.unwrap_or_else(Utc::now),
            consistency,
            discomfort,
        };
        let mut log = Self::get_or_default(db, profile_id, date);
        log.bowel_movements.push(movement.clone());
        DailyLogRepository::put(db, log);
        Ok(movement)
    }

    /// Remove one bowel movement record by its id
    pub fn remove_bowel_movement(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        movement_id: Uuid,
    ) -> AppResult<()> {
        let mut log = Self::require(db, profile_id, date)?;
        let before = log.bowel_movements.len();
        log.bowel_movements.retain(|movement| movement.id != movement_id);
        if log.bowel_movements.len() == before {
            return Err(AppError::NotFound(format!(
                "Bowel movement {} not found on {}",
                movement_id, date
            )));
        }
        DailyLogRepository::put(db, log);
        Ok(())
    }

    // =========================================================================
    // Scalar counters and metrics
    // =========================================================================

    /// Overwrite one scalar counter (steps, water, caffeine, minutes fields)
    pub fn set_scalar(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        field: ScalarField,
    ) -> AppResult<DailyLog> {
        let mut log = Self::get_or_default(db, profile_id, date);
        field.apply(&mut log);
        DailyLogRepository::put(db, log.clone());
        Ok(log)
    }

    /// Add to the day's water intake, saturating at u32::MAX
    pub fn add_water(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        ml: u32,
    ) -> AppResult<DailyLog> {
        let mut log = Self::get_or_default(db, profile_id, date);
        log.water_ml = log.water_ml.saturating_add(ml);
        DailyLogRepository::put(db, log.clone());
        Ok(log)
    }

    /// Set one custom metric value for the day, keyed by metric id
    pub fn set_custom_metric(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        metric_id: &str,
        value: MetricValue,
    ) -> AppResult<DailyLog> {
        if metric_id.trim().is_empty() {
            return Err(AppError::Validation("Metric id is required".to_string()));
        }
        let mut log = Self::get_or_default(db, profile_id, date);
        log.custom_metrics = merge_custom_metric(&log.custom_metrics, metric_id, value);
        DailyLogRepository::put(db, log.clone());
        Ok(log)
    }

    /// Set or clear one physiological reading
    pub fn set_physiological(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        field: PhysioField,
    ) -> AppResult<DailyLog> {
        if let Some(value) = field.value() {
            if !value.is_finite() {
                return Err(AppError::Validation(format!(
                    "{} must be a finite number",
                    field.label()
                )));
            }
        }
        let mut log = Self::get_or_default(db, profile_id, date);
        field.apply(&mut log);
        DailyLogRepository::put(db, log.clone());
        Ok(log)
    }

    /// Set or clear one wellbeing field; ratings are on a 1-10 scale
    pub fn set_wellbeing(
        db: &mut Database,
        profile_id: Uuid,
        date: NaiveDate,
        field: WellbeingField,
    ) -> AppResult<DailyLog> {
        if let Some(rating) = field.rating() {
            validation::validate_wellbeing_scale(rating).map_err(AppError::Validation)?;
        }
        if let WellbeingField::Notes(Some(ref notes)) = field {
            validation::validate_notes(notes).map_err(AppError::Validation)?;
        }
        let mut log = Self::get_or_default(db, profile_id, date);
        field.apply(&mut log);
        DailyLogRepository::put(db, log.clone());
        Ok(log)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// The stored log for the day, or NotFound. Removals only.
    fn require(db: &Database, profile_id: Uuid, date: NaiveDate) -> AppResult<DailyLog> {
        DailyLogRepository::get(db, profile_id, date)
            .ok_or_else(|| AppError::NotFound(format!("No log for {}", date)))
    }
}
