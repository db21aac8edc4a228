//! Inventory management service
//!
//! Business logic for the reusable definitions that daily entries
//! reference: foods, workouts, and trackable activities. Adding mints the
//! id and timestamps; updating keeps createdAt and refreshes updatedAt;
//! deleting never cascades into logged entries.

use chrono::Utc;
use uuid::Uuid;

use wellbeing_tracker_shared::models::{ActivityItem, FoodItem, WorkoutItem};
use wellbeing_tracker_shared::types::{ActivityItemInput, FoodItemInput, WorkoutItemInput};
use wellbeing_tracker_shared::validation;

use crate::error::{AppError, AppResult};
use crate::repositories::{
    ActivityInventoryRepository, FoodInventoryRepository, WorkoutInventoryRepository,
};
use crate::store::Database;

/// Inventory service for business logic
pub struct InventoryService;

impl InventoryService {
    // =========================================================================
    // Food
    // =========================================================================

    /// Create a food definition with a fresh id and timestamps
    pub fn add_food(db: &mut Database, input: FoodItemInput) -> AppResult<FoodItem> {
        Self::validate_food(&input)?;
        let now = Utc::now();
        let item = FoodItem {
            id: Uuid::new_v4(),
            name: input.name,
            calories: input.calories,
            kilojoules: input.kilojoules,
            protein: input.protein,
            carbs: input.carbs,
            fiber: input.fiber,
            sugars: input.sugars,
            added_sugars: input.added_sugars,
            fat: input.fat,
            saturated_fat: input.saturated_fat,
            created_at: now,
            updated_at: now,
        };
        FoodInventoryRepository::put(db, item.clone());
        Ok(item)
    }

    /// Rewrite a food definition, keeping createdAt and refreshing updatedAt
    pub fn update_food(db: &mut Database, id: Uuid, input: FoodItemInput) -> AppResult<FoodItem> {
        Self::validate_food(&input)?;
        let existing = FoodInventoryRepository::get(db, id)
            .ok_or_else(|| AppError::NotFound(format!("Food item {} not found", id)))?;
        let item = FoodItem {
            id,
            name: input.name,
            calories: input.calories,
            kilojoules: input.kilojoules,
            protein: input.protein,
            carbs: input.carbs,
            fiber: input.fiber,
            sugars: input.sugars,
            added_sugars: input.added_sugars,
            fat: input.fat,
            saturated_fat: input.saturated_fat,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        FoodInventoryRepository::put(db, item.clone());
        Ok(item)
    }

    /// Remove a food definition; daily entries referencing it are untouched
    pub fn delete_food(db: &mut Database, id: Uuid) -> AppResult<()> {
        if !FoodInventoryRepository::delete(db, id) {
            return Err(AppError::NotFound(format!("Food item {} not found", id)));
        }
        Ok(())
    }

    /// All food definitions
    pub fn list_food(db: &Database) -> Vec<FoodItem> {
        FoodInventoryRepository::all(db)
    }

    fn validate_food(input: &FoodItemInput) -> AppResult<()> {
        validation::validate_item_name(&input.name).map_err(AppError::Validation)?;
        let values = [
            input.calories,
            input.kilojoules,
            input.protein,
            input.carbs,
            input.fiber,
            input.sugars,
            input.added_sugars,
            input.fat,
            input.saturated_fat,
        ];
        for value in values {
            validation::validate_nutrient_value(value).map_err(AppError::Validation)?;
        }
        Ok(())
    }

    // =========================================================================
    // Workouts
    // =========================================================================

    /// Create a workout definition with a fresh id and timestamps
    pub fn add_workout(db: &mut Database, input: WorkoutItemInput) -> AppResult<WorkoutItem> {
        Self::validate_workout(&input)?;
        let now = Utc::now();
        let item = WorkoutItem {
            id: Uuid::new_v4(),
            name: input.name,
            calories_per_unit: input.calories_per_unit,
            unit: input.unit,
            created_at: now,
            updated_at: now,
        };
        WorkoutInventoryRepository::put(db, item.clone());
        Ok(item)
    }

    /// Rewrite a workout definition, keeping createdAt and refreshing updatedAt
    pub fn update_workout(
        db: &mut Database,
        id: Uuid,
        input: WorkoutItemInput,
    ) -> AppResult<WorkoutItem> {
        Self::validate_workout(&input)?;
        let existing = WorkoutInventoryRepository::get(db, id)
            .ok_or_else(|| AppError::NotFound(format!("Workout item {} not found", id)))?;
        let item = WorkoutItem {
            id,
            name: input.name,
            calories_per_unit: input.calories_per_unit,
            unit: input.unit,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        WorkoutInventoryRepository::put(db, item.clone());
        Ok(item)
    }

    /// Remove a workout definition; daily entries referencing it are untouched
    pub fn delete_workout(db: &mut Database, id: Uuid) -> AppResult<()> {
        if !WorkoutInventoryRepository::delete(db, id) {
            return Err(AppError::NotFound(format!("Workout item {} not found", id)));
        }
        Ok(())
    }

    /// All workout definitions
    pub fn list_workouts(db: &Database) -> Vec<WorkoutItem> {
        WorkoutInventoryRepository::all(db)
    }

    fn validate_workout(input: &WorkoutItemInput) -> AppResult<()> {
        validation::validate_item_name(&input.name).map_err(AppError::Validation)?;
        validation::validate_calories_per_unit(input.calories_per_unit)
            .map_err(AppError::Validation)?;
        Ok(())
    }

    // =========================================================================
    // Activities
    // =========================================================================

    /// Create an activity definition with a fresh id and timestamps
    pub fn add_activity(db: &mut Database, input: ActivityItemInput) -> AppResult<ActivityItem> {
        validation::validate_item_name(&input.name).map_err(AppError::Validation)?;
        let now = Utc::now();
        let item = ActivityItem {
            id: Uuid::new_v4(),
            name: input.name,
            activity_type: input.activity_type,
            created_at: now,
            updated_at: now,
        };
        ActivityInventoryRepository::put(db, item.clone());
        Ok(item)
    }

    /// Rewrite an activity definition, keeping createdAt and refreshing updatedAt
    pub fn update_activity(
        db: &mut Database,
        id: Uuid,
        input: ActivityItemInput,
    ) -> AppResult<ActivityItem> {
        validation::validate_item_name(&input.name).map_err(AppError::Validation)?;
        let existing = ActivityInventoryRepository::get(db, id)
            .ok_or_else(|| AppError::NotFound(format!("Activity item {} not found", id)))?;
        let item = ActivityItem {
            id,
            name: input.name,
            activity_type: input.activity_type,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        ActivityInventoryRepository::put(db, item.clone());
        Ok(item)
    }

    /// Remove an activity definition
    pub fn delete_activity(db: &mut Database, id: Uuid) -> AppResult<()> {
        if !ActivityInventoryRepository::delete(db, id) {
            return Err(AppError::NotFound(format!("Activity item {} not found", id)));
        }
        Ok(())
    }

    /// All activity definitions
    pub fn list_activities(db: &Database) -> Vec<ActivityItem> {
        ActivityInventoryRepository::all(db)
    }
}
