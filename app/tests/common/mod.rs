//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests.

use chrono::NaiveDate;

use wellbeing_tracker_app::services::{DailyLogService, InventoryService, ProfileService};
use wellbeing_tracker_app::store::Database;
use wellbeing_tracker_shared::models::{FoodItem, Profile, SleepQuality, WorkoutItem, WorkoutUnit};
use wellbeing_tracker_shared::types::{
    FoodItemInput, ScalarField, WellbeingField, WorkoutItemInput,
};

/// The calendar day sample data is logged against
pub fn log_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// A store with an active profile and a small inventory
pub struct Fixture {
    pub db: Database,
    pub profile: Profile,
    pub oats: FoodItem,
    pub run: WorkoutItem,
}

impl Fixture {
    pub fn new() -> Self {
        let mut db = Database::new();
        let profile = ProfileService::ensure_default(&mut db, "Default").unwrap();
        let oats = InventoryService::add_food(
            &mut db,
            FoodItemInput {
                name: "Oats".to_string(),
                calories: 389.0,
                kilojoules: 1628.0,
                protein: 16.9,
                carbs: 66.3,
                fiber: 10.6,
                sugars: 0.99,
                added_sugars: 0.0,
                fat: 6.9,
                saturated_fat: 1.2,
            },
        )
        .unwrap();
        let run = InventoryService::add_workout(
            &mut db,
            WorkoutItemInput {
                name: "Running".to_string(),
                calories_per_unit: 10.0,
                unit: WorkoutUnit::Minutes,
            },
        )
        .unwrap();

        Self {
            db,
            profile,
            oats,
            run,
        }
    }

    /// Log a full day against the active profile: two servings of oats,
    /// a 30 minute run, steps, water, one night of sleep and a mood.
    pub fn log_sample_day(&mut self) {
        let profile = self.profile.id;
        let date = log_date();
        DailyLogService::add_food_entry(&mut self.db, profile, date, self.oats.id, 2.0).unwrap();
        DailyLogService::add_workout_entry(&mut self.db, profile, date, self.run.id, 30.0)
            .unwrap();
        DailyLogService::set_scalar(&mut self.db, profile, date, ScalarField::Steps(6000))
            .unwrap();
        DailyLogService::add_water(&mut self.db, profile, date, 750).unwrap();
        DailyLogService::add_sleep_session(
            &mut self.db,
            profile,
            date,
            "23:00",
            "07:00",
            Some(SleepQuality::Good),
        )
        .unwrap();
        DailyLogService::set_wellbeing(
            &mut self.db,
            profile,
            date,
            WellbeingField::Mood(Some(7)),
        )
        .unwrap();
    }
}
