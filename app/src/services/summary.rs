//! Summary service
//!
//! Read-only views over stored logs: one day's aggregate with progress
//! against targets, and a multi-day trend series for charts and CSV export.
//! Days without a log contribute zeros, so a series is always dense.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use wellbeing_tracker_shared::aggregate::{
    calories_burned, net_calories, nutrition_totals, progress_percent, sleep_hours,
};
use wellbeing_tracker_shared::types::{DailySummary, ProgressReport, TrendPoint};

use crate::repositories::{FoodInventoryRepository, WorkoutInventoryRepository};
use crate::services::{DailyLogService, SettingsService};
use crate::store::Database;

/// Days in a trend series when the caller does not say otherwise
pub const TREND_DAYS_DEFAULT: u32 = 7;

/// Summary service for aggregate views
pub struct SummaryService;

impl SummaryService {
    /// One day's totals plus progress against the profile's targets
    pub fn daily_summary(db: &Database, profile_id: Uuid, date: NaiveDate) -> DailySummary {
        let log = DailyLogService::get_or_default(db, profile_id, date);
        let foods = FoodInventoryRepository::all(db);
        let workouts = WorkoutInventoryRepository::all(db);
        let targets = SettingsService::get(db, profile_id).daily_targets;

        let nutrition = nutrition_totals(&log.food_items, &foods);
        let burned = calories_burned(&log.workout_items, &workouts, log.steps);
        let slept = sleep_hours(&log.sleep_sessions);

        let progress = ProgressReport {
            calories: progress_percent(nutrition.calories, targets.calories),
            protein: progress_percent(nutrition.protein, targets.protein),
            water: progress_percent(log.water_ml as f64, targets.water_ml as f64),
            steps: progress_percent(log.steps as f64, targets.steps as f64),
            sleep: progress_percent(slept, targets.sleep_hours),
        };

        DailySummary {
            date,
            nutrition,
            calories_burned: burned,
            net_calories: net_calories(nutrition.calories, burned),
            sleep_hours: slept,
            steps: log.steps,
            water_ml: log.water_ml,
            progress,
        }
    }

    /// Chart-ready series for the `days` ending at `end_date`, oldest first
    ///
    /// Calories are rounded to whole numbers and sleep to one decimal so
    /// every rendering of the series shows the same figures.
    pub fn trend(
        db: &Database,
        profile_id: Uuid,
        end_date: NaiveDate,
        days: u32,
    ) -> Vec<TrendPoint> {
        let days = days.max(1);
        let foods = FoodInventoryRepository::all(db);
        let workouts = WorkoutInventoryRepository::all(db);

        (0..days)
            .rev()
            .map(|offset| {
                let date = end_date - Duration::days(offset as i64);
                let log = DailyLogService::get_or_default(db, profile_id, date);
                let consumed = nutrition_totals(&log.food_items, &foods).calories;
                let burned = calories_burned(&log.workout_items, &workouts, log.steps);
                TrendPoint {
                    date,
                    calories_consumed: consumed.round(),
                    calories_burned: burned.round(),
                    net_calories: net_calories(consumed, burned).round(),
                    sleep_hours: sleep_hours(&log.sleep_sessions),
                    steps: log.steps,
                    water_ml: log.water_ml,
                }
            })
            .collect()
    }
}
