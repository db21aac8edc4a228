//! Daily aggregate calculations
//!
//! Derives nutrition totals, calories burned, sleep duration, and progress
//! ratios from a day's logged entries and the reference inventory. The
//! daily summary, the trend series, and the log page all consume these
//! same functions, so a number shown in one place always matches the others.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No storage access, no clocks, no side effects
//! 2. **Tolerant Inputs**: Dangling inventory references and missing data
//!    contribute zero instead of failing
//! 3. **Order Independence**: Totals are plain summations, invariant under
//!    reordering of logged entries

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::{
    ActivityItem, FoodItem, LoggedFood, LoggedWorkout, MetricValue, SleepSession, WorkoutItem,
};

/// Calories credited per step walked (fixed heuristic, not configurable)
pub const KCAL_PER_STEP: f64 = 0.05;

/// Display name for logged entries whose inventory reference is gone
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";

// ============================================================================
// Nutrition Totals
// ============================================================================

/// Summed nutrition for one day's logged food
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    pub calories: f64,
    pub kilojoules: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub sugars: f64,
    pub added_sugars: f64,
    pub fat: f64,
    pub saturated_fat: f64,
}

impl NutritionTotals {
    fn accumulate(&mut self, food: &FoodItem, quantity: f64) {
        self.calories += food.calories * quantity;
        self.kilojoules += food.kilojoules * quantity;
        self.protein += food.protein * quantity;
        self.carbs += food.carbs * quantity;
        self.fiber += food.fiber * quantity;
        self.sugars += food.sugars * quantity;
        self.added_sugars += food.added_sugars * quantity;
        self.fat += food.fat * quantity;
        self.saturated_fat += food.saturated_fat * quantity;
    }
}

/// Sum `quantity x per-serving field` over a day's logged food
///
/// Entries whose `inventory_id` no longer resolves are skipped; an empty
/// log or inventory yields all-zero totals.
pub fn nutrition_totals(entries: &[LoggedFood], inventory: &[FoodItem]) -> NutritionTotals {
    let mut totals = NutritionTotals::default();
    for entry in entries {
        if let Some(food) = inventory.iter().find(|f| f.id == entry.inventory_id) {
            totals.accumulate(food, entry.quantity);
        }
    }
    totals
}

// ============================================================================
// Calories Burned
// ============================================================================

/// Sum `quantity x calories_per_unit` over logged workouts
///
/// Same dangling-reference tolerance as [`nutrition_totals`].
pub fn workout_calories(entries: &[LoggedWorkout], inventory: &[WorkoutItem]) -> f64 {
    entries
        .iter()
        .filter_map(|entry| {
            inventory
                .iter()
                .find(|w| w.id == entry.inventory_id)
                .map(|workout| workout.calories_per_unit * entry.quantity)
        })
        .sum()
}

/// Estimate calories burned by walking, rounded to a whole number
pub fn steps_calories(steps: u32) -> f64 {
    (steps as f64 * KCAL_PER_STEP).round()
}

/// Total calories burned for a day: logged workouts plus the step estimate
pub fn calories_burned(entries: &[LoggedWorkout], inventory: &[WorkoutItem], steps: u32) -> f64 {
    workout_calories(entries, inventory) + steps_calories(steps)
}

/// Net energy balance for a day
pub fn net_calories(consumed: f64, burned: f64) -> f64 {
    consumed - burned
}

// ============================================================================
// Sleep Duration
// ============================================================================

/// Duration of one session in hours, unrounded
///
/// Wraps past midnight: `((end_hour + 24 - start_hour) mod 24)` plus the
/// minute difference. Only correct for sessions under 24h; a session with
/// equal start and end yields 0, never 24.
pub fn session_duration_hours(session: &SleepSession) -> f64 {
    let start = session.start_time;
    let end = session.end_time;
    let hours = (end.hour as i32 + 24 - start.hour as i32) % 24;
    hours as f64 + (end.minute as i32 - start.minute as i32) as f64 / 60.0
}

/// Duration of one session rounded to one decimal, as displayed per row
pub fn session_hours(session: &SleepSession) -> f64 {
    round_tenths(session_duration_hours(session))
}

/// Total sleep for a day: per-session durations summed, rounded to one decimal
pub fn sleep_hours(sessions: &[SleepSession]) -> f64 {
    round_tenths(sessions.iter().map(session_duration_hours).sum())
}

fn round_tenths(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

// ============================================================================
// Progress Ratios
// ============================================================================

/// Progress toward a target as a percentage, unbounded above
///
/// Returns `None` when the target is zero, negative, or not finite: no
/// progress is tracked against such a target, and infinities never leak
/// into display code. Trend charts use the raw value; rings clamp it with
/// [`clamped_progress`].
pub fn progress_percent(value: f64, target: f64) -> Option<f64> {
    if target.is_finite() && target > 0.0 {
        Some(value / target * 100.0)
    } else {
        None
    }
}

/// Cap a progress percentage at 100 for ring/bar visuals
pub fn clamped_progress(percent: f64) -> f64 {
    percent.min(100.0)
}

// ============================================================================
// Custom Metrics
// ============================================================================

/// Functional update of a day's custom-metric map
///
/// Returns a new map equal to `metrics` with `metric_id` set to `value`.
/// All other keys are untouched; keys are never deleted implicitly.
pub fn merge_custom_metric(
    metrics: &BTreeMap<String, MetricValue>,
    metric_id: &str,
    value: MetricValue,
) -> BTreeMap<String, MetricValue> {
    let mut merged = metrics.clone();
    merged.insert(metric_id.to_string(), value);
    merged
}

// ============================================================================
// Display Names
// ============================================================================

/// Inventory records that logged entries reference by id
pub trait InventoryLookup {
    fn lookup_id(&self) -> Uuid;
    fn lookup_name(&self) -> &str;
}

impl InventoryLookup for FoodItem {
    fn lookup_id(&self) -> Uuid {
        self.id
    }
    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl InventoryLookup for WorkoutItem {
    fn lookup_id(&self) -> Uuid {
        self.id
    }
    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl InventoryLookup for ActivityItem {
    fn lookup_id(&self) -> Uuid {
        self.id
    }
    fn lookup_name(&self) -> &str {
        &self.name
    }
}

/// Resolve an inventory reference to its display name
///
/// Dangling references resolve to [`UNKNOWN_ITEM_NAME`] rather than an error.
pub fn resolve_display_name<T: InventoryLookup>(id: Uuid, inventory: &[T]) -> &str {
    inventory
        .iter()
        .find(|item| item.lookup_id() == id)
        .map(|item| item.lookup_name())
        .unwrap_or(UNKNOWN_ITEM_NAME)
}
