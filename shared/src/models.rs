//! Data models for the Wellbeing Tracker
//!
//! Records serialize to the camelCase JSON document shapes used by the
//! backup and snapshot formats, so exported files stay readable by older
//! copies of the app. Collections absent from a document deserialize as
//! empty, and numeric nutrition fields default to zero.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub use crate::units::{ClockTime, WorkoutUnit};

// ============================================================================
// Inventory
// ============================================================================

/// Reusable food definition with per-serving nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub kilojoules: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugars: f64,
    #[serde(default)]
    pub added_sugars: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub saturated_fat: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reusable workout definition burning calories per unit performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutItem {
    pub id: Uuid,
    pub name: String,
    pub calories_per_unit: f64,
    pub unit: WorkoutUnit,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kind of a trackable activity definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Meditation,
    ScreenTime,
}

/// Reusable activity definition (meditation, screen time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Logged Entries
// ============================================================================

/// Food logged against a day, referencing the inventory by id
///
/// The reference is weak: deleting the inventory item leaves the entry
/// in place, contributing zero to totals and displaying as "Unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFood {
    pub id: Uuid,
    pub inventory_id: Uuid,
    pub quantity: f64,
}

/// Workout logged against a day, referencing the inventory by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedWorkout {
    pub id: Uuid,
    pub inventory_id: Uuid,
    pub quantity: f64,
}

/// Subjective sleep quality rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// One sleep session bounded by wall-clock times, possibly past midnight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSession {
    pub id: Uuid,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<SleepQuality>,
}

/// Discomfort level for a bowel movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscomfortLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

/// Bowel movement record, consistency on the Bristol 1-7 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowelMovement {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discomfort: Option<DiscomfortLevel>,
}

// ============================================================================
// Custom Metrics
// ============================================================================

/// Value kind a custom metric records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    #[default]
    Number,
    Boolean,
}

/// User-defined metric definition, stored in per-profile settings
///
/// Built-in metrics use fixed string ids ("caffeine", "salt", ...);
/// user-created ones get freshly minted UUID strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMetric {
    pub id: String,
    pub name: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(rename = "type")]
    pub kind: MetricKind,
}

/// Recorded value of a custom metric for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Boolean(bool),
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Boolean(_) => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            MetricValue::Number(_) => None,
            MetricValue::Boolean(b) => Some(*b),
        }
    }
}

// ============================================================================
// Daily Log
// ============================================================================

/// Optional physiological measurements for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PhysiologicalMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_sugar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<f64>,
}

/// Subjective wellbeing ratings (1-10 scales) and free-text notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WellbeingMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Everything logged for one profile on one calendar day
///
/// Keyed by (profileId, date). Created lazily on first write; readers
/// fall back to [`DailyLog::empty`] without touching storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    // Older documents predate profiles; absent ids deserialize as nil
    // and are re-keyed on import.
    #[serde(default)]
    pub profile_id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub food_items: Vec<LoggedFood>,
    #[serde(default)]
    pub workout_items: Vec<LoggedWorkout>,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub sleep_sessions: Vec<SleepSession>,
    #[serde(default)]
    pub water_ml: u32,
    #[serde(default)]
    pub caffeine_mg: u32,
    #[serde(default)]
    pub work_mins: u32,
    #[serde(default)]
    pub screen_mins: u32,
    #[serde(default)]
    pub meditation_mins: u32,
    #[serde(default)]
    pub custom_metrics: BTreeMap<String, MetricValue>,
    #[serde(default)]
    pub physiological: PhysiologicalMetrics,
    #[serde(default)]
    pub wellbeing: WellbeingMetrics,
    #[serde(default)]
    pub bowel_movements: Vec<BowelMovement>,
}

impl DailyLog {
    /// An empty log for the given day, nothing recorded yet
    pub fn empty(profile_id: Uuid, date: NaiveDate) -> Self {
        Self {
            profile_id,
            date,
            food_items: Vec::new(),
            workout_items: Vec::new(),
            steps: 0,
            sleep_sessions: Vec::new(),
            water_ml: 0,
            caffeine_mg: 0,
            work_mins: 0,
            screen_mins: 0,
            meditation_mins: 0,
            custom_metrics: BTreeMap::new(),
            physiological: PhysiologicalMetrics::default(),
            wellbeing: WellbeingMetrics::default(),
            bowel_movements: Vec::new(),
        }
    }
}

// ============================================================================
// Settings and Profiles
// ============================================================================

/// Per-profile daily targets, used as denominators for progress ratios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTargets {
    pub calories: f64,
    pub kilojoules: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub sugars: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub water_ml: u32,
    pub steps: u32,
    pub sleep_hours: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            kilojoules: 8400.0,
            protein: 150.0,
            carbs: 250.0,
            fiber: 30.0,
            sugars: 30.0,
            fat: 65.0,
            saturated_fat: 20.0,
            water_ml: 2500,
            steps: 10000,
            sleep_hours: 8.0,
        }
    }
}

/// The built-in custom metrics new profiles start with
pub fn default_custom_metrics() -> Vec<CustomMetric> {
    let mg = |id: &str, name: &str, target: f64| CustomMetric {
        id: id.to_string(),
        name: name.to_string(),
        unit: "mg".to_string(),
        target: Some(target),
        kind: MetricKind::Number,
    };
    vec![
        mg("caffeine", "Caffeine", 400.0),
        mg("salt", "Salt", 2300.0),
        mg("cholesterol", "Cholesterol", 300.0),
        mg("sodium", "Sodium", 2300.0),
        mg("potassium", "Potassium", 3500.0),
    ]
}

/// Per-profile settings: daily targets plus custom metric definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    // Settings documents are keyed by the owning profile's id.
    #[serde(rename = "id")]
    pub profile_id: Uuid,
    pub daily_targets: DailyTargets,
    #[serde(default)]
    pub custom_metrics: Vec<CustomMetric>,
}

impl UserSettings {
    /// Fresh settings for a profile: default targets + built-in metrics
    pub fn default_for(profile_id: Uuid) -> Self {
        Self {
            profile_id,
            daily_targets: DailyTargets::default(),
            custom_metrics: default_custom_metrics(),
        }
    }
}

/// A named user context; at most one profile is active at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}
