//! Service input and summary types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::NutritionTotals;
use crate::models::{ActivityType, DailyLog, MetricKind, WorkoutUnit};

// ============================================================================
// Inventory Inputs
// ============================================================================

/// New or updated food definition (ids and timestamps are minted by the service)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemInput {
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
}

/// New or updated workout definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutItemInput {
    pub name: String,
    pub calories_per_unit: f64,
    #[serde(default)]
    pub unit: WorkoutUnit,
}

/// New or updated activity definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItemInput {
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

/// New or updated custom metric definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMetricInput {
    pub name: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(rename = "type", default)]
    pub kind: MetricKind,
}

// ============================================================================
// Tagged Field Setters
// ============================================================================

/// One settable counter field of a daily log
///
/// Replaces stringly-keyed field updates: the field name and the value type
/// travel together, so a typo is a compile error rather than a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Steps(u32),
    WaterMl(u32),
    CaffeineMg(u32),
    WorkMins(u32),
    ScreenMins(u32),
    MeditationMins(u32),
}

impl ScalarField {
    /// Write the carried value into its slot on the log
    pub fn apply(self, log: &mut DailyLog) {
        match self {
            ScalarField::Steps(v) => log.steps = v,
            ScalarField::WaterMl(v) => log.water_ml = v,
            ScalarField::CaffeineMg(v) => log.caffeine_mg = v,
            ScalarField::WorkMins(v) => log.work_mins = v,
            ScalarField::ScreenMins(v) => log.screen_mins = v,
            ScalarField::MeditationMins(v) => log.meditation_mins = v,
        }
    }

    /// Document key of the targeted field, for log output
    pub fn label(self) -> &'static str {
        match self {
            ScalarField::Steps(_) => "steps",
            ScalarField::WaterMl(_) => "waterMl",
            ScalarField::CaffeineMg(_) => "caffeineMg",
            ScalarField::WorkMins(_) => "workMins",
            ScalarField::ScreenMins(_) => "screenMins",
            ScalarField::MeditationMins(_) => "meditationMins",
        }
    }
}

/// One settable physiological measurement; `None` clears it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysioField {
    HeartRate(Option<f64>),
    Weight(Option<f64>),
    WaistCm(Option<f64>),
    BodyTemp(Option<f64>),
    BloodPressureSystolic(Option<f64>),
    BloodPressureDiastolic(Option<f64>),
    BloodSugar(Option<f64>),
    OxygenSaturation(Option<f64>),
}

impl PhysioField {
    pub fn apply(self, log: &mut DailyLog) {
        let p = &mut log.physiological;
        match self {
            PhysioField::HeartRate(v) => p.heart_rate = v,
            PhysioField::Weight(v) => p.weight = v,
            PhysioField::WaistCm(v) => p.waist_cm = v,
            PhysioField::BodyTemp(v) => p.body_temp = v,
            PhysioField::BloodPressureSystolic(v) => p.blood_pressure_systolic = v,
            PhysioField::BloodPressureDiastolic(v) => p.blood_pressure_diastolic = v,
            PhysioField::BloodSugar(v) => p.blood_sugar = v,
            PhysioField::OxygenSaturation(v) => p.oxygen_saturation = v,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhysioField::HeartRate(_) => "heartRate",
            PhysioField::Weight(_) => "weight",
            PhysioField::WaistCm(_) => "waistCm",
            PhysioField::BodyTemp(_) => "bodyTemp",
            PhysioField::BloodPressureSystolic(_) => "bloodPressureSystolic",
            PhysioField::BloodPressureDiastolic(_) => "bloodPressureDiastolic",
            PhysioField::BloodSugar(_) => "bloodSugar",
            PhysioField::OxygenSaturation(_) => "oxygenSaturation",
        }
    }

    /// The carried measurement, if the setter is not a clear
    pub fn value(self) -> Option<f64> {
        match self {
            PhysioField::HeartRate(v)
            | PhysioField::Weight(v)
            | PhysioField::WaistCm(v)
            | PhysioField::BodyTemp(v)
            | PhysioField::BloodPressureSystolic(v)
            | PhysioField::BloodPressureDiastolic(v)
            | PhysioField::BloodSugar(v)
            | PhysioField::OxygenSaturation(v) => v,
        }
    }
}

/// One settable subjective wellbeing field; `None` clears it
#[derive(Debug, Clone, PartialEq)]
pub enum WellbeingField {
    Mood(Option<u8>),
    Stress(Option<u8>),
    Energy(Option<u8>),
    Notes(Option<String>),
}

impl WellbeingField {
    pub fn apply(self, log: &mut DailyLog) {
        let w = &mut log.wellbeing;
        match self {
            WellbeingField::Mood(v) => w.mood = v,
            WellbeingField::Stress(v) => w.stress = v,
            WellbeingField::Energy(v) => w.energy = v,
            WellbeingField::Notes(v) => w.notes = v,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WellbeingField::Mood(_) => "mood",
            WellbeingField::Stress(_) => "stress",
            WellbeingField::Energy(_) => "energy",
            WellbeingField::Notes(_) => "notes",
        }
    }

    /// The carried 1-10 rating, when the variant holds one
    pub fn rating(&self) -> Option<u8> {
        match self {
            WellbeingField::Mood(v) | WellbeingField::Stress(v) | WellbeingField::Energy(v) => *v,
            WellbeingField::Notes(_) => None,
        }
    }
}

// ============================================================================
// Summary Types
// ============================================================================

/// Progress percentages against the profile's daily targets
///
/// `None` means the target is zero or negative and progress is not tracked.
/// Values are unbounded above; display code clamps them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<f64>,
}

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub nutrition: NutritionTotals,
    pub calories_burned: f64,
    pub net_calories: f64,
    pub sleep_hours: f64,
    pub steps: u32,
    pub water_ml: u32,
    pub progress: ProgressReport,
}

/// One day of the trend series
///
/// Calories are rounded to whole numbers and sleep to one decimal, matching
/// what gets charted and exported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub net_calories: f64,
    pub sleep_hours: f64,
    pub steps: u32,
    pub water_ml: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_scalar_field_apply() {
        let mut log = DailyLog::empty(Uuid::new_v4(), "2025-06-01".parse().unwrap());
        ScalarField::Steps(8000).apply(&mut log);
        ScalarField::WaterMl(1500).apply(&mut log);
        assert_eq!(log.steps, 8000);
        assert_eq!(log.water_ml, 1500);
        assert_eq!(log.caffeine_mg, 0);
        assert_eq!(ScalarField::Steps(0).label(), "steps");
    }

    #[test]
    fn test_physio_field_set_and_clear() {
        let mut log = DailyLog::empty(Uuid::new_v4(), "2025-06-01".parse().unwrap());
        PhysioField::Weight(Some(81.5)).apply(&mut log);
        assert_eq!(log.physiological.weight, Some(81.5));
        PhysioField::Weight(None).apply(&mut log);
        assert_eq!(log.physiological.weight, None);
        assert_eq!(PhysioField::BloodSugar(None).label(), "bloodSugar");
    }

    #[test]
    fn test_wellbeing_field_rating() {
        let mut log = DailyLog::empty(Uuid::new_v4(), "2025-06-01".parse().unwrap());
        WellbeingField::Mood(Some(7)).apply(&mut log);
        WellbeingField::Notes(Some("long day".to_string())).apply(&mut log);
        assert_eq!(log.wellbeing.mood, Some(7));
        assert_eq!(log.wellbeing.notes.as_deref(), Some("long day"));
        assert_eq!(WellbeingField::Stress(Some(4)).rating(), Some(4));
        assert_eq!(WellbeingField::Notes(None).rating(), None);
    }

    #[test]
    fn test_progress_report_skips_untracked() {
        let report = ProgressReport {
            calories: Some(75.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"calories":75.0}"#);
    }
}
