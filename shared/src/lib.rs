//! Wellbeing Tracker Shared Library
//!
//! This crate contains the data model, the aggregate calculations, and the
//! validation helpers used by the application crate. Everything here is pure:
//! no storage, no clocks, no I/O.

pub mod aggregate;
pub mod models;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use aggregate::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;

// Export models (excluding unit types which are re-exported from units)
pub use models::{
    ActivityItem, ActivityType, BowelMovement, CustomMetric, DailyLog, DailyTargets,
    DiscomfortLevel, FoodItem, LoggedFood, LoggedWorkout, MetricKind, MetricValue,
    PhysiologicalMetrics, Profile, SleepQuality, SleepSession, UserSettings, WellbeingMetrics,
};
