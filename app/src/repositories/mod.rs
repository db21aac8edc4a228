//! Store repositories
//!
//! Provides the data access layer over the in-memory collections.

pub mod daily_log;
pub mod inventory;
pub mod profile;
pub mod settings;

pub use daily_log::DailyLogRepository;
pub use inventory::{
    ActivityInventoryRepository, FoodInventoryRepository, WorkoutInventoryRepository,
};
pub use profile::ProfileRepository;
pub use settings::SettingsRepository;
