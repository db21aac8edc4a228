//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the aggregate layer.

pub mod backup;
pub mod daily_log;
pub mod inventory;
pub mod profile;
pub mod settings;
pub mod summary;

pub use backup::{BackupService, ImportMode, ImportSummary};
pub use daily_log::DailyLogService;
pub use inventory::InventoryService;
pub use profile::ProfileService;
pub use settings::SettingsService;
pub use summary::SummaryService;
