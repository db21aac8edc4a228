//! Profile service
//!
//! Named user contexts. At most one profile is active at a time; switching
//! deactivates the current one before activating the target. Deleting a
//! profile cascades into its daily logs and settings, and promotes another
//! profile only when the deleted one was active.

use chrono::Utc;
use uuid::Uuid;

use wellbeing_tracker_shared::models::Profile;
use wellbeing_tracker_shared::validation;

use crate::error::{AppError, AppResult};
use crate::repositories::{DailyLogRepository, ProfileRepository, SettingsRepository};
use crate::services::SettingsService;
use crate::store::Database;

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    /// Make sure an active profile exists, creating one on first run
    ///
    /// Returns the active profile. If profiles exist but none is active
    /// (possible after older imports), the first one is promoted.
    pub fn ensure_default(db: &mut Database, default_name: &str) -> AppResult<Profile> {
        if let Some(active) = ProfileRepository::active(db) {
            return Ok(active);
        }
        if let Some(first) = ProfileRepository::all(db).into_iter().next() {
            return Self::switch(db, first.id);
        }

        validation::validate_profile_name(default_name).map_err(AppError::Validation)?;
        let profile = Profile {
            id: Uuid::new_v4(),
            name: default_name.to_string(),
            created_at: Utc::now(),
            is_active: true,
        };
        ProfileRepository::put(db, profile.clone());
        SettingsService::ensure_initialized(db, profile.id);
        Ok(profile)
    }

    /// Create a new inactive profile with initialized settings
    pub fn create(db: &mut Database, name: &str) -> AppResult<Profile> {
        validation::validate_profile_name(name).map_err(AppError::Validation)?;
        let profile = Profile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
            is_active: false,
        };
        ProfileRepository::put(db, profile.clone());
        SettingsService::ensure_initialized(db, profile.id);
        Ok(profile)
    }

    /// Make the given profile the single active one
    pub fn switch(db: &mut Database, id: Uuid) -> AppResult<Profile> {
        let mut target = ProfileRepository::get(db, id)
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

        if let Some(mut current) = ProfileRepository::active(db) {
            if current.id != id {
                current.is_active = false;
                ProfileRepository::put(db, current);
            }
        }

        target.is_active = true;
        ProfileRepository::put(db, target.clone());
        Ok(target)
    }

    /// Delete a profile along with its daily logs and settings
    ///
    /// When the deleted profile was the active one, the first remaining
    /// profile (if any) is activated so the app never ends up headless.
    pub fn delete(db: &mut Database, id: Uuid) -> AppResult<()> {
        if !ProfileRepository::delete(db, id) {
            return Err(AppError::NotFound(format!("Profile {} not found", id)));
        }
        DailyLogRepository::delete_for_profile(db, id);
        SettingsRepository::delete(db, id);

        if ProfileRepository::active(db).is_none() {
            if let Some(first) = ProfileRepository::all(db).into_iter().next() {
                Self::switch(db, first.id)?;
            }
        }
        Ok(())
    }

    /// The currently active profile, if any
    pub fn active(db: &Database) -> Option<Profile> {
        ProfileRepository::active(db)
    }

    /// All profiles
    pub fn list(db: &Database) -> Vec<Profile> {
        ProfileRepository::all(db)
    }
}
