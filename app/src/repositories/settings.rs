//! User settings repository
//!
//! One settings record per profile, keyed by the profile id.

use uuid::Uuid;

use wellbeing_tracker_shared::models::UserSettings;

use crate::store::{Database, StoreCollection};

/// User settings repository
pub struct SettingsRepository;

impl SettingsRepository {
    /// Look up the settings of one profile
    pub fn get(db: &Database, profile_id: Uuid) -> Option<UserSettings> {
        db.user_settings.get(&profile_id).cloned()
    }

    /// Insert or replace the settings under their own profile id
    pub fn put(db: &mut Database, settings: UserSettings) {
        db.user_settings.put(settings.profile_id, settings);
        db.notify(StoreCollection::UserSettings);
    }

    /// Remove the settings of one profile
    pub fn delete(db: &mut Database, profile_id: Uuid) -> bool {
        let removed = db.user_settings.delete(&profile_id);
        if removed {
            db.notify(StoreCollection::UserSettings);
        }
        removed
    }

    /// Every settings record
    pub fn all(db: &Database) -> Vec<UserSettings> {
        db.user_settings.all()
    }
}
