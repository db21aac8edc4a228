//! Profile repository

use uuid::Uuid;

use wellbeing_tracker_shared::models::Profile;

use crate::store::{Database, StoreCollection};

/// Profile repository
pub struct ProfileRepository;

impl ProfileRepository {
    /// Look up a profile by id
    pub fn get(db: &Database, id: Uuid) -> Option<Profile> {
        db.profiles.get(&id).cloned()
    }

    /// Insert or replace a profile
    pub fn put(db: &mut Database, profile: Profile) {
        db.profiles.put(profile.id, profile);
        db.notify(StoreCollection::Profiles);
    }

    /// Remove a profile record (logs and settings are the services' concern)
    pub fn delete(db: &mut Database, id: Uuid) -> bool {
        let removed = db.profiles.delete(&id);
        if removed {
            db.notify(StoreCollection::Profiles);
        }
        removed
    }

    /// All profiles in id order
    pub fn all(db: &Database) -> Vec<Profile> {
        db.profiles.all()
    }

    /// The profile currently marked active, if any
    pub fn active(db: &Database) -> Option<Profile> {
        db.profiles
            .iter()
            .map(|(_, profile)| profile)
            .find(|profile| profile.is_active)
            .cloned()
    }

    /// Number of profiles
    pub fn count(db: &Database) -> usize {
        db.profiles.count()
    }
}
