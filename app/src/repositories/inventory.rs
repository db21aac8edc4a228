//! Inventory repositories for reusable definitions
//!
//! One repository per inventory collection. These are the only code paths
//! that touch the underlying collections, so every mutation emits exactly
//! one change event.

use uuid::Uuid;

use wellbeing_tracker_shared::models::{ActivityItem, FoodItem, WorkoutItem};

use crate::store::{Database, StoreCollection};

// ============================================================================
// Food Inventory
// ============================================================================

/// Food inventory repository
pub struct FoodInventoryRepository;

impl FoodInventoryRepository {
    /// Look up a food definition by id
    pub fn get(db: &Database, id: Uuid) -> Option<FoodItem> {
        db.food_inventory.get(&id).cloned()
    }

    /// Insert or replace a food definition
    pub fn put(db: &mut Database, item: FoodItem) {
        db.food_inventory.put(item.id, item);
        db.notify(StoreCollection::FoodInventory);
    }

    /// Remove a food definition; logged entries referencing it stay behind
    pub fn delete(db: &mut Database, id: Uuid) -> bool {
        let removed = db.food_inventory.delete(&id);
        if removed {
            db.notify(StoreCollection::FoodInventory);
        }
        removed
    }

    /// All food definitions in id order
    pub fn all(db: &Database) -> Vec<FoodItem> {
        db.food_inventory.all()
    }

    /// Remove every food definition
    pub fn clear(db: &mut Database) {
        db.food_inventory.clear();
        db.notify(StoreCollection::FoodInventory);
    }
}

// ============================================================================
// Workout Inventory
// ============================================================================

/// Workout inventory repository
pub struct WorkoutInventoryRepository;

impl WorkoutInventoryRepository {
    /// Look up a workout definition by id
    pub fn get(db: &Database, id: Uuid) -> Option<WorkoutItem> {
        db.workout_inventory.get(&id).cloned()
    }

    /// Insert or replace a workout definition
    pub fn put(db: &mut Database, item: WorkoutItem) {
        db.workout_inventory.put(item.id, item);
        db.notify(StoreCollection::WorkoutInventory);
    }

    /// Remove a workout definition; logged entries referencing it stay behind
    pub fn delete(db: &mut Database, id: Uuid) -> bool {
        let removed = db.workout_inventory.delete(&id);
        if removed {
            db.notify(StoreCollection::WorkoutInventory);
        }
        removed
    }

    /// All workout definitions in id order
    pub fn all(db: &Database) -> Vec<WorkoutItem> {
        db.workout_inventory.all()
    }

    /// Remove every workout definition
    pub fn clear(db: &mut Database) {
        db.workout_inventory.clear();
        db.notify(StoreCollection::WorkoutInventory);
    }
}

// ============================================================================
// Activity Inventory
// ============================================================================

/// Activity inventory repository
pub struct ActivityInventoryRepository;

impl ActivityInventoryRepository {
    /// Look up an activity definition by id
    pub fn get(db: &Database, id: Uuid) -> Option<ActivityItem> {
        db.activity_inventory.get(&id).cloned()
    }

    /// Insert or replace an activity definition
    pub fn put(db: &mut Database, item: ActivityItem) {
        db.activity_inventory.put(item.id, item);
        db.notify(StoreCollection::ActivityInventory);
    }

    /// Remove an activity definition
    pub fn delete(db: &mut Database, id: Uuid) -> bool {
        let removed = db.activity_inventory.delete(&id);
        if removed {
            db.notify(StoreCollection::ActivityInventory);
        }
        removed
    }

    /// All activity definitions in id order
    pub fn all(db: &Database) -> Vec<ActivityItem> {
        db.activity_inventory.all()
    }

    /// Remove every activity definition
    pub fn clear(db: &mut Database) {
        db.activity_inventory.clear();
        db.notify(StoreCollection::ActivityInventory);
    }
}
