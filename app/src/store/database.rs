//! Application database: six keyed collections plus change notification
//!
//! All state lives in memory; durability comes from the snapshot module.
//! Exactly one writer exists at a time (`&mut Database`), so there are no
//! locks. Subscribers get a synchronous event per mutation naming the
//! collection that changed, and recompute whatever they derive from it.

use std::sync::mpsc::{channel, Receiver, Sender};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use wellbeing_tracker_shared::models::{
    ActivityItem, DailyLog, FoodItem, Profile, UserSettings, WorkoutItem,
};

use super::collection::KeyedCollection;

/// Collections a change event can originate from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCollection {
    FoodInventory,
    WorkoutInventory,
    ActivityInventory,
    DailyLogs,
    UserSettings,
    Profiles,
}

/// Notification that a collection changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub collection: StoreCollection,
}

/// Composite key of a daily log: one log per profile per calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogKey {
    pub profile_id: Uuid,
    pub date: NaiveDate,
}

impl LogKey {
    pub fn new(profile_id: Uuid, date: NaiveDate) -> Self {
        Self { profile_id, date }
    }
}

/// Record counts per collection, as reported by the `stats` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCounts {
    pub food_items: usize,
    pub workout_items: usize,
    pub activity_items: usize,
    pub daily_logs: usize,
    pub user_settings: usize,
    pub profiles: usize,
}

/// The whole application state held in memory
#[derive(Debug, Default)]
pub struct Database {
    pub(crate) food_inventory: KeyedCollection<Uuid, FoodItem>,
    pub(crate) workout_inventory: KeyedCollection<Uuid, WorkoutItem>,
    pub(crate) activity_inventory: KeyedCollection<Uuid, ActivityItem>,
    pub(crate) daily_logs: KeyedCollection<LogKey, DailyLog>,
    pub(crate) user_settings: KeyedCollection<Uuid, UserSettings>,
    pub(crate) profiles: KeyedCollection<Uuid, Profile>,
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; every subsequent mutation sends it an event
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Broadcast a change, dropping subscribers whose receiver is gone
    pub(crate) fn notify(&mut self, collection: StoreCollection) {
        let event = ChangeEvent { collection };
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    /// Record counts across all collections
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            food_items: self.food_inventory.count(),
            workout_items: self.workout_inventory.count(),
            activity_items: self.activity_inventory.count(),
            daily_logs: self.daily_logs.count(),
            user_settings: self.user_settings.count(),
            profiles: self.profiles.count(),
        }
    }
}
