//! Daily log repository
//!
//! Logs are keyed by (profile, date); there is at most one per pair.

use chrono::NaiveDate;
use uuid::Uuid;

use wellbeing_tracker_shared::models::DailyLog;

use crate::store::{Database, LogKey, StoreCollection};

/// Daily log repository
pub struct DailyLogRepository;

impl DailyLogRepository {
    /// Look up the log for one profile and date
    pub fn get(db: &Database, profile_id: Uuid, date: NaiveDate) -> Option<DailyLog> {
        db.daily_logs.get(&LogKey::new(profile_id, date)).cloned()
    }

    /// Whether a log exists for the pair
    pub fn exists(db: &Database, profile_id: Uuid, date: NaiveDate) -> bool {
        db.daily_logs.contains(&LogKey::new(profile_id, date))
    }

    /// Insert or replace a log under its own (profile, date) key
    pub fn put(db: &mut Database, log: DailyLog) {
        db.daily_logs.put(LogKey::new(log.profile_id, log.date), log);
        db.notify(StoreCollection::DailyLogs);
    }

    /// Remove the log for one profile and date
    pub fn delete(db: &mut Database, profile_id: Uuid, date: NaiveDate) -> bool {
        let removed = db.daily_logs.delete(&LogKey::new(profile_id, date));
        if removed {
            db.notify(StoreCollection::DailyLogs);
        }
        removed
    }

    /// All logs of one profile in ascending date order
    pub fn for_profile(db: &Database, profile_id: Uuid) -> Vec<DailyLog> {
        db.daily_logs
            .iter()
            .filter(|(key, _)| key.profile_id == profile_id)
            .map(|(_, log)| log.clone())
            .collect()
    }

    /// Remove every log of one profile, returning how many went away
    pub fn delete_for_profile(db: &mut Database, profile_id: Uuid) -> usize {
        let keys: Vec<LogKey> = db
            .daily_logs
            .iter()
            .filter(|(key, _)| key.profile_id == profile_id)
            .map(|(key, _)| *key)
            .collect();
        for key in &keys {
            db.daily_logs.delete(key);
        }
        if !keys.is_empty() {
            db.notify(StoreCollection::DailyLogs);
        }
        keys.len()
    }

    /// Every log across all profiles
    pub fn all(db: &Database) -> Vec<DailyLog> {
        db.daily_logs.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_one_log_per_profile_and_date() {
        let mut db = Database::new();
        let profile = Uuid::new_v4();

        let mut log = DailyLog::empty(profile, date("2025-06-01"));
        log.steps = 4000;
        DailyLogRepository::put(&mut db, log);

        let mut replacement = DailyLog::empty(profile, date("2025-06-01"));
        replacement.steps = 9000;
        DailyLogRepository::put(&mut db, replacement);

        assert_eq!(db.counts().daily_logs, 1);
        assert_eq!(
            DailyLogRepository::get(&db, profile, date("2025-06-01")).map(|l| l.steps),
            Some(9000)
        );
    }

    #[test]
    fn test_for_profile_filters_and_orders() {
        let mut db = Database::new();
        let mine = Uuid::new_v4();
        let other = Uuid::new_v4();

        DailyLogRepository::put(&mut db, DailyLog::empty(mine, date("2025-06-03")));
        DailyLogRepository::put(&mut db, DailyLog::empty(mine, date("2025-06-01")));
        DailyLogRepository::put(&mut db, DailyLog::empty(other, date("2025-06-02")));

        let logs = DailyLogRepository::for_profile(&db, mine);
        let dates: Vec<NaiveDate> = logs.iter().map(|l| l.date).collect();
        assert_eq!(dates, vec![date("2025-06-01"), date("2025-06-03")]);
    }

    #[test]
    fn test_delete_for_profile_leaves_others() {
        let mut db = Database::new();
        let mine = Uuid::new_v4();
        let other = Uuid::new_v4();

        DailyLogRepository::put(&mut db, DailyLog::empty(mine, date("2025-06-01")));
        DailyLogRepository::put(&mut db, DailyLog::empty(mine, date("2025-06-02")));
        DailyLogRepository::put(&mut db, DailyLog::empty(other, date("2025-06-01")));

        assert_eq!(DailyLogRepository::delete_for_profile(&mut db, mine), 2);
        assert_eq!(db.counts().daily_logs, 1);
        assert!(DailyLogRepository::exists(&db, other, date("2025-06-01")));
    }
}
