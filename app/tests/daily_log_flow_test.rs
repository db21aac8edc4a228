//! Integration tests for a day of logging and its aggregates

mod common;

use common::{log_date, Fixture};
use wellbeing_tracker_app::repositories::DailyLogRepository;
use wellbeing_tracker_app::services::{DailyLogService, InventoryService, SummaryService};
use wellbeing_tracker_shared::aggregate::{resolve_display_name, UNKNOWN_ITEM_NAME};
use wellbeing_tracker_shared::types::PhysioField;

#[test]
fn test_reads_never_create_logs() {
    let fixture = Fixture::new();

    let log = DailyLogService::get_or_default(&fixture.db, fixture.profile.id, log_date());
    let summary = SummaryService::daily_summary(&fixture.db, fixture.profile.id, log_date());
    let trend = SummaryService::trend(&fixture.db, fixture.profile.id, log_date(), 7);

    assert!(log.food_items.is_empty());
    assert_eq!(summary.nutrition.calories, 0.0);
    assert_eq!(trend.len(), 7);
    assert_eq!(fixture.db.counts().daily_logs, 0);
}

#[test]
fn test_first_write_creates_the_log() {
    let mut fixture = Fixture::new();

    DailyLogService::ensure_exists(&mut fixture.db, fixture.profile.id, log_date());
    DailyLogService::ensure_exists(&mut fixture.db, fixture.profile.id, log_date());

    assert_eq!(fixture.db.counts().daily_logs, 1);
}

#[test]
fn test_a_full_day_aggregates_correctly() {
    let mut fixture = Fixture::new();
    fixture.log_sample_day();

    let summary = SummaryService::daily_summary(&fixture.db, fixture.profile.id, log_date());

    // Two servings of oats
    assert_eq!(summary.nutrition.calories, 778.0);
    assert_eq!(summary.nutrition.protein, 33.8);
    assert_eq!(summary.nutrition.fiber, 21.2);
    // 30 min run at 10 kcal/min plus 6000 steps at 0.05 kcal
    assert_eq!(summary.calories_burned, 600.0);
    assert_eq!(summary.net_calories, 178.0);
    assert_eq!(summary.sleep_hours, 8.0);
    assert_eq!(summary.steps, 6000);
    assert_eq!(summary.water_ml, 750);

    // Progress against the default targets
    let progress = summary.progress;
    assert!((progress.calories.unwrap() - 38.9).abs() < 1e-9);
    assert!((progress.steps.unwrap() - 60.0).abs() < 1e-9);
    assert!((progress.water.unwrap() - 30.0).abs() < 1e-9);
    assert!((progress.sleep.unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn test_deleting_an_inventory_item_zeroes_its_contribution() {
    let mut fixture = Fixture::new();
    fixture.log_sample_day();

    InventoryService::delete_food(&mut fixture.db, fixture.oats.id).unwrap();

    let summary = SummaryService::daily_summary(&fixture.db, fixture.profile.id, log_date());
    // The entry still exists but no longer resolves
    let log = DailyLogService::get_or_default(&fixture.db, fixture.profile.id, log_date());
    assert_eq!(log.food_items.len(), 1);
    assert_eq!(summary.nutrition.calories, 0.0);
    let foods = InventoryService::list_food(&fixture.db);
    assert_eq!(
        resolve_display_name(log.food_items[0].inventory_id, &foods),
        UNKNOWN_ITEM_NAME
    );
    // Workouts are untouched
    assert_eq!(summary.calories_burned, 600.0);
}

#[test]
fn test_entry_removal_leaves_the_rest_of_the_day() {
    let mut fixture = Fixture::new();
    fixture.log_sample_day();
    let profile = fixture.profile.id;

    let log = DailyLogService::get_or_default(&fixture.db, profile, log_date());
    let entry_id = log.food_items[0].id;
    DailyLogService::remove_food_entry(&mut fixture.db, profile, log_date(), entry_id).unwrap();

    let summary = SummaryService::daily_summary(&fixture.db, profile, log_date());
    assert_eq!(summary.nutrition.calories, 0.0);
    assert_eq!(summary.calories_burned, 600.0);
    assert_eq!(summary.sleep_hours, 8.0);
    assert_eq!(summary.water_ml, 750);
}

#[test]
fn test_physiological_readings_roundtrip_through_the_store() {
    let mut fixture = Fixture::new();
    let profile = fixture.profile.id;

    DailyLogService::set_physiological(
        &mut fixture.db,
        profile,
        log_date(),
        PhysioField::Weight(Some(81.4)),
    )
    .unwrap();
    DailyLogService::set_physiological(
        &mut fixture.db,
        profile,
        log_date(),
        PhysioField::HeartRate(Some(58.0)),
    )
    .unwrap();

    let stored = DailyLogRepository::get(&fixture.db, profile, log_date()).unwrap();
    assert_eq!(stored.physiological.weight, Some(81.4));
    assert_eq!(stored.physiological.heart_rate, Some(58.0));
}
