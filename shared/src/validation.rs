//! Input validation functions
//!
//! This module provides validation utilities for user input before it is
//! written into inventories, daily logs, or settings. Validators return the
//! failure message as a plain `String`; callers wrap it in their own error
//! type.

/// Validate an inventory item name (food, workout, activity)
pub fn validate_item_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name too long (max 100 characters)".to_string());
    }
    Ok(())
}

/// Validate a per-serving nutrition value (calories, protein, ...)
pub fn validate_nutrient_value(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Nutrition value must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("Nutrition value cannot be negative".to_string());
    }
    if value > 50000.0 {
        return Err("Nutrition value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate calories burned per unit of a workout
pub fn validate_calories_per_unit(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Calories per unit must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("Calories per unit cannot be negative".to_string());
    }
    if value > 10000.0 {
        return Err("Calories per unit unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a logged quantity (servings eaten, units of a workout performed)
pub fn validate_quantity(quantity: f64) -> Result<(), String> {
    if quantity.is_nan() || quantity.is_infinite() {
        return Err("Quantity must be a valid number".to_string());
    }
    if quantity <= 0.0 {
        return Err("Quantity must be positive".to_string());
    }
    if quantity > 10000.0 {
        return Err("Quantity unreasonably high".to_string());
    }
    Ok(())
}

// ============================================================================
// Daily Log Validation
// ============================================================================

/// Validate a wall-clock time string in "HH:MM" form (24-hour, zero-padded)
pub fn validate_clock_time(value: &str) -> Result<(), String> {
    let clock_regex = regex_lite::Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
    if !clock_regex.is_match(value) {
        return Err(format!("Invalid time '{}', expected HH:MM", value));
    }
    Ok(())
}

/// Validate a Bristol stool scale rating (1-7)
pub fn validate_bristol_scale(value: u8) -> Result<(), String> {
    if !(1..=7).contains(&value) {
        return Err("Bristol scale must be between 1 and 7".to_string());
    }
    Ok(())
}

/// Validate a subjective wellbeing rating (mood, stress, energy; 1-10)
pub fn validate_wellbeing_scale(value: u8) -> Result<(), String> {
    if !(1..=10).contains(&value) {
        return Err("Rating must be between 1 and 10".to_string());
    }
    Ok(())
}

/// Validate free-form notes attached to a day
pub fn validate_notes(notes: &str) -> Result<(), String> {
    if notes.len() > 2000 {
        return Err("Notes too long (max 2000 characters)".to_string());
    }
    Ok(())
}

// ============================================================================
// Settings Validation
// ============================================================================

/// Validate a custom metric name
pub fn validate_metric_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Metric name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Metric name too long (max 100 characters)".to_string());
    }
    Ok(())
}

/// Validate a custom metric unit label ("mg", "glasses", ...)
pub fn validate_metric_unit(unit: &str) -> Result<(), String> {
    if unit.trim().is_empty() {
        return Err("Metric unit cannot be empty".to_string());
    }
    if unit.len() > 20 {
        return Err("Metric unit too long (max 20 characters)".to_string());
    }
    Ok(())
}

/// Validate a daily target value (calories, protein, a custom metric target)
pub fn validate_target_value(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Target must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("Target cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a profile name
pub fn validate_profile_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Profile name cannot be empty".to_string());
    }
    if name.len() > 50 {
        return Err("Profile name too long (max 50 characters)".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Oats").is_ok());
        assert!(validate_item_name("Skim milk 1L").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_nutrient_value() {
        assert!(validate_nutrient_value(0.0).is_ok());
        assert!(validate_nutrient_value(389.0).is_ok());
        assert!(validate_nutrient_value(-1.0).is_err());
        assert!(validate_nutrient_value(100000.0).is_err());
        assert!(validate_nutrient_value(f64::NAN).is_err());
        assert!(validate_nutrient_value(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1.0).is_ok());
        assert!(validate_quantity(0.5).is_ok());
        assert!(validate_quantity(0.0).is_err());
        assert!(validate_quantity(-2.0).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_clock_time() {
        assert!(validate_clock_time("00:00").is_ok());
        assert!(validate_clock_time("07:05").is_ok());
        assert!(validate_clock_time("22:00").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
        assert!(validate_clock_time("24:00").is_err());
        assert!(validate_clock_time("12:60").is_err());
        assert!(validate_clock_time("7:05").is_err()); // must be zero-padded
        assert!(validate_clock_time("1200").is_err());
        assert!(validate_clock_time("noon").is_err());
        assert!(validate_clock_time("").is_err());
    }

    #[test]
    fn test_validate_bristol_scale() {
        assert!(validate_bristol_scale(1).is_ok());
        assert!(validate_bristol_scale(4).is_ok());
        assert!(validate_bristol_scale(7).is_ok());
        assert!(validate_bristol_scale(0).is_err());
        assert!(validate_bristol_scale(8).is_err());
    }

    #[test]
    fn test_validate_wellbeing_scale() {
        assert!(validate_wellbeing_scale(1).is_ok());
        assert!(validate_wellbeing_scale(10).is_ok());
        assert!(validate_wellbeing_scale(0).is_err());
        assert!(validate_wellbeing_scale(11).is_err());
    }

    #[test]
    fn test_validate_notes() {
        assert!(validate_notes("").is_ok());
        assert!(validate_notes("Slept badly, skipped lunch").is_ok());
        assert!(validate_notes(&"n".repeat(2001)).is_err());
    }

    #[test]
    fn test_validate_metric_fields() {
        assert!(validate_metric_name("Caffeine").is_ok());
        assert!(validate_metric_name(" ").is_err());
        assert!(validate_metric_unit("mg").is_ok());
        assert!(validate_metric_unit("").is_err());
        assert!(validate_metric_unit(&"u".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_target_value() {
        assert!(validate_target_value(0.0).is_ok());
        assert!(validate_target_value(2000.0).is_ok());
        assert!(validate_target_value(-5.0).is_err());
        assert!(validate_target_value(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_profile_name() {
        assert!(validate_profile_name("Default").is_ok());
        assert!(validate_profile_name("Work travel").is_ok());
        assert!(validate_profile_name("").is_err());
        assert!(validate_profile_name(&"p".repeat(51)).is_err());
    }

    // Property-based tests
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_nutrient_range(value in 0.0f64..=50000.0) {
            prop_assert!(validate_nutrient_value(value).is_ok());
        }

        #[test]
        fn prop_negative_nutrient_rejected(value in -10000.0f64..0.0) {
            prop_assert!(validate_nutrient_value(value).is_err());
        }

        #[test]
        fn prop_positive_quantity_ok(quantity in 0.001f64..=10000.0) {
            prop_assert!(validate_quantity(quantity).is_ok());
        }

        #[test]
        fn prop_well_formed_clock_times_ok(hour in 0u8..24, minute in 0u8..60) {
            let value = format!("{:02}:{:02}", hour, minute);
            prop_assert!(validate_clock_time(&value).is_ok());
        }

        #[test]
        fn prop_out_of_range_hours_rejected(hour in 24u8..100, minute in 0u8..60) {
            let value = format!("{:02}:{:02}", hour, minute);
            prop_assert!(validate_clock_time(&value).is_err());
        }

        #[test]
        fn prop_wellbeing_scale_bounds(value in 1u8..=10) {
            prop_assert!(validate_wellbeing_scale(value).is_ok());
        }
    }
}
