//! Wellbeing Tracker Application Library
//!
//! This library exposes the application modules for use in tests and other crates.

pub mod config;
pub mod error;
pub mod repositories;
pub mod services;
pub mod state;
pub mod store;
