//! In-memory keyed store with snapshot persistence
//!
//! Collections are addressed by key and mutated through the repositories;
//! `snapshot` gives the store durability across runs.

pub mod collection;
pub mod database;
pub mod snapshot;

pub use collection::KeyedCollection;
pub use database::{ChangeEvent, Database, LogKey, StoreCollection, StoreCounts};
