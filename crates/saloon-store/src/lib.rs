//! Saloon Store - SQLite persistence for the saloon registry
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded migrations with checksum verification
//! - `SqliteRecordStore`, a `RecordStore` backed by a single `saloons` table

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use repo::SqliteRecordStore;
pub use saloon_core::Result;
