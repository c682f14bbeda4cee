//! Repository layer persisting saloon aggregates to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRecordStore;
