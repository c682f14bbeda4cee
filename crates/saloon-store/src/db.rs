//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::from_rusqlite;
use rusqlite::Connection;
use saloon_core::Result;
use std::path::Path;

/// Open a SQLite database at the given path
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns `Persistence` if the directory or database cannot be opened.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| crate::errors::io_error(parent, e))?;
    }
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
///
/// Returns `Persistence` if SQLite cannot allocate the database.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;
    Ok(conn)
}

/// Configure a file connection
///
/// # Errors
///
/// Returns `Persistence` if a pragma is rejected.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;

    // journal_mode returns a row, so it cannot go through execute()
    let _mode: String = conn
        .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
        .map_err(from_rusqlite)?;

    Ok(())
}
