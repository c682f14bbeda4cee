//! SQLite-backed record store
//!
//! Each saloon is one row of the `saloons` table. The aggregate, including its
//! embedded service list, is stored as a JSON `body`; `owner` and the
//! timestamps are mirrored into columns for inspection.

use crate::errors::{corrupt_record, from_rusqlite, non_finite_field};
use crate::{db, migrations};
use rusqlite::{Connection, OptionalExtension};
use saloon_core::errors::SaloonError;
use saloon_core::{RecordStore, Result, Saloon};
use std::path::Path;

/// `RecordStore` implementation over a SQLite connection
///
/// `values()` returns rows in insertion order; an overwrite keeps the row's
/// original position.
pub struct SqliteRecordStore {
    conn: Connection,
}

impl SqliteRecordStore {
    /// Open (or create) a database file and bring its schema up to date
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the file cannot be opened, or
    /// `ChecksumMismatch` if an applied migration was altered.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// A fresh in-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if SQLite cannot allocate the database.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, applying pending migrations
    ///
    /// # Errors
    ///
    /// Propagates migration failures.
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Number of stored saloons
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the count query fails.
    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM saloons", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(usize::try_from(n).unwrap_or_default())
    }
}

fn to_sql_time(value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| SaloonError::Persistence {
        message: format!("timestamp {} does not fit in an INTEGER column", value),
    })
}

// serde_json writes NaN and infinities as `null`, which would not decode again
fn ensure_encodable(id: &str, saloon: &Saloon) -> Result<()> {
    if !saloon.rating.is_finite() {
        return Err(non_finite_field(id, "rating", saloon.rating));
    }
    match saloon
        .services_rendered
        .iter()
        .find(|s| !s.service_amount.is_finite())
    {
        Some(service) => Err(non_finite_field(id, "serviceAmount", service.service_amount)),
        None => Ok(()),
    }
}

fn decode(id: &str, body: &str) -> Result<Saloon> {
    serde_json::from_str(body).map_err(|e| corrupt_record(id, e))
}

impl RecordStore for SqliteRecordStore {
    fn get(&self, id: &str) -> Result<Option<Saloon>> {
        let body: Option<String> = self
            .conn
            .query_row("SELECT body FROM saloons WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .optional()
            .map_err(from_rusqlite)?;

        body.map(|b| decode(id, &b)).transpose()
    }

    fn insert(&mut self, id: &str, saloon: Saloon) -> Result<()> {
        ensure_encodable(id, &saloon)?;
        let body = serde_json::to_string(&saloon)?;
        let updated_at = saloon.updated_at.map(to_sql_time).transpose()?;

        self.conn
            .execute(
                "INSERT INTO saloons (id, owner, body, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    owner = excluded.owner,
                    body = excluded.body,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at",
                rusqlite::params![
                    id,
                    saloon.owner.as_str(),
                    body,
                    to_sql_time(saloon.created_at)?,
                    updated_at,
                ],
            )
            .map_err(from_rusqlite)?;

        tracing::debug!(saloon_id = id, "saloon row written");
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<Option<Saloon>> {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;

        let body: Option<String> = tx
            .query_row("SELECT body FROM saloons WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .optional()
            .map_err(from_rusqlite)?;

        let Some(body) = body else {
            return Ok(None);
        };
        let saloon = decode(id, &body)?;

        tx.execute("DELETE FROM saloons WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(saloon_id = id, "saloon row deleted");
        Ok(Some(saloon))
    }

    fn values(&self) -> Result<Vec<Saloon>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, body FROM saloons ORDER BY rowid")
            .map_err(from_rusqlite)?;

        let rows: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.iter().map(|(id, body)| decode(id, body)).collect()
    }
}
