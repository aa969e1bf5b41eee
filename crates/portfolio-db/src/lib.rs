//! SQLite storage layer for the portfolio site.
//!
//! File-backed databases open a fresh connection for every operation; the
//! in-memory variant used by tests keeps a single shared connection.

pub mod contact;
pub mod schema;
pub mod settings;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rusqlite::Connection;

pub use contact::{ContactMessage, MAX_RECENT_MESSAGES};
pub use settings::SettingRow;

const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Clone)]
enum Backend {
    File(PathBuf),
    Memory(Arc<Mutex<Connection>>),
}

/// Cloneable database handle.
#[derive(Clone)]
pub struct Database {
    backend: Backend,
}

impl Database {
    /// Open or create database at the given path and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let db = Self {
            backend: Backend::File(path.as_ref().to_path_buf()),
        };
        db.configure()?;
        db.migrate()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            backend: Backend::Memory(Arc::new(Mutex::new(conn))),
        };
        db.migrate()?;
        Ok(db)
    }

    /// Access a connection with a closure.
    pub fn with_conn<F, R>(&self, f: F) -> Result<R, DbError>
    where
        F: FnOnce(&Connection) -> Result<R, DbError>,
    {
        self.with_conn_mut(|conn| f(conn))
    }

    /// Access a connection mutably (for transactions).
    pub fn with_conn_mut<F, R>(&self, f: F) -> Result<R, DbError>
    where
        F: FnOnce(&mut Connection) -> Result<R, DbError>,
    {
        match &self.backend {
            Backend::File(path) => {
                let mut conn = connect(path)?;
                f(&mut conn)
            }
            Backend::Memory(shared) => {
                let mut conn = shared.lock().map_err(|_| DbError::LockPoisoned)?;
                f(&mut conn)
            }
        }
    }

    /// Run `f` inside its own transaction. Commits when `f` returns `Ok`,
    /// rolls back otherwise.
    pub fn with_tx<F, R>(&self, f: F) -> Result<R, DbError>
    where
        F: FnOnce(&Connection) -> Result<R, DbError>,
    {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let out = f(&tx)?;
            tx.commit()?;
            Ok(out)
        })
    }

    fn configure(&self) -> Result<(), DbError> {
        self.with_conn(|conn| {
            let mode: String =
                conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
            tracing::debug!(journal_mode = %mode, "Database configured");
            Ok(())
        })
    }

    fn migrate(&self) -> Result<(), DbError> {
        self.with_tx(|conn| {
            schema::ensure_schema(conn)?;
            Ok(())
        })
    }
}

fn connect(path: &Path) -> Result<Connection, DbError> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

/// Current time as an ISO-8601 UTC timestamp.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Database error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests;
