//! Key-value settings rows.

use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

impl Database {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>, DbError> {
        Ok(self.get_setting_row(key)?.map(|row| row.value))
    }

    pub fn get_setting_row(&self, key: &str) -> Result<Option<SettingRow>, DbError> {
        self.with_tx(|conn| {
            let row = conn
                .query_row(
                    "SELECT key, value, updated_at FROM settings WHERE key = ?1",
                    [key],
                    |row| {
                        Ok(SettingRow {
                            key: row.get(0)?,
                            value: row.get(1)?,
                            updated_at: row.get(2)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Insert or overwrite the row for `key`.
    pub fn upsert_setting(&self, key: &str, value: &str, updated_at: &str) -> Result<(), DbError> {
        self.with_tx(|conn| {
            conn.execute(
                "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                rusqlite::params![key, value, updated_at],
            )?;
            Ok(())
        })
    }

    /// Insert the row only when `key` is absent. Returns whether a row was written.
    pub fn insert_setting_if_absent(
        &self,
        key: &str,
        value: &str,
        updated_at: &str,
    ) -> Result<bool, DbError> {
        self.with_tx(|conn| {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![key, value, updated_at],
            )?;
            Ok(changed > 0)
        })
    }
}
