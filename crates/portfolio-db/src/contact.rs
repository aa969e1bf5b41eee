//! Append-only contact message log.

use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

/// Hard cap on rows returned by [`Database::get_recent_contact_messages`].
pub const MAX_RECENT_MESSAGES: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

impl Database {
    pub fn add_contact_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
        created_at: &str,
    ) -> Result<ContactMessage, DbError> {
        self.with_tx(|conn| {
            conn.execute(
                "INSERT INTO contact_messages (name, email, message, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![name, email, message, created_at],
            )?;
            Ok(ContactMessage {
                id: conn.last_insert_rowid(),
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
                created_at: created_at.to_string(),
            })
        })
    }

    /// Newest messages first, at most `min(limit, MAX_RECENT_MESSAGES)`.
    pub fn get_recent_contact_messages(
        &self,
        limit: usize,
    ) -> Result<Vec<ContactMessage>, DbError> {
        let limit = limit.min(MAX_RECENT_MESSAGES) as i64;
        self.with_tx(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, message, created_at
                 FROM contact_messages
                 ORDER BY id DESC
                 LIMIT ?1",
            )?;
            let rows = stmt.query_map([limit], |row| {
                Ok(ContactMessage {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    message: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            let mut messages = Vec::new();
            for row in rows {
                messages.push(row?);
            }
            Ok(messages)
        })
    }

    #[cfg(test)]
    pub fn count_contact_messages(&self) -> Result<i64, DbError> {
        self.with_tx(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM contact_messages", [], |row| {
                row.get(0)
            })?;
            Ok(count)
        })
    }
}
