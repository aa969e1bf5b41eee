//! Contact form submissions.

use portfolio_db::{ContactMessage, Database, DbError, now_iso};

const MIN_NAME_CHARS: usize = 2;
const MIN_EMAIL_CHARS: usize = 5;
const MIN_MESSAGE_CHARS: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Carries the name of the first field that failed the length check.
    #[error("Please fill all fields with valid values.")]
    Validation(&'static str),
    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

#[derive(Clone)]
pub struct ContactService {
    db: Database,
}

impl ContactService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Trim and length-check the fields, then append a new message.
    ///
    /// Lengths are counted in characters. There is no email format check.
    pub fn submit(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, ContactError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        let checks = [
            ("name", name, MIN_NAME_CHARS),
            ("email", email, MIN_EMAIL_CHARS),
            ("message", message, MIN_MESSAGE_CHARS),
        ];
        if let Some((field, _, _)) = checks
            .iter()
            .find(|(_, value, min)| value.chars().count() < *min)
        {
            tracing::debug!(field = *field, "Rejected contact submission");
            return Err(ContactError::Validation(*field));
        }

        let stored = self
            .db
            .add_contact_message(name, email, message, &now_iso())?;
        tracing::info!(id = stored.id, "Contact message stored");
        Ok(stored)
    }

    /// Newest messages first, capped at [`portfolio_db::MAX_RECENT_MESSAGES`].
    pub fn list_recent(&self, limit: usize) -> Result<Vec<ContactMessage>, ContactError> {
        Ok(self.db.get_recent_contact_messages(limit)?)
    }
}
