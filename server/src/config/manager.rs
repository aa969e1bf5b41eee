//! ConfigManager: the singleton site configuration row, merged over defaults.

use std::sync::Arc;

use portfolio_db::{Database, DbError, now_iso};
use serde_json::Value;

use super::Configuration;

/// Key of the single settings row holding the site configuration.
pub const CONFIG_KEY: &str = "config";

/// Wraps [`Database`] to load and save the site configuration.
///
/// Every save recomputes the whole object from the defaults plus the caller's
/// payload, so omitted keys revert to their defaults rather than to the
/// previous save.
pub struct ConfigManager {
    db: Database,
    defaults: Arc<Configuration>,
}

impl ConfigManager {
    pub fn new(db: Database, defaults: Arc<Configuration>) -> Self {
        Self { db, defaults }
    }

    /// Effective configuration. A missing or unreadable row yields the defaults.
    pub fn load(&self) -> Result<Configuration, DbError> {
        let Some(raw) = self.db.get_setting(CONFIG_KEY)? else {
            return Ok(self.defaults.as_ref().clone());
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(stored)) => Ok(merge_over_defaults(&self.defaults, &stored)),
            Ok(_) => {
                tracing::warn!("Stored configuration is not an object, using defaults");
                Ok(self.defaults.as_ref().clone())
            }
            Err(e) => {
                tracing::warn!("Stored configuration is not valid JSON, using defaults: {e}");
                Ok(self.defaults.as_ref().clone())
            }
        }
    }

    /// Merge `partial` over the defaults and overwrite the stored row.
    pub fn save(&self, partial: &Configuration) -> Result<(), DbError> {
        let merged = merge_over_defaults(&self.defaults, partial);
        let payload = Value::Object(merged).to_string();
        self.db.upsert_setting(CONFIG_KEY, &payload, &now_iso())?;
        Ok(())
    }

    /// Seed the row with the defaults when it does not exist yet.
    pub fn initialize_defaults(&self) -> Result<bool, DbError> {
        let payload = Value::Object(self.defaults.as_ref().clone()).to_string();
        let inserted = self
            .db
            .insert_setting_if_absent(CONFIG_KEY, &payload, &now_iso())?;
        if inserted {
            tracing::info!("Seeded default site configuration");
        }
        Ok(inserted)
    }
}

/// Shallow merge of `overrides` over a fresh copy of `defaults`.
///
/// Keys unknown to the defaults are taken as-is. A known key whose override
/// has a different JSON type than its default keeps the default value.
pub fn merge_over_defaults(defaults: &Configuration, overrides: &Configuration) -> Configuration {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        match defaults.get(key) {
            Some(default) if !same_type(default, value) => {
                tracing::debug!(key = %key, "Ignoring override with mismatched type");
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

fn same_type(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
