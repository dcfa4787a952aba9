//! Builder for the persisted state a test starts from.

use chrono::{Duration, Utc};
use serde_json::Value;

use crate::{constant::TEST_TOKEN, error::TestError};

/// Key-value pairs to seed into storage before a test runs
///
/// Keys match the ones the portal persists: `token`, `user`, `supplierMode`.
#[derive(Default)]
pub struct StorageSeed {
    entries: Vec<(String, String)>,
    user: Option<Value>,
}

impl StorageSeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a logged in session for `user` with the standard test token
    pub fn with_session(self, user: Value) -> Self {
        self.with_token(TEST_TOKEN).with_user(user)
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.entries.push(("token".to_string(), token.to_string()));
        self
    }

    pub fn with_user(mut self, user: Value) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_supplier_mode(mut self, enabled: bool) -> Self {
        let flag = if enabled { "1" } else { "0" };
        self.entries
            .push(("supplierMode".to_string(), flag.to_string()));
        self
    }

    /// Store a raw value as is, for corrupted-state tests
    pub fn with_raw(mut self, key: &str, value: &str) -> Self {
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    /// Stamp the user record with a recent `updated_at`, as the backend does
    pub fn touched(mut self) -> Self {
        if let Some(Value::Object(user)) = self.user.as_mut() {
            let updated_at = (Utc::now() - Duration::minutes(5)).to_rfc3339();
            user.insert("updated_at".to_string(), Value::String(updated_at));
        }
        self
    }

    /// Produce the entries to load into storage
    ///
    /// # Returns
    /// - `Ok(entries)` - Key-value pairs in insertion order
    /// - `Err(TestError::Fixture)` - The user fixture is not a JSON object
    pub fn build(self) -> Result<Vec<(String, String)>, TestError> {
        let mut entries = self.entries;

        if let Some(user) = self.user {
            if !user.is_object() {
                return Err(TestError::Fixture(format!(
                    "user fixture must be an object, got {}",
                    user
                )));
            }

            entries.push(("user".to_string(), serde_json::to_string(&user)?));
        }

        Ok(entries)
    }
}
