use std::rc::Rc;

use dioxus_logger::tracing;

use crate::client::{
    error::Error,
    storage::{KeyValueStorage, API_BASE_URL_KEY, SUPPLIER_MODE_KEY},
};

/// Persisted UI toggles and overrides
#[derive(Clone)]
pub struct Preferences {
    storage: Rc<dyn KeyValueStorage>,
}

impl Preferences {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Whether garage accounts see the supplier catalogue, off unless stored as `"1"`
    pub fn supplier_mode(&self) -> bool {
        match self.storage.get(SUPPLIER_MODE_KEY) {
            Ok(value) => value.as_deref().map(str::trim) == Some("1"),
            Err(err) => {
                tracing::warn!("Failed to read supplier mode, defaulting to off: {}", err);
                false
            }
        }
    }

    pub fn set_supplier_mode(&self, enabled: bool) -> Result<(), Error> {
        self.storage
            .set(SUPPLIER_MODE_KEY, if enabled { "1" } else { "0" })?;

        Ok(())
    }

    /// Raw API base URL override, if one is stored
    pub fn api_base_url_override(&self) -> Option<String> {
        self.storage
            .get(API_BASE_URL_KEY)
            .unwrap_or_else(|err| {
                tracing::warn!("Failed to read API base URL override: {}", err);
                None
            })
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }
}
