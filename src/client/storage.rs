//! Client-local key-value persistence.
//!
//! The portal persists a handful of string values (session token, user record, UI
//! toggles). [`KeyValueStorage`] is the port every store reads and writes through;
//! views never touch storage directly.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::client::error::StorageError;

/// Bearer token of the logged in user
pub const TOKEN_KEY: &str = "token";
/// JSON-serialized user record of the logged in user
pub const USER_KEY: &str = "user";
/// `"1"` when the garage role has the supplier catalogue enabled
pub const SUPPLIER_MODE_KEY: &str = "supplierMode";
/// Optional override of the REST API base URL
pub const API_BASE_URL_KEY: &str = "API_BASE_URL";

/// String key-value storage
///
/// Methods take `&self`: both implementations are interior-mutable handles onto a
/// store shared by the whole UI thread.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage, used by native builds and tests
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStorage
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            values: Rc::new(RefCell::new(values)),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().remove(key);

        Ok(())
    }
}

/// Browser `window.localStorage`
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;

        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(feature = "web")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::WriteRejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// The storage backing the running application
#[cfg(feature = "web")]
pub fn default_storage() -> Rc<dyn KeyValueStorage> {
    Rc::new(BrowserStorage)
}

/// The storage backing the running application
#[cfg(not(feature = "web"))]
pub fn default_storage() -> Rc<dyn KeyValueStorage> {
    Rc::new(MemoryStorage::new())
}
