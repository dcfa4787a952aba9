use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Persistent storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write key {key:?} to persistent storage: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("Failed to serialize value for key {key:?}: {reason}")]
    Serialize { key: String, reason: String },
}
