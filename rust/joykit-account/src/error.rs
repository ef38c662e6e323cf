use thiserror::Error;

/// Errors that can occur while loading or persisting the account record.
#[derive(Error, Debug)]
pub enum AccountStoreError {
    /// The persisted account document could not be read or written.
    #[error("failed to access persisted account state: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted account document exists but is not a valid account
    /// record.
    #[error("persisted account state is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
