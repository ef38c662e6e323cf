//! Persistence backends for the account record.

use crate::{Account, AccountStoreError};
use joykit_common::SharedCell;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Where the single persisted account record lives.
///
/// A backend stores at most one record. Implementations must make `load`
/// reflect the most recent `save`/`clear`, but need no further coordination;
/// the [`AccountStore`] serializes writers above this trait.
///
/// [`AccountStore`]: crate::AccountStore
pub trait AccountBackend {
    /// Read the persisted record, if one exists.
    ///
    /// # Errors
    ///
    /// Fails if the record exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<Account>, AccountStoreError>;

    /// Persist `account`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Fails if the record cannot be written.
    fn save(&self, account: &Account) -> Result<(), AccountStoreError>;

    /// Remove the persisted record. Removing an absent record is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Fails if an existing record cannot be removed.
    fn clear(&self) -> Result<(), AccountStoreError>;
}

/// An in-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct VolatileAccountBackend {
    record: SharedCell<Option<Account>>,
}

impl VolatileAccountBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountBackend for VolatileAccountBackend {
    fn load(&self) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.record.read().clone())
    }

    fn save(&self, account: &Account) -> Result<(), AccountStoreError> {
        *self.record.write() = Some(account.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AccountStoreError> {
        *self.record.write() = None;
        Ok(())
    }
}

/// A backend persisting the record as one JSON document on disk, the native
/// analogue of a browser's local storage entry.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FsAccountBackend {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FsAccountBackend {
    /// Create a backend storing its record at `path`. The file is created
    /// on first save; parent directories are created as needed.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The location of the persisted record.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AccountBackend for FsAccountBackend {
    fn load(&self) -> Result<Option<Account>, AccountStoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&self, account: &Account) -> Result<(), AccountStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(std::fs::write(&self.path, serde_json::to_vec_pretty(account)?)?)
    }

    fn clear(&self) -> Result<(), AccountStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
