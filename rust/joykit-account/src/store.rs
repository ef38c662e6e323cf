//! The caching store over an [`AccountBackend`].

use crate::{Account, AccountBackend, AccountStoreError};
use joykit_common::SharedCell;

/// The logged-in account, cached in memory and written through to a
/// persistence backend.
///
/// Opening the store loads whatever record the backend holds, so reads are
/// cheap thereafter. Mutations persist first and only then update the
/// cache, keeping the cache a faithful view of durable state even when the
/// backend fails.
///
/// # Example
///
/// ```
/// use joykit_account::{Account, AccountStore, CallbackType, KeyType, VolatileAccountBackend};
///
/// # fn main() -> Result<(), joykit_account::AccountStoreError> {
/// let store = AccountStore::open(VolatileAccountBackend::new())?;
/// assert!(!store.is_logged_in());
///
/// store.set(Account {
///     address: "ckt1qrfrwcdnvssswdwpn3s9".into(),
///     pubkey: "ab".repeat(64),
///     key_type: KeyType::MainKey,
///     alg: Some(-7),
///     attestation: None,
///     callback_type: CallbackType::Popup,
/// })?;
///
/// assert!(store.is_logged_in());
///
/// store.clear()?;
/// assert_eq!(store.get(), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AccountStore<Backend>
where
    Backend: AccountBackend,
{
    backend: Backend,
    current: SharedCell<Option<Account>>,
}

impl<Backend> AccountStore<Backend>
where
    Backend: AccountBackend,
{
    /// Open the store, loading any persisted account into the cache.
    ///
    /// # Errors
    ///
    /// Fails if the backend holds a record that cannot be loaded.
    pub fn open(backend: Backend) -> Result<Self, AccountStoreError> {
        let current = SharedCell::new(backend.load()?);

        Ok(Self { backend, current })
    }

    /// The currently logged-in account, if any.
    pub fn get(&self) -> Option<Account> {
        self.current.read().clone()
    }

    /// Whether an account is currently logged in.
    pub fn is_logged_in(&self) -> bool {
        self.current.read().is_some()
    }

    /// Record a successful authentication.
    ///
    /// # Errors
    ///
    /// Fails, leaving the cache untouched, if the backend cannot persist
    /// the record.
    pub fn set(&self, account: Account) -> Result<(), AccountStoreError> {
        self.backend.save(&account)?;
        tracing::debug!(address = %account.address, "account updated");
        *self.current.write() = Some(account);

        Ok(())
    }

    /// Log out: remove the persisted record and forget the cached account.
    ///
    /// # Errors
    ///
    /// Fails, leaving the cache untouched, if the backend cannot remove
    /// the record.
    pub fn clear(&self) -> Result<(), AccountStoreError> {
        self.backend.clear()?;
        tracing::debug!("account cleared");
        *self.current.write() = None;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallbackType, KeyType, VolatileAccountBackend};
    use anyhow::Result;

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    fn test_account(address: &str) -> Account {
        Account {
            address: address.into(),
            pubkey: "cd".repeat(64),
            key_type: KeyType::SubKey,
            alg: Some(-7),
            attestation: Some("o2NmbXRkbm9uZQ".into()),
            callback_type: CallbackType::Popup,
        }
    }

    #[test]
    fn it_starts_logged_out_over_an_empty_backend() -> Result<()> {
        let store = AccountStore::open(VolatileAccountBackend::new())?;

        assert_eq!(store.get(), None);
        assert!(!store.is_logged_in());
        Ok(())
    }

    #[test]
    fn it_initializes_from_persisted_state() -> Result<()> {
        let backend = VolatileAccountBackend::new();
        let account = test_account("ckt1persisted");
        backend.save(&account)?;

        let store = AccountStore::open(backend)?;

        assert_eq!(store.get(), Some(account));
        Ok(())
    }

    #[test]
    fn it_writes_through_on_set() -> Result<()> {
        let store = AccountStore::open(VolatileAccountBackend::new())?;
        let account = test_account("ckt1current");

        store.set(account.clone())?;

        assert_eq!(store.get(), Some(account.clone()));
        // The backend saw the write, not just the cache.
        assert_eq!(store.backend.load()?, Some(account));
        Ok(())
    }

    #[test]
    fn it_replaces_the_account_on_a_subsequent_login() -> Result<()> {
        let store = AccountStore::open(VolatileAccountBackend::new())?;

        store.set(test_account("ckt1first"))?;
        store.set(test_account("ckt1second"))?;

        assert_eq!(store.get(), Some(test_account("ckt1second")));
        Ok(())
    }

    #[test]
    fn it_clears_both_cache_and_backend() -> Result<()> {
        let store = AccountStore::open(VolatileAccountBackend::new())?;
        store.set(test_account("ckt1gone"))?;

        store.clear()?;

        assert_eq!(store.get(), None);
        assert_eq!(store.backend.load()?, None);
        Ok(())
    }
}
