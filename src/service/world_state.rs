use cosmwasm_std::Storage;

use crate::core::state::get_asset_storage_key;
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

/// Read access to the ledger's key-value world state.  Implementations are free to fail, in which
/// case a [WorldStateAccess](crate::core::error::ContractError::WorldStateAccess) error should be
/// produced.
pub trait WorldStateReader {
    /// Fetches the raw bytes stored under a key.  `None` means that no value exists; a present but
    /// empty value is returned as `Some` with a zero-length vector.
    ///
    /// # Parameters
    ///
    /// * `key` The world state key to look up.
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>>;
}

/// Write access to the ledger's key-value world state.
pub trait WorldState: WorldStateReader {
    /// Writes raw bytes under a key, replacing any existing value.
    ///
    /// # Parameters
    ///
    /// * `key` The world state key to write.
    /// * `value` The bytes to store.
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()>;

    /// Removes the value stored under a key.
    ///
    /// # Parameters
    ///
    /// * `key` The world state key to remove.
    fn del_state(&mut self, key: &str) -> AssetResult<()>;
}

impl<T: WorldStateReader + ?Sized> WorldStateReader for &T {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        (**self).get_state(key)
    }
}

impl<T: WorldStateReader + ?Sized> WorldStateReader for &mut T {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        (**self).get_state(key)
    }
}

impl<T: WorldState + ?Sized> WorldState for &mut T {
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        (**self).put_state(key, value)
    }

    fn del_state(&mut self, key: &str) -> AssetResult<()> {
        (**self).del_state(key)
    }
}

/// A read-only world state backed by the contract's cosmwasm storage, for use in queries.
pub struct StorageStateReader<'a> {
    storage: &'a dyn Storage,
}
impl<'a> StorageStateReader<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        StorageStateReader { storage }
    }
}
impl WorldStateReader for StorageStateReader<'_> {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.storage.get(&get_asset_storage_key(key)).to_ok()
    }
}

/// A writable world state backed by the contract's cosmwasm storage, for use in executions.
pub struct StorageState<'a> {
    storage: &'a mut dyn Storage,
}
impl<'a> StorageState<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        StorageState { storage }
    }
}
impl WorldStateReader for StorageState<'_> {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        self.storage.get(&get_asset_storage_key(key)).to_ok()
    }
}
impl WorldState for StorageState<'_> {
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        self.storage.set(&get_asset_storage_key(key), value);
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> AssetResult<()> {
        self.storage.remove(&get_asset_storage_key(key));
        Ok(())
    }
}
