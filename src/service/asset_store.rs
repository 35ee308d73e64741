use crate::core::error::ContractError;
use crate::core::types::asset::Asset;
use crate::service::world_state::{WorldState, WorldStateReader};
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

/// The transaction logic for the contract's single asset record type.  Every operation verifies
/// the existence of the target key before acting on it, and no state is retained between calls:
/// each operation re-reads the world state it was constructed with.
///
/// Per key, the only accepted transitions are `Absent -> create -> Present`,
/// `Present -> update -> Present` and `Present -> delete -> Absent`.
pub struct AssetStore<W> {
    world_state: W,
}
impl<W> AssetStore<W> {
    /// Constructs a new instance of this struct.
    ///
    /// # Parameters
    ///
    /// * `world_state` The transaction context's handle to the world state.
    pub fn new(world_state: W) -> Self {
        AssetStore { world_state }
    }
}
impl<W: WorldStateReader> AssetStore<W> {
    /// Determines if a value exists for the given asset id.  A value of zero length still counts
    /// as existing.  Errors from the world state are returned without modification.
    ///
    /// # Parameters
    ///
    /// * `asset_id` The world state key of the asset.
    pub fn asset_exists(&self, asset_id: &str) -> AssetResult<bool> {
        self.world_state
            .get_state(asset_id)?
            .is_some()
            .to_ok()
    }

    /// Fetches and decodes the asset stored for the given id.
    ///
    /// # Parameters
    ///
    /// * `asset_id` The world state key of the asset.
    pub fn read_asset(&self, asset_id: &str) -> AssetResult<Asset> {
        self.require_present(asset_id)?;
        match self
            .world_state
            .get_state(asset_id)
            .map_err(ContractError::world_state_read)?
        {
            Some(bytes) => Asset::from_world_state_bytes(&bytes),
            None => ContractError::AssetNotFound {
                asset_id: asset_id.to_string(),
            }
            .to_err(),
        }
    }

    fn check_exists(&self, asset_id: &str) -> AssetResult<bool> {
        self.asset_exists(asset_id)
            .map_err(ContractError::world_state_read)
    }

    fn require_present(&self, asset_id: &str) -> AssetResult<()> {
        if self.check_exists(asset_id)? {
            Ok(())
        } else {
            ContractError::AssetNotFound {
                asset_id: asset_id.to_string(),
            }
            .to_err()
        }
    }
}
impl<W: WorldState> AssetStore<W> {
    /// Writes a brand new asset.  Fails without writing anything if a value already exists for
    /// the id.
    ///
    /// # Parameters
    ///
    /// * `asset_id` The world state key of the asset.
    /// * `value` The contents of the new asset.
    pub fn create_asset(&mut self, asset_id: &str, value: &str) -> AssetResult<()> {
        if self.check_exists(asset_id)? {
            return ContractError::AssetAlreadyExists {
                asset_id: asset_id.to_string(),
            }
            .to_err();
        }
        self.write_asset(asset_id, &Asset::new(value))
    }

    /// Replaces an existing asset with a new record holding only the new value.  The previous
    /// record is never read.
    ///
    /// # Parameters
    ///
    /// * `asset_id` The world state key of the asset.
    /// * `new_value` The replacement contents of the asset.
    pub fn update_asset(&mut self, asset_id: &str, new_value: &str) -> AssetResult<()> {
        self.require_present(asset_id)?;
        self.write_asset(asset_id, &Asset::new(new_value))
    }

    /// Removes an existing asset from the world state.
    ///
    /// # Parameters
    ///
    /// * `asset_id` The world state key of the asset.
    pub fn delete_asset(&mut self, asset_id: &str) -> AssetResult<()> {
        self.require_present(asset_id)?;
        self.world_state.del_state(asset_id)
    }

    fn write_asset(&mut self, asset_id: &str, asset: &Asset) -> AssetResult<()> {
        // Nothing is written unless encoding succeeds
        let bytes = asset.to_world_state_bytes(asset_id)?;
        self.world_state.put_state(asset_id, &bytes)
    }
}
