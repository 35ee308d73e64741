use crate::service::asset_store::AssetStore;
use crate::service::world_state::StorageStateReader;
use crate::util::aliases::{AssetResult, DepsC};
use result_extensions::ResultExtensions;
use cosmwasm_std::{to_json_binary, Binary};

/// A query that fetches a target [Asset](crate::core::types::asset::Asset) from the world state.
/// Unlike an optional lookup, a missing asset produces an
/// [AssetNotFound](crate::core::error::ContractError::AssetNotFound) error.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `asset_id` The world state key of the asset.
pub fn query_asset<S: AsRef<str>>(deps: &DepsC, asset_id: S) -> AssetResult<Binary> {
    let asset =
        AssetStore::new(StorageStateReader::new(deps.storage)).read_asset(asset_id.as_ref())?;
    to_json_binary(&asset)?.to_ok()
}
