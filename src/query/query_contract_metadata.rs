use cosmwasm_std::{to_json_binary, Binary};

use crate::core::state::get_contract_metadata;
use crate::util::aliases::{AssetResult, DepsC};
use result_extensions::ResultExtensions;

/// Pulls the [ContractMetadata](crate::core::types::contract_metadata::ContractMetadata) stored
/// at instantiation (or replaced on migration) and serializes it to a cosmwasm Binary.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_contract_metadata(deps: &DepsC) -> AssetResult<Binary> {
    to_json_binary(&get_contract_metadata(deps.storage)?)?.to_ok()
}
