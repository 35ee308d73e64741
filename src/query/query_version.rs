use cosmwasm_std::{to_json_binary, Binary};
use result_extensions::ResultExtensions;

use crate::{
    migrate::version_info::get_version_info,
    util::aliases::{AssetResult, DepsC},
};

/// Pulls the version info for the contract out of the version store.
/// On a success, serializes the value to a cosmwasm Binary and responds with Ok.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_version(deps: &DepsC) -> AssetResult<Binary> {
    to_json_binary(&get_version_info(deps.storage)?)?.to_ok()
}
