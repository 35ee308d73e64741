use crate::service::asset_store::AssetStore;
use crate::service::world_state::StorageStateReader;
use crate::util::aliases::{AssetResult, DepsC};
use result_extensions::ResultExtensions;
use cosmwasm_std::{to_json_binary, Binary};

/// A query that determines if an asset is stored for the given id, responding with a serialized
/// boolean.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `asset_id` The world state key of the asset.
pub fn query_asset_exists<S: AsRef<str>>(deps: &DepsC, asset_id: S) -> AssetResult<Binary> {
    let exists = AssetStore::new(StorageStateReader::new(deps.storage))
        .asset_exists(asset_id.as_ref())?;
    to_json_binary(&exists)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::mock_dependencies;

    use crate::testutil::test_constants::DEFAULT_ASSET_ID;
    use crate::testutil::test_utilities::{
        test_create_asset_success, test_instantiate_success, InstArgs,
    };

    use super::query_asset_exists;

    #[test]
    fn test_query_missing_asset() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let binary = query_asset_exists(&deps.as_ref(), DEFAULT_ASSET_ID)
            .expect("the query should execute without error");
        assert!(
            !from_json::<bool>(&binary).expect("the binary should deserialize to a bool"),
            "an asset that was never created should not exist",
        );
    }

    #[test]
    fn test_query_existing_asset() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_asset_success(deps.as_mut());
        let binary = query_asset_exists(&deps.as_ref(), DEFAULT_ASSET_ID)
            .expect("the query should execute without error");
        assert!(
            from_json::<bool>(&binary).expect("the binary should deserialize to a bool"),
            "a created asset should exist",
        );
    }

    #[test]
    fn test_bookkeeping_keys_are_not_assets() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        for key in ["contract_info", "contract_metadata"] {
            let binary = query_asset_exists(&deps.as_ref(), key)
                .expect("the query should execute without error");
            assert!(
                !from_json::<bool>(&binary).expect("the binary should deserialize to a bool"),
                "the contract's own storage key [{}] should not be visible as an asset",
                key,
            );
        }
    }
}
