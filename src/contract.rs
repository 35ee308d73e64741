use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::create_asset::{create_asset, CreateAssetV1};
use crate::execute::delete_asset::{delete_asset, DeleteAssetV1};
use crate::execute::update_asset::{update_asset, UpdateAssetV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_asset::query_asset;
use crate::query::query_asset_exists::query_asset_exists;
use crate::query::query_contract_metadata::query_contract_metadata;
use crate::query::query_version::query_version;
use crate::util::aliases::{AssetResult, DepsC, DepsMutC, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
use crate::validation::validate_migrate_msg::validate_migrate_msg;
use crate::validation::validate_query_msg::validate_query_msg;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Env, MessageInfo};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> AssetResult<Binary> {
    validate_query_msg(&msg)?;
    match msg {
        QueryMsg::AssetExists { asset_id } => query_asset_exists(&deps, asset_id),
        QueryMsg::ReadAsset { asset_id } => query_asset(&deps, asset_id),
        QueryMsg::QueryContractMetadata {} => query_contract_metadata(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(deps: DepsMutC, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    match msg {
        ExecuteMsg::CreateAsset { .. } => {
            create_asset(deps, info, CreateAssetV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::UpdateAsset { .. } => {
            update_asset(deps, info, UpdateAssetV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::DeleteAsset { .. } => {
            delete_asset(deps, info, DeleteAssetV1::from_execute_msg(msg)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    validate_migrate_msg(&msg)?;
    match msg {
        MigrateMsg::ContractUpgrade { metadata } => migrate_contract(deps, metadata),
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::{mock_dependencies, mock_env};

    use crate::core::error::ContractError;
    use crate::core::msg::{ExecuteMsg, QueryMsg};
    use crate::core::types::asset::Asset;
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_ID, DEFAULT_ASSET_VALUE, DEFAULT_SENDER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, test_create_asset_success, test_instantiate_success, InstArgs,
    };

    use super::{execute, query};

    #[test]
    fn test_execute_rejects_empty_asset_id() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            ExecuteMsg::CreateAsset {
                asset_id: "".to_string(),
                value: DEFAULT_ASSET_VALUE.to_string(),
            },
        )
        .expect_err("an empty asset id should be rejected before reaching storage");
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }

    #[test]
    fn test_query_routes_to_read_and_exists() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_asset_success(deps.as_mut());
        let exists = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::AssetExists {
                asset_id: DEFAULT_ASSET_ID.to_string(),
            },
        )
        .expect("the exists query should succeed");
        assert!(from_json::<bool>(&exists).expect("exists should respond with a bool"));
        let asset = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::ReadAsset {
                asset_id: DEFAULT_ASSET_ID.to_string(),
            },
        )
        .expect("the read query should succeed");
        assert_eq!(
            Asset::new(DEFAULT_ASSET_VALUE),
            from_json::<Asset>(&asset).expect("read should respond with an asset"),
        );
    }

    #[test]
    fn test_query_rejects_empty_asset_id() {
        let deps = mock_dependencies();
        let error = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::ReadAsset {
                asset_id: "".to_string(),
            },
        )
        .expect_err("an empty asset id should be rejected");
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }
}
