use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::service::asset_store::AssetStore;
use crate::service::world_state::StorageState;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use result_extensions::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

/// A transformation of [ExecuteMsg::UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset)
/// for ease of use in the underlying [update_asset](self::update_asset) function.
pub struct UpdateAssetV1 {
    pub asset_id: String,
    pub value: String,
}
impl UpdateAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(asset_id: S1, value: S2) -> Self {
        UpdateAssetV1 {
            asset_id: asset_id.into(),
            value: value.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<UpdateAssetV1> {
        match msg {
            ExecuteMsg::UpdateAsset { asset_id, value } => {
                UpdateAssetV1::new(asset_id, value).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset).
/// Overwrites an existing asset with the new value.  The previous value is discarded.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the update asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn update_asset(deps: DepsMutC, info: MessageInfo, msg: UpdateAssetV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    AssetStore::new(StorageState::new(deps.storage)).update_asset(&msg.asset_id, &msg.value)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::UpdateAsset, &msg.asset_id)
                .set_new_value(&msg.value),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::state::get_asset_storage_key;
    use crate::testutil::test_constants::{DEFAULT_ASSET_ID, DEFAULT_SENDER_ADDRESS};
    use crate::testutil::test_utilities::{
        empty_mock_info, single_attribute_for_key, test_create_asset_success,
        test_instantiate_success, InstArgs,
    };
    use crate::util::constants::{ASSET_EVENT_TYPE_KEY, ASSET_ID_KEY, NEW_VALUE_KEY};
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::Storage;

    use super::{update_asset, UpdateAssetV1};

    #[test]
    fn test_update_asset_success() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_asset_success(deps.as_mut());
        let response = update_asset(
            deps.as_mut(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            UpdateAssetV1::new(DEFAULT_ASSET_ID, "world"),
        )
        .expect("updating an existing asset should succeed");
        assert_eq!(
            "update_asset",
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
        );
        assert_eq!(
            DEFAULT_ASSET_ID,
            single_attribute_for_key(&response, ASSET_ID_KEY),
        );
        assert_eq!("world", single_attribute_for_key(&response, NEW_VALUE_KEY));
        assert_eq!(
            Some(br#"{"value":"world"}"#.to_vec()),
            deps.storage.get(&get_asset_storage_key(DEFAULT_ASSET_ID)),
            "the stored asset should hold only the new value",
        );
    }

    #[test]
    fn test_update_missing_asset_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = update_asset(
            deps.as_mut(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            UpdateAssetV1::new(DEFAULT_ASSET_ID, "world"),
        )
        .expect_err("updating a missing asset should fail");
        match error {
            ContractError::AssetNotFound { asset_id } => assert_eq!(DEFAULT_ASSET_ID, asset_id),
            _ => panic!("unexpected error encountered: {:?}", error),
        }
        assert_eq!(
            None,
            deps.storage.get(&get_asset_storage_key(DEFAULT_ASSET_ID)),
            "a failed update should not create the asset",
        );
    }
}
