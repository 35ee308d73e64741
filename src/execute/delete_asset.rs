use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::service::asset_store::AssetStore;
use crate::service::world_state::StorageState;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use result_extensions::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

/// A transformation of [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset)
/// for ease of use in the underlying [delete_asset](self::delete_asset) function.
pub struct DeleteAssetV1 {
    pub asset_id: String,
}
impl DeleteAssetV1 {
    pub fn new<S: Into<String>>(asset_id: S) -> Self {
        DeleteAssetV1 {
            asset_id: asset_id.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<DeleteAssetV1> {
        match msg {
            ExecuteMsg::DeleteAsset { asset_id } => DeleteAssetV1::new(asset_id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::DeleteAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset).
/// Removes an existing asset from the world state.  There is no soft delete, so the id may be
/// created again afterward.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the delete asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn delete_asset(deps: DepsMutC, info: MessageInfo, msg: DeleteAssetV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    AssetStore::new(StorageState::new(deps.storage)).delete_asset(&msg.asset_id)?;
    Response::new()
        .add_attributes(EventAttributes::for_asset_event(
            EventType::DeleteAsset,
            &msg.asset_id,
        ))
        .to_ok()
}
