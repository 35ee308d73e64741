use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::service::asset_store::AssetStore;
use crate::service::world_state::StorageState;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use result_extensions::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

/// A transformation of [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// for ease of use in the underlying [create_asset](self::create_asset) function.
///
/// # Parameters
///
/// * `asset_id` The world state key of the new asset.
/// * `value` The contents of the new asset.
pub struct CreateAssetV1 {
    pub asset_id: String,
    pub value: String,
}
impl CreateAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(asset_id: S1, value: S2) -> Self {
        CreateAssetV1 {
            asset_id: asset_id.into(),
            value: value.into(),
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
    /// variant, then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType)
    /// error will be returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<CreateAssetV1> {
        match msg {
            ExecuteMsg::CreateAsset { asset_id, value } => {
                CreateAssetV1::new(asset_id, value).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::CreateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset).
/// Writes a new asset to the world state, failing if one already exists for the id.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the create asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn create_asset(deps: DepsMutC, info: MessageInfo, msg: CreateAssetV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    AssetStore::new(StorageState::new(deps.storage)).create_asset(&msg.asset_id, &msg.value)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::CreateAsset, &msg.asset_id)
                .set_new_value(&msg.value),
        )
        .to_ok()
}
