use cosmwasm_std::{
    testing::{mock_env, mock_info},
    Coin, MessageInfo, Response,
};

use crate::contract::{execute, instantiate};
use crate::core::msg::{ExecuteMsg, InitMsg};
use crate::core::types::asset::Asset;
use crate::core::types::contract_metadata::{ContactMetadata, ContractMetadata, LicenseMetadata};
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::traits::OptionExtensions;

use super::mock_world_state::MockWorldState;
use super::test_constants::{
    DEFAULT_ASSET_ID, DEFAULT_ASSET_VALUE, DEFAULT_CONTACT_NAME, DEFAULT_CONTRACT_DESCRIPTION,
    DEFAULT_CONTRACT_TITLE, DEFAULT_LICENSE_NAME, DEFAULT_SENDER_ADDRESS, EMPTY_VALUE_KEY,
    EXISTING_ASSET_KEY, EXISTING_ASSET_VALUE, GET_STATE_ERROR, MALFORMED_VALUE_KEY, STATE_BAD_KEY,
};

pub fn get_default_contract_metadata() -> ContractMetadata {
    ContractMetadata::new(
        DEFAULT_CONTRACT_TITLE,
        DEFAULT_CONTRACT_DESCRIPTION.to_string().to_some(),
        LicenseMetadata::new(DEFAULT_LICENSE_NAME, None).to_some(),
        ContactMetadata::new(DEFAULT_CONTACT_NAME, None, None).to_some(),
    )
}

/// A world state mirroring the scenarios each asset route must handle: a failing key, a missing
/// key, a key holding garbage, a key holding an empty value and a key holding a real asset.
pub fn configured_world_state() -> MockWorldState {
    MockWorldState::new()
        .with_failing_get(STATE_BAD_KEY, GET_STATE_ERROR)
        .with_value(MALFORMED_VALUE_KEY, "some value")
        .with_value(EMPTY_VALUE_KEY, Vec::<u8>::new())
        .with_value(
            EXISTING_ASSET_KEY,
            Asset::new(EXISTING_ASSET_VALUE)
                .to_world_state_bytes(EXISTING_ASSET_KEY)
                .expect("the existing asset should serialize"),
        )
}

pub struct InstArgs {
    pub info: MessageInfo,
    pub metadata: ContractMetadata,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            info: empty_mock_info(DEFAULT_SENDER_ADDRESS),
            metadata: get_default_contract_metadata(),
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        mock_env(),
        args.info,
        InitMsg {
            metadata: args.metadata,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

/// Creates the DEFAULT_ASSET_ID asset with DEFAULT_ASSET_VALUE through the execute entrypoint.
pub fn test_create_asset_success(deps: DepsMutC) -> Response {
    execute(
        deps,
        mock_env(),
        empty_mock_info(DEFAULT_SENDER_ADDRESS),
        ExecuteMsg::CreateAsset {
            asset_id: DEFAULT_ASSET_ID.to_string(),
            value: DEFAULT_ASSET_VALUE.to_string(),
        },
    )
    .expect("expected the default asset to be created")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn mock_info_with_funds<S: Into<String>>(sender: S, funds: &[Coin]) -> MessageInfo {
    mock_info(&sender.into(), funds)
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
