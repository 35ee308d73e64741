use crate::core::msg::InitMsg;
use crate::core::state::set_contract_metadata;
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use result_extensions::ResultExtensions;
use cosmwasm_std::{Env, MessageInfo, Response};

/// The main functionality executed when the smart contract is first instantiated.  This stores the
/// contract's [ContractMetadata](crate::core::types::contract_metadata::ContractMetadata) and its
/// version info.  No assets exist after instantiation.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `_env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    set_contract_metadata(deps.storage, &msg.metadata)?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(EventAttributes::new(EventType::InstantiateContract))
        .to_ok()
}

#[cfg(test)]
mod tests {
    use crate::contract::instantiate;
    use crate::core::error::ContractError;
    use crate::core::msg::InitMsg;
    use crate::core::state::get_contract_metadata;
    use crate::core::types::contract_metadata::ContractMetadata;
    use crate::migrate::version_info::{get_version_info, CONTRACT_NAME, CONTRACT_VERSION};
    use crate::testutil::test_constants::DEFAULT_SENDER_ADDRESS;
    use crate::testutil::test_utilities::{
        get_default_contract_metadata, mock_info_with_funds, single_attribute_for_key,
        test_instantiate, test_instantiate_success, InstArgs,
    };
    use crate::util::constants::ASSET_EVENT_TYPE_KEY;
    use cosmwasm_std::testing::{mock_dependencies, mock_env};
    use cosmwasm_std::coin;

    #[test]
    fn test_valid_default_init() {
        let mut deps = mock_dependencies();
        let response = test_instantiate_success(deps.as_mut(), InstArgs::default());
        assert!(
            response.messages.is_empty(),
            "instantiation should not emit messages",
        );
        assert_eq!(
            1,
            response.attributes.len(),
            "only the event type attribute should be emitted",
        );
        assert_eq!(
            "instantiate_contract",
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
        );
        assert_eq!(
            get_default_contract_metadata(),
            get_contract_metadata(deps.as_ref().storage).expect("metadata should be stored"),
        );
        let version_info =
            get_version_info(deps.as_ref().storage).expect("version info should be stored");
        assert_eq!(CONTRACT_NAME, version_info.contract);
        assert_eq!(CONTRACT_VERSION, version_info.version);
    }

    #[test]
    fn test_init_rejects_funds() {
        let mut deps = mock_dependencies();
        let error = test_instantiate(
            deps.as_mut(),
            InstArgs {
                info: mock_info_with_funds(DEFAULT_SENDER_ADDRESS, &[coin(100, "nhash")]),
                ..InstArgs::default()
            },
        )
        .expect_err("instantiation with funds should fail");
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "unexpected error encountered: {:?}",
            error,
        );
    }

    #[test]
    fn test_init_rejects_invalid_metadata() {
        let mut deps = mock_dependencies();
        let error = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info_with_funds(DEFAULT_SENDER_ADDRESS, &[]),
            InitMsg {
                metadata: ContractMetadata::new("", None, None, None),
            },
        )
        .expect_err("a blank title should be rejected by the entrypoint");
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
        get_contract_metadata(deps.as_ref().storage)
            .expect_err("nothing should be stored after a rejected instantiation");
    }
}
