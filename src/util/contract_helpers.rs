use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

use cosmwasm_std::MessageInfo;

/// Ensures that the info provided to the route does not include any funds.  The contract has no
/// use for coin, so any funds sent along would be stranded in the contract's account.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use asset_store_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("sender", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> AssetResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}
