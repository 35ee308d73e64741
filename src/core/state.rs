use crate::core::types::contract_metadata::ContractMetadata;
use crate::util::aliases::AssetResult;
use crate::util::constants::{ASSET_KEY_PREFIX, CONTRACT_METADATA_KEY};
use result_extensions::ResultExtensions;
use cosmwasm_std::Storage;
use cw_storage_plus::Item;

const CONTRACT_METADATA: Item<ContractMetadata> = Item::new(CONTRACT_METADATA_KEY);

/// Stores the contract's descriptive metadata, overwriting any previous value.
pub fn set_contract_metadata(
    storage: &mut dyn Storage,
    metadata: &ContractMetadata,
) -> AssetResult<()> {
    CONTRACT_METADATA.save(storage, metadata)?.to_ok()
}

/// Loads the contract's descriptive metadata.  Fails if the contract was never instantiated.
pub fn get_contract_metadata(storage: &dyn Storage) -> AssetResult<ContractMetadata> {
    CONTRACT_METADATA.load(storage)?.to_ok()
}

/// Derives the raw contract storage key used to hold an asset's bytes.
pub fn get_asset_storage_key<S: AsRef<str>>(asset_id: S) -> Vec<u8> {
    format!("{}{}", ASSET_KEY_PREFIX, asset_id.as_ref())
        .as_bytes()
        .to_vec()
}
