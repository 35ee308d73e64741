use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use semver::Version;

use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stores the provided version info, replacing any existing value.
pub fn set_version_info(storage: &mut dyn Storage, version_info: &ContractVersion) -> AssetResult<()> {
    set_contract_version(storage, &version_info.contract, &version_info.version)?.to_ok()
}

/// Fetches the version info stored by the last instantiation or migration.
pub fn get_version_info(storage: &dyn Storage) -> AssetResult<ContractVersion> {
    get_contract_version(storage)?.to_ok()
}

/// Stamps the version info derived from Cargo.toml into storage and returns it.
pub fn migrate_version_info(storage: &mut dyn Storage) -> AssetResult<ContractVersion> {
    let version_info = ContractVersion {
        contract: CONTRACT_NAME.to_string(),
        version: CONTRACT_VERSION.to_string(),
    };
    set_version_info(storage, &version_info)?;
    version_info.to_ok()
}

pub fn parse_sem_ver(version_info: &ContractVersion) -> AssetResult<Version> {
    version_info.version.parse::<Version>()?.to_ok()
}
