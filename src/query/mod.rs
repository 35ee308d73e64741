//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod query_asset;
pub mod query_asset_exists;
pub mod query_contract_metadata;
pub mod query_version;
