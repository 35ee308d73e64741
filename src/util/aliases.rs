use crate::core::error::ContractError;
use cosmwasm_std::{Deps, DepsMut, Response};

/// Shortens the lengthy response type for contract entrypoints.
pub type EntryPointResponse = Result<Response, ContractError>;

/// All contract pathways with exceptional code should return a result that has a contract error
/// as its resulting error type.
pub type AssetResult<T> = Result<T, ContractError>;

/// Read-only cosmwasm dependencies, as received by the [query](crate::contract::query) entrypoint.
pub type DepsC<'a> = Deps<'a>;

/// Mutable cosmwasm dependencies, as received by the mutating entrypoints.
pub type DepsMutC<'a> = DepsMut<'a>;
