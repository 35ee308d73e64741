//! Structs persisted by the contract or returned from its queries.

/// The sole record managed by the contract.
pub mod asset;
/// Descriptive, non-functional information about the contract.
pub mod contract_metadata;
