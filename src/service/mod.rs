//! Complex structs used to perform intensive operations in a centralized location.

/// The transaction logic for creating, reading, updating and deleting assets.
pub mod asset_store;
/// Defines the traits through which the contract reaches the world state, along with the
/// implementations backed by cosmwasm storage.
pub mod world_state;
