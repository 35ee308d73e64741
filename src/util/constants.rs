// Execution output attributes.  All should be prefixed with "asset_" to make them easy to
// discern when observed in the event stream

/// Value = Event Type correlating to EventType enum into String values (String)
pub const ASSET_EVENT_TYPE_KEY: &str = "asset_event_type";
/// Value = The world state key of the asset being operated on (String)
pub const ASSET_ID_KEY: &str = "asset_id";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "asset_new_value";

//////////////////////
// Storage Keys     //
//////////////////////

/// Every asset record is written under this prefix so that asset ids can never overwrite the
/// contract's own bookkeeping values (version info, metadata).
pub const ASSET_KEY_PREFIX: &str = "asset_";
/// Storage key for the [ContractMetadata](crate::core::types::contract_metadata::ContractMetadata).
pub const CONTRACT_METADATA_KEY: &str = "contract_metadata";
