/// This address should be used as the sender for all instantiation and execution calls
pub const DEFAULT_SENDER_ADDRESS: &str = "tp1dv7562fvlvf74904t222ze362m036ugtmg45ll";
/// The default asset created by test_create_asset_success
pub const DEFAULT_ASSET_ID: &str = "asset1";
/// The value held by the default asset
pub const DEFAULT_ASSET_VALUE: &str = "hello";
/// Metadata values used by the default InstArgs
pub const DEFAULT_CONTRACT_TITLE: &str = "asset store contract";
pub const DEFAULT_CONTRACT_DESCRIPTION: &str = "Manages string-valued assets in world state";
pub const DEFAULT_LICENSE_NAME: &str = "Apache-2.0";
pub const DEFAULT_CONTACT_NAME: &str = "Asset Store Maintainers";

// Keys configured in MockWorldState by configured_world_state

/// Any get for this key fails with GET_STATE_ERROR
pub const STATE_BAD_KEY: &str = "statebad";
/// The message produced by a get on STATE_BAD_KEY
pub const GET_STATE_ERROR: &str = "world state get error";
/// No value is stored for this key
pub const MISSING_KEY: &str = "missingkey";
/// Holds bytes that are not a serialized asset
pub const MALFORMED_VALUE_KEY: &str = "existingkey";
/// Holds a zero-length value
pub const EMPTY_VALUE_KEY: &str = "emptykey";
/// Holds a serialized asset with EXISTING_ASSET_VALUE
pub const EXISTING_ASSET_KEY: &str = "assetkey";
pub const EXISTING_ASSET_VALUE: &str = "set value";
