use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// The single record type tracked by the contract.  The identifier of an asset is its world state
/// key and is never stored inside the record itself.
///
/// Stored in the world state as `{"value":"<string>"}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Asset {
    /// The string contents of the asset.  A stored object without this field, or with a null in
    /// it, decodes to an empty value.  The capitalized `Value` key is accepted on decode.
    #[serde(
        default,
        alias = "Value",
        deserialize_with = "deserialize_nullable_value"
    )]
    pub value: String,
}

fn deserialize_nullable_value<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Asset {
    /// Constructs a new instance of this struct.
    ///
    /// # Parameters
    ///
    /// * `value` The string contents of the asset.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Asset {
            value: value.into(),
        }
    }

    /// Serializes this asset to the JSON bytes written to the world state.
    ///
    /// # Parameters
    ///
    /// * `asset_id` The key the asset is destined for.  Only used to describe a failure.
    pub fn to_world_state_bytes(&self, asset_id: &str) -> AssetResult<Vec<u8>> {
        serde_json_wasm::to_vec(self).map_err(|e| ContractError::AssetEncode {
            asset_id: asset_id.to_string(),
            explanation: e.to_string(),
        })
    }

    /// Decodes an asset from raw world state bytes.  The cause of a decoding failure is
    /// intentionally dropped in favor of a fixed [AssetDecode](crate::core::error::ContractError::AssetDecode)
    /// error.
    ///
    /// # Parameters
    ///
    /// * `bytes` The raw value stored under an asset's key.
    pub fn from_world_state_bytes(bytes: &[u8]) -> AssetResult<Self> {
        match serde_json_wasm::from_slice::<Asset>(bytes) {
            Ok(asset) => asset.to_ok(),
            Err(_) => ContractError::AssetDecode.to_err(),
        }
    }
}
