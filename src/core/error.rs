use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("the asset {asset_id} already exists")]
    AssetAlreadyExists { asset_id: String },

    #[error("the asset {asset_id} does not exist")]
    AssetNotFound { asset_id: String },

    #[error("could not unmarshal world state data to asset type")]
    AssetDecode,

    #[error("could not marshal asset [{asset_id}] for world state: {explanation}")]
    AssetEncode {
        asset_id: String,
        explanation: String,
    },

    /// Raised by a world state implementation when a raw get, put, or delete fails.  Emitted
    /// unchanged from existence checks and writes.
    #[error("{explanation}")]
    WorldStateAccess { explanation: String },

    /// A failed existence check encountered before a create, read, update, or delete.
    #[error("could not read from world state: {explanation}")]
    WorldStateRead { explanation: String },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },
}
impl ContractError {
    pub fn world_state_access<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::WorldStateAccess {
            explanation: explanation.into(),
        }
    }

    /// Wraps any error produced while checking for an asset's existence.
    pub fn world_state_read(cause: ContractError) -> ContractError {
        ContractError::WorldStateRead {
            explanation: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ContractError;

    #[test]
    fn test_asset_error_messages() {
        assert_eq!(
            "the asset asset1 already exists",
            ContractError::AssetAlreadyExists {
                asset_id: "asset1".to_string()
            }
            .to_string(),
        );
        assert_eq!(
            "the asset asset1 does not exist",
            ContractError::AssetNotFound {
                asset_id: "asset1".to_string()
            }
            .to_string(),
        );
        assert_eq!(
            "could not unmarshal world state data to asset type",
            ContractError::AssetDecode.to_string(),
        );
    }

    #[test]
    fn test_world_state_read_wraps_inner_message() {
        let error = ContractError::world_state_read(ContractError::world_state_access(
            "world state get error",
        ));
        assert_eq!(
            "could not read from world state: world state get error",
            error.to_string(),
            "the inner error message should follow the fixed prefix",
        );
    }
}
