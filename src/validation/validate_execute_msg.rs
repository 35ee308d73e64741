use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

/// Validates the integrity of an intercepted [ExecuteMsg](crate::core::msg::ExecuteMsg).  Asset
/// ids may contain any characters, but the world state does not accept an empty key.
///
/// # Parameters
///
/// * `msg` The execute message to validate.
pub fn validate_execute_msg(msg: &ExecuteMsg) -> AssetResult<()> {
    match msg {
        ExecuteMsg::CreateAsset { asset_id, .. } => {
            validate_asset_id("ExecuteMsg::CreateAsset", asset_id)
        }
        ExecuteMsg::UpdateAsset { asset_id, .. } => {
            validate_asset_id("ExecuteMsg::UpdateAsset", asset_id)
        }
        ExecuteMsg::DeleteAsset { asset_id } => {
            validate_asset_id("ExecuteMsg::DeleteAsset", asset_id)
        }
    }
}

/// Shared by execute and query validation.  Produces an [InvalidMessageFields](crate::core::error::ContractError::InvalidMessageFields)
/// error when the asset id is empty.
pub fn validate_asset_id(message_type: &str, asset_id: &str) -> AssetResult<()> {
    if asset_id.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.to_string(),
            invalid_fields: vec!["asset_id: must not be blank".to_string()],
        }
        .to_err()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::msg::ExecuteMsg;

    use super::validate_execute_msg;

    #[test]
    fn test_valid_execute_msgs() {
        validate_execute_msg(&ExecuteMsg::CreateAsset {
            asset_id: "asset1".to_string(),
            value: "".to_string(),
        })
        .expect("an empty value should be accepted");
        validate_execute_msg(&ExecuteMsg::UpdateAsset {
            asset_id: " spaced id ".to_string(),
            value: "value".to_string(),
        })
        .expect("asset ids are not format checked");
        validate_execute_msg(&ExecuteMsg::DeleteAsset {
            asset_id: "asset1".to_string(),
        })
        .expect("a delete with an id should be valid");
    }

    #[test]
    fn test_empty_asset_id_is_rejected() {
        let messages = vec![
            (
                "ExecuteMsg::CreateAsset",
                ExecuteMsg::CreateAsset {
                    asset_id: "".to_string(),
                    value: "value".to_string(),
                },
            ),
            (
                "ExecuteMsg::UpdateAsset",
                ExecuteMsg::UpdateAsset {
                    asset_id: "".to_string(),
                    value: "value".to_string(),
                },
            ),
            (
                "ExecuteMsg::DeleteAsset",
                ExecuteMsg::DeleteAsset {
                    asset_id: "".to_string(),
                },
            ),
        ];
        for (expected_type, msg) in messages {
            match validate_execute_msg(&msg).expect_err("an empty asset id should be rejected") {
                ContractError::InvalidMessageFields {
                    message_type,
                    invalid_fields,
                } => {
                    assert_eq!(expected_type, message_type);
                    assert_eq!(
                        vec!["asset_id: must not be blank".to_string()],
                        invalid_fields,
                    );
                }
                error => panic!("unexpected error encountered: {:?}", error),
            }
        }
    }
}
