use crate::core::error::ContractError;
use crate::core::msg::MigrateMsg;
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

use super::validate_init_msg::collect_metadata_errors;

pub fn validate_migrate_msg(msg: &MigrateMsg) -> AssetResult<()> {
    match msg {
        MigrateMsg::ContractUpgrade {
            metadata: Some(metadata),
        } => {
            let invalid_fields = collect_metadata_errors(metadata);
            if !invalid_fields.is_empty() {
                return ContractError::InvalidMessageFields {
                    message_type: "MigrateMsg::ContractUpgrade".to_string(),
                    invalid_fields,
                }
                .to_err();
            }
            Ok(())
        }
        MigrateMsg::ContractUpgrade { metadata: None } => Ok(()),
    }
}
