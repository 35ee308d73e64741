use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::contract_metadata::ContractMetadata;
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

/// Validates the integrity of an intercepted [InitMsg](crate::core::msg::InitMsg).
///
/// # Parameters
///
/// * `msg` The init message to validate.
pub fn validate_init_msg(msg: &InitMsg) -> AssetResult<()> {
    let invalid_fields = collect_metadata_errors(&msg.metadata);
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "InitMsg".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Produces a description of each blank required field in the metadata.
pub fn collect_metadata_errors(metadata: &ContractMetadata) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if metadata.title.trim().is_empty() {
        invalid_fields.push("metadata.title: must not be blank".to_string());
    }
    if let Some(license) = &metadata.license {
        if license.name.trim().is_empty() {
            invalid_fields.push("metadata.license.name: must not be blank".to_string());
        }
    }
    if let Some(contact) = &metadata.contact {
        if contact.name.trim().is_empty() {
            invalid_fields.push("metadata.contact.name: must not be blank".to_string());
        }
    }
    invalid_fields
}
