//! Functionality used to ensure the logical integrity of received external values.

/// Validates the integrity of an intercepted [ExecuteMsg](crate::core::msg::ExecuteMsg) variant.
pub mod validate_execute_msg;
/// Validates the integrity of an intercepted [InitMsg](crate::core::msg::InitMsg) and its
/// [ContractMetadata](crate::core::types::contract_metadata::ContractMetadata).
pub mod validate_init_msg;
/// Validates the integrity of an intercepted [MigrateMsg](crate::core::msg::MigrateMsg).
pub mod validate_migrate_msg;
/// Validates the integrity of an intercepted [QueryMsg](crate::core::msg::QueryMsg) variant.
pub mod validate_query_msg;
