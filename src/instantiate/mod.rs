//! Contains the functionality used in the [contract file](crate::contract) to perform a contract instantiation.

/// The main entrypoint function for running a code instantiation.  Referred to in the [contract file](crate::contract).
pub mod init_contract;
