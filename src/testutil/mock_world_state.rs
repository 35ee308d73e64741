use std::collections::HashMap;

use crate::core::error::ContractError;
use crate::service::world_state::{WorldState, WorldStateReader};
use crate::util::aliases::AssetResult;
use result_extensions::ResultExtensions;

/// A record of each mutation requested of a [MockWorldState], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateCall {
    Put { key: String, value: Vec<u8> },
    Delete { key: String },
}

/// An in-memory world state that allows failures to be injected per operation.  Unlike cosmwasm's
/// mock storage, this allows zero-length values to be stored.
#[derive(Default)]
pub struct MockWorldState {
    values: HashMap<String, Vec<u8>>,
    get_failures: HashMap<String, String>,
    put_failure: Option<String>,
    delete_failure: Option<String>,
    write_calls: Vec<StateCall>,
}
impl MockWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value.  Seeding is not recorded as a write call.
    pub fn with_value<S: Into<String>, B: Into<Vec<u8>>>(mut self, key: S, value: B) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Causes every get for the key to fail with the given message.
    pub fn with_failing_get<S1: Into<String>, S2: Into<String>>(
        mut self,
        key: S1,
        message: S2,
    ) -> Self {
        self.get_failures.insert(key.into(), message.into());
        self
    }

    /// Causes every put to fail with the given message.
    pub fn with_failing_put<S: Into<String>>(mut self, message: S) -> Self {
        self.put_failure = Some(message.into());
        self
    }

    /// Causes every delete to fail with the given message.
    pub fn with_failing_delete<S: Into<String>>(mut self, message: S) -> Self {
        self.delete_failure = Some(message.into());
        self
    }

    pub fn write_calls(&self) -> Vec<StateCall> {
        self.write_calls.clone()
    }

    pub fn stored_value(&self, key: &str) -> Option<Vec<u8>> {
        self.values.get(key).cloned()
    }
}
impl WorldStateReader for MockWorldState {
    fn get_state(&self, key: &str) -> AssetResult<Option<Vec<u8>>> {
        if let Some(message) = self.get_failures.get(key) {
            return ContractError::world_state_access(message).to_err();
        }
        self.values.get(key).cloned().to_ok()
    }
}
impl WorldState for MockWorldState {
    fn put_state(&mut self, key: &str, value: &[u8]) -> AssetResult<()> {
        if let Some(message) = &self.put_failure {
            return ContractError::world_state_access(message).to_err();
        }
        self.write_calls.push(StateCall::Put {
            key: key.to_string(),
            value: value.to_vec(),
        });
        self.values.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> AssetResult<()> {
        if let Some(message) = &self.delete_failure {
            return ContractError::world_state_access(message).to_err();
        }
        self.write_calls.push(StateCall::Delete {
            key: key.to_string(),
        });
        self.values.remove(key);
        Ok(())
    }
}
