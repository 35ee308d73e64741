//! Shared helpers for unit tests.  Exposed to other crates with the `enable-test-utils` feature.

pub mod mock_world_state;
pub mod test_constants;
pub mod test_utilities;
