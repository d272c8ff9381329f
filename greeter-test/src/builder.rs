// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::collections::HashMap;

use crate::{state::VMState, TestVM};

/// Configures a [`TestVM`] before a test starts.
///
/// ```
/// use greeter_test::TestVMBuilder;
///
/// let vm = TestVMBuilder::new()
///     .sender("bob.test")
///     .block_timestamp(1_609_459_200_000_000_000)
///     .storage_entry("bob.test", "hi")
///     .build();
/// assert_eq!(vm.get_storage("bob.test").as_deref(), Some("hi"));
/// ```
#[derive(Default)]
pub struct TestVMBuilder {
    sender: Option<String>,
    block_timestamp: Option<u64>,
    storage: Option<HashMap<String, String>>,
}

impl TestVMBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
    pub fn block_timestamp(mut self, timestamp: u64) -> Self {
        self.block_timestamp = Some(timestamp);
        self
    }
    pub fn storage(mut self, storage: HashMap<String, String>) -> Self {
        self.storage = Some(storage);
        self
    }
    pub fn storage_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.storage
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
    pub fn build(self) -> TestVM {
        let mut state = VMState::default();
        if let Some(sender) = self.sender {
            state.msg_sender = sender;
        }
        if let Some(timestamp) = self.block_timestamp {
            state.block_timestamp = timestamp;
        }
        state.storage = self.storage.unwrap_or_default();
        TestVM::from(state)
    }
}
