// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! This module defines the internal state of the test VM.

use std::collections::HashMap;

use crate::constants::{DEFAULT_BLOCK_TIMESTAMP, DEFAULT_SENDER};

/// Defines the internal state of the test VM for unit testing.
/// Internally, it tracks the key-value storage of the contract being tested,
/// the current caller and block, and the log lines emitted so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VMState {
    pub storage: HashMap<String, String>,
    pub msg_sender: String,
    pub block_timestamp: u64,
    pub emitted_logs: Vec<String>,
}

impl Default for VMState {
    fn default() -> Self {
        Self {
            storage: HashMap::new(),
            msg_sender: DEFAULT_SENDER.to_owned(),
            block_timestamp: DEFAULT_BLOCK_TIMESTAMP,
            emitted_logs: Vec::new(),
        }
    }
}
