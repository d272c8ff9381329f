// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Defaults used by the [`crate::TestVM`] for unit testing contracts.

/// Default sender account id used by the [`crate::TestVM`].
pub const DEFAULT_SENDER: &str = "alice.test";

/// Default block timestamp, in nanoseconds, used by the [`crate::TestVM`].
pub const DEFAULT_BLOCK_TIMESTAMP: u64 = 0;
