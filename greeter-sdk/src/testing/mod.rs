// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Testing utilities for greeter contracts, re-exported from the `greeter-test` crate.
//! Build contracts against a [`TestVM`] with `Contract::from(&vm)` and drive the VM's
//! sender, block timestamp and storage directly from the test.

pub use greeter_test::*;
