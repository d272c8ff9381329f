// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Defines host environment methods greeter contracts have access to.
pub mod host;
pub mod storage;

pub use host::*;
pub use storage::*;

/// Records a line of text in the host's permanent log.
pub fn log(vm: &dyn Host, text: impl AsRef<str>) {
    vm.log_utf8(text.as_ref());
}
