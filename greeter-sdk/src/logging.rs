// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Affordances for the host's append-only log.
//!
//! ```
//! use greeter_sdk::{logging, testing::TestVM};
//!
//! let vm = TestVM::new();
//! logging::log(&vm, "checkpoint reached");
//! assert_eq!(vm.get_emitted_logs(), vec!["checkpoint reached"]);
//! ```

use greeter_core::Host;

/// Records a line of text permanently in the host's log.
/// Log lines are for audit and observability only; contracts never read them back.
pub fn log(vm: &dyn Host, text: impl AsRef<str>) {
    let text = text.as_ref();
    crate::console!("log: {text}");
    greeter_core::log(vm, text);
}
