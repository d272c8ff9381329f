// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Common imports for greeter contracts.
//!
//! Included are the host capability traits, storage types and routing traits.
//!
//! ```
//! use greeter_sdk::prelude::*;
//! ```

pub use crate::abi::Router;
pub use crate::console;
pub use crate::host::VM;
pub use crate::storage::{StorageMap, StorageString};
pub use greeter_core::{
    BlockAccess, Host, HostAccessor, LogAccess, MessageAccess, StorageAccess, TopLevelStorage,
};
