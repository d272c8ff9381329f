// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The greeter SDK.
//!
//! The greeter SDK supplies everything a string-keyed contract needs between its business logic
//! and the host that runs it:
//! - A cloneable [`host::VM`] handle through which all host capabilities are reached.
//! - String-keyed storage accessors with per-collection key suffixes.
//! - JSON argument decoding, return encoding and a name-based [`abi::Router`].
//! - A permanent host [`logging::log`] and a debug-only [`console!`] macro.
//!
//! Contracts reach the host through [`greeter_core::HostAccessor`], which keeps them testable
//! against the in-memory VM re-exported as [`testing`] with the `test-vm` feature.

#![warn(missing_docs)]

pub use greeter_core;
pub use serde;
pub use serde_json;

#[macro_use]
pub mod debug;

pub mod abi;
pub mod error;
pub mod host;
pub mod logging;
pub mod methods;
pub mod prelude;
pub mod storage;

#[cfg(feature = "test-vm")]
pub mod testing;

pub use error::{Error, Result};

/// Represents a contract invocation outcome: output bytes on success, revert bytes on failure.
pub type CallResult = core::result::Result<Vec<u8>, Vec<u8>>;
