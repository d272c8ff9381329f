// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The greeter testing suite.
//!
//! The greeter-test crate makes it easy to unit test contracts built on the greeter SDK.
//! Included is an implementation of the [`greeter_core::host::Host`] trait that all
//! contracts have access to for interfacing with their host environment.
//!
//! The mock implementation, named [`crate::TestVM`], can be used to unit test contracts
//! in native Rust without a real chain. [`crate::TestVM`] keeps storage in memory, lets tests
//! pick the caller and block timestamp, and records every log line a contract emits.
//!
//! To be unit testable, contracts must access host methods through the
//! [`greeter_core::host::HostAccessor`] trait, which gives all contracts access to a `.vm()` method.

pub mod builder;
pub mod constants;
pub mod state;
pub mod vm;
pub use builder::*;
pub use vm::*;
