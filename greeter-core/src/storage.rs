// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Trait for top-level storage types, i.e. contract structs that own the host handle.
/// Top-level types are special in that their lifetimes track the entirety
/// of all the state changes throughout a contract invocation, so only they
/// may be dispatched to by a router.
pub trait TopLevelStorage {}
