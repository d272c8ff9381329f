// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Defines the traits a host environment implements so contracts can reach persistent storage,
//! the current message, the current block and the transaction log. Splitting the host into
//! capability traits lets contracts be unit tested against a mock implementation such as
//! `greeter_test::TestVM`.

use dyn_clone::DynClone;

/// The host trait defines methods a contract can use to interact
/// with a host environment. It is the union of all capability traits.
pub trait Host: StorageAccess + MessageAccess + BlockAccess + LogAccess + DynClone {}

dyn_clone::clone_trait_object!(Host);

/// Defines a trait that allows a contract to access its host safely.
pub trait HostAccessor {
    /// Provides access to the parametrized host of a contract, giving access
    /// to all the desired hostios from the user.
    fn vm(&self) -> &dyn Host;
}

/// Provides access to the persistent key-value store of the contract.
///
/// Keys and values are UTF-8 strings. Writes take `&self`: the host owns the store and
/// applies every write of a call atomically once the call completes.
pub trait StorageAccess {
    /// Reads the value stored under `key`, or `None` if nothing was ever written there.
    fn storage_read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn storage_write(&self, key: &str, value: &str);
}

/// Provides access to the message that invoked the contract.
pub trait MessageAccess {
    /// Gets the account id of the caller of the current call.
    fn msg_sender(&self) -> String;
}

/// Provides access to the block the current call executes in.
pub trait BlockAccess {
    /// Gets the timestamp of the current block, in nanoseconds since the Unix epoch.
    fn block_timestamp(&self) -> u64;
}

/// Provides access to the host's append-only log.
pub trait LogAccess {
    /// Appends a line of text to the log of the current call. Logs are permanently recorded
    /// by the host and never read back by the contract.
    fn log_utf8(&self, text: &str);
}
