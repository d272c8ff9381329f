// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! String-keyed storage types and persistent storage access.
//!
//! The host exposes a single flat namespace of UTF-8 keys and values. Contracts carve it into
//! collections by giving each [`StorageMap`] a key suffix: an entry for key `k` in a map with
//! suffix `s` lives at `k` followed by `s`. A map with an empty suffix stores entries under the
//! bare key.
//!
//! Two maps must not share a suffix, or their entries alias each other. A map with an empty
//! suffix overlaps every suffixed map: its entry for `k` followed by `s` is the same key as the
//! entry for `k` in the map with suffix `s`.

use greeter_core::{Host, HostAccessor, StorageAccess};

use crate::host::VM;

/// Accessor for a single storage-backed string.
pub struct StorageString {
    slot: String,
    host: VM,
}

impl StorageString {
    /// Creates an accessor for the value stored at `slot`.
    pub fn new(slot: impl Into<String>, host: VM) -> Self {
        Self {
            slot: slot.into(),
            host,
        }
    }

    /// The full key this accessor reads and writes.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Gets the stored string, or `None` if it was never written.
    pub fn get_string(&self) -> Option<String> {
        self.host.storage_read(&self.slot)
    }

    /// Gets the stored string, or `default` if it was never written.
    pub fn get_or(&self, default: &str) -> String {
        self.get_string().unwrap_or_else(|| default.to_owned())
    }

    /// Overwrites the stored string.
    pub fn set_str(&mut self, text: impl AsRef<str>) {
        self.host.storage_write(&self.slot, text.as_ref());
    }
}

impl HostAccessor for StorageString {
    fn vm(&self) -> &dyn Host {
        &self.host
    }
}

/// Accessor for a storage-backed map from account-like string keys to strings.
pub struct StorageMap {
    suffix: &'static str,
    host: VM,
}

impl StorageMap {
    /// Creates a map whose entries are stored under `key` followed by `suffix`.
    pub fn new(suffix: &'static str, host: VM) -> Self {
        Self { suffix, host }
    }

    /// Returns the full storage key for the entry at `key`.
    pub fn slot(&self, key: &str) -> String {
        format!("{key}{}", self.suffix)
    }

    /// Gets an accessor to the element at the given key.
    pub fn getter(&self, key: &str) -> StorageString {
        StorageString::new(self.slot(key), self.host.clone())
    }

    /// Gets a mutable accessor to the element at the given key.
    /// Borrowing `&mut self` keeps writes flowing through the owning contract.
    pub fn setter(&mut self, key: &str) -> StorageString {
        StorageString::new(self.slot(key), self.host.clone())
    }

    /// Gets the element at the given key, or `None` if none is there.
    pub fn get(&self, key: &str) -> Option<String> {
        self.getter(key).get_string()
    }

    /// Gets the element at the given key, or `default` if none is there.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.getter(key).get_or(default)
    }

    /// Sets the element at a given key, overwriting what may have been there.
    pub fn insert(&mut self, key: &str, value: impl AsRef<str>) {
        self.setter(key).set_str(value);
    }
}

impl HostAccessor for StorageMap {
    fn vm(&self) -> &dyn Host {
        &self.host
    }
}

impl<T> From<&T> for StorageMap
where
    T: Host + Clone + 'static,
{
    fn from(host: &T) -> Self {
        Self::new("", VM::from(host))
    }
}
