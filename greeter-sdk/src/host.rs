// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Defines a struct that provides contracts access to a host VM environment via the
//! [`HostAccessor`](greeter_core::HostAccessor) trait. The VM is injected upon initialization
//! of a contract, so the same contract code runs against a real host or a mock one.

use greeter_core::*;

/// Provides contracts access to a host VM environment.
pub struct VM {
    /// A host object that provides access to the execution environment.
    pub host: Box<dyn Host>,
}

impl Clone for VM {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
        }
    }
}

impl core::fmt::Debug for VM {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "VM")
    }
}

impl<T> From<&T> for VM
where
    T: Host + Clone + 'static,
{
    fn from(host: &T) -> Self {
        Self {
            host: Box::new(host.clone()),
        }
    }
}

impl Host for VM {}

impl StorageAccess for VM {
    #[inline]
    fn storage_read(&self, key: &str) -> Option<String> {
        self.host.storage_read(key)
    }
    #[inline]
    fn storage_write(&self, key: &str, value: &str) {
        self.host.storage_write(key, value)
    }
}

impl MessageAccess for VM {
    #[inline]
    fn msg_sender(&self) -> String {
        self.host.msg_sender()
    }
}

impl BlockAccess for VM {
    #[inline]
    fn block_timestamp(&self) -> u64 {
        self.host.block_timestamp()
    }
}

impl LogAccess for VM {
    #[inline]
    fn log_utf8(&self, text: &str) {
        self.host.log_utf8(text)
    }
}
