// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Defines a test VM environment for unit testing greeter contracts.
//! Allows for mocking of all host methods defined on the [`greeter_core::host::Host`] trait:
//! storage, the message sender, the block timestamp and the log.
//!
//! ```ignore
//! use greeter_sdk::prelude::*;
//!
//! pub struct MyContract {
//!     vm: VM,
//! }
//!
//! impl MyContract {
//!     pub fn whoami(&self) -> String {
//!         self.vm().msg_sender()
//!     }
//! }
//!
//! #[cfg(test)]
//! mod test {
//!     use super::*;
//!     use greeter_test::*;
//!
//!     #[test]
//!     fn test_my_contract() {
//!         let vm = TestVM::default();
//!         let contract = MyContract::from(&vm);
//!
//!         vm.set_sender("bob.test");
//!         assert_eq!(contract.whoami(), "bob.test");
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

pub use greeter_core::*;

use crate::state::VMState;

/// A mock implementation of the [`greeter_core::host::Host`] trait for unit testing contracts.
///
/// Clones share the same underlying state, so a test can keep a handle to the VM it gave
/// to a contract and inspect or change it between calls.
///
/// # Examples
/// ```
/// use greeter_test::TestVM;
///
/// let vm = TestVM::new();
///
/// // Configure transaction state.
/// vm.set_sender("bob.test");
/// vm.set_block_timestamp(1_609_459_200_000_000_000);
///
/// // Seed storage.
/// vm.set_storage("bob.test", "howdy");
///
/// // Get emitted logs after execution.
/// let logs = vm.get_emitted_logs();
/// assert!(logs.is_empty());
/// ```
#[derive(Clone)]
pub struct TestVM {
    state: Rc<RefCell<VMState>>,
}

impl Default for TestVM {
    fn default() -> Self {
        Self::new()
    }
}

impl From<VMState> for TestVM {
    fn from(state: VMState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }
}

impl TestVM {
    /// Creates a new TestVM instance.
    ///
    /// # Examples
    /// ```
    /// use greeter_test::TestVM;
    /// let vm = TestVM::new();
    /// ```
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(VMState::default())),
        }
    }

    /// Returns a cloned snapshot of the internal test VM state,
    /// which contains storage, the caller, the block timestamp and emitted logs
    /// in simple data structures for inspection.
    pub fn snapshot(&self) -> VMState {
        self.state.borrow().clone()
    }

    /// Sets the current block timestamp, in nanoseconds.
    ///
    /// # Examples
    /// ```
    /// # use greeter_test::TestVM;
    /// let vm = TestVM::new();
    /// vm.set_block_timestamp(1_677_654_321_000_000_000);
    /// ```
    pub fn set_block_timestamp(&self, timestamp: u64) {
        self.state.borrow_mut().block_timestamp = timestamp;
    }

    /// Sets the transaction sender.
    pub fn set_sender(&self, sender: impl Into<String>) {
        self.state.borrow_mut().msg_sender = sender.into();
    }

    /// Gets a storage value by key.
    ///
    /// # Examples
    /// ```
    /// # use greeter_test::TestVM;
    /// let vm = TestVM::new();
    /// assert_eq!(vm.get_storage("nobody.test"), None);
    /// ```
    pub fn get_storage(&self, key: &str) -> Option<String> {
        self.state.borrow().storage.get(key).cloned()
    }

    /// Sets a storage value.
    pub fn set_storage(&self, key: impl Into<String>, value: impl Into<String>) {
        self.state
            .borrow_mut()
            .storage
            .insert(key.into(), value.into());
    }

    /// Clears all storage.
    pub fn clear_storage(&self) {
        self.state.borrow_mut().storage.clear();
    }

    /// Gets all emitted log lines, oldest first.
    pub fn get_emitted_logs(&self) -> Vec<String> {
        self.state.borrow().emitted_logs.clone()
    }

    /// Clears all logs.
    pub fn clear_logs(&self) {
        self.state.borrow_mut().emitted_logs.clear();
    }
}

impl Host for TestVM {}

impl StorageAccess for TestVM {
    fn storage_read(&self, key: &str) -> Option<String> {
        self.get_storage(key)
    }

    fn storage_write(&self, key: &str, value: &str) {
        self.set_storage(key, value);
    }
}

impl MessageAccess for TestVM {
    fn msg_sender(&self) -> String {
        self.state.borrow().msg_sender.clone()
    }
}

impl BlockAccess for TestVM {
    fn block_timestamp(&self) -> u64 {
        self.state.borrow().block_timestamp
    }
}

impl LogAccess for TestVM {
    fn log_utf8(&self, text: &str) {
        self.state
            .borrow_mut()
            .emitted_logs
            .push(text.to_owned());
    }
}
