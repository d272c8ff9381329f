// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A contract with two simple, symmetric methods:
//!
//! 1. `setGreeting` accepts a greeting, such as "howdy", and records it for the account
//!    that sent the call, together with the date of the update.
//! 2. `getGreeting` accepts an account id and returns the greeting saved for it,
//!    defaulting to "Hello".
//!
//! `getUpdateDate` returns the date of an account's last update, or "No custom greeting."

use greeter_sdk::{
    abi,
    logging,
    methods::{Arg, Method, Purity},
    prelude::*,
    CallResult, Result,
};
use serde::Deserialize;

pub mod date;

pub use date::UpdateDate;

/// Greeting returned for accounts that never set one.
pub const DEFAULT_MESSAGE: &str = "Hello";

/// Update date returned for accounts that never set a greeting.
pub const DEFAULT_UPDATE_DATE: &str = "No custom greeting.";

/// Suffix appended to an account id to form the key of its last update date.
pub const LAST_UPDATED_SUFFIX: &str = "_last_updated";

/// Methods exposed by [`Greeter`]'s router.
pub const METHODS: &[Method] = &[
    Method {
        name: "getGreeting",
        purity: Purity::View,
        args: &[ACCOUNT_ID_ARG],
        returns: Some("string"),
    },
    Method {
        name: "getUpdateDate",
        purity: Purity::View,
        args: &[ACCOUNT_ID_ARG],
        returns: Some("string"),
    },
    Method {
        name: "setGreeting",
        purity: Purity::Write,
        args: &[Arg {
            name: "message",
            ty: "string",
        }],
        returns: None,
    },
];

const ACCOUNT_ID_ARG: Arg = Arg {
    name: "accountId",
    ty: "string",
};

/// Per-account greetings and the date each was last changed.
///
/// Both entries of an account are written together by [`Greeter::set_greeting`]; they are
/// never deleted.
pub struct Greeter {
    /// Greeting per account id, stored under the bare account id.
    greetings: StorageMap,
    /// Rendered [`UpdateDate`] per account id, stored under `<accountId>_last_updated`.
    last_updated: StorageMap,
    vm: VM,
}

impl TopLevelStorage for Greeter {}

impl HostAccessor for Greeter {
    fn vm(&self) -> &dyn Host {
        &self.vm
    }
}

impl<T> From<&T> for Greeter
where
    T: Host + Clone + 'static,
{
    fn from(host: &T) -> Self {
        Self::new(VM::from(host))
    }
}

impl Greeter {
    pub fn new(vm: VM) -> Self {
        Self {
            greetings: StorageMap::new("", vm.clone()),
            last_updated: StorageMap::new(LAST_UPDATED_SUFFIX, vm.clone()),
            vm,
        }
    }

    /// Returns the greeting saved for `account_id`, or [`DEFAULT_MESSAGE`].
    pub fn get_greeting(&self, account_id: &str) -> String {
        self.greetings.get_or(account_id, DEFAULT_MESSAGE)
    }

    /// Returns when `account_id` last set its greeting, or [`DEFAULT_UPDATE_DATE`].
    pub fn get_update_date(&self, account_id: &str) -> String {
        self.last_updated.get_or(account_id, DEFAULT_UPDATE_DATE)
    }

    /// Records `message` as the greeting of the caller, stamped with the current block time.
    pub fn set_greeting(&mut self, message: &str) {
        let account_id = self.vm().msg_sender();
        let timestamp = self.vm().block_timestamp();
        self.save_greeting(&account_id, message, timestamp);
    }

    fn save_greeting(&mut self, account_id: &str, message: &str, timestamp: u64) {
        logging::log(
            self.vm(),
            format!(
                "Saving greeting \"{message}\" with timestamp: {timestamp} for account \"{account_id}\""
            ),
        );
        self.greetings.insert(account_id, message);
        self.last_updated
            .insert(account_id, UpdateDate::from_nanos(timestamp).to_string());
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountArgs {
    account_id: String,
}

#[derive(Deserialize)]
struct SetGreetingArgs {
    message: String,
}

impl Router for Greeter {
    fn route(&mut self, method: &str, input: &[u8]) -> Option<Result<Vec<u8>>> {
        console!("routing {method}");
        let output = match method {
            "getGreeting" => abi::decode_args::<AccountArgs>(method, input)
                .and_then(|args| abi::encode_return(&self.get_greeting(&args.account_id))),
            "getUpdateDate" => abi::decode_args::<AccountArgs>(method, input)
                .and_then(|args| abi::encode_return(&self.get_update_date(&args.account_id))),
            "setGreeting" => {
                abi::decode_args::<SetGreetingArgs>(method, input).map(|args| {
                    self.set_greeting(&args.message);
                    Vec::new()
                })
            }
            _ => return None,
        };
        Some(output)
    }
}

#[cfg(feature = "export-abi")]
impl abi::GenerateAbi for Greeter {
    const NAME: &'static str = "Greeter";
    const METHODS: &'static [Method] = METHODS;
}

/// Runs one call against a fresh [`Greeter`] bound to `host`.
pub fn user_entrypoint(host: VM, method: &str, input: &[u8]) -> CallResult {
    let mut greeter = Greeter::new(host);
    abi::router_entrypoint(&mut greeter, method, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter_sdk::testing::{constants::DEFAULT_SENDER, *};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let vm = TestVM::new();
        let contract = Greeter::from(&vm);

        assert_eq!(contract.get_greeting("bob"), "Hello");
        assert_eq!(contract.get_update_date("bob"), "No custom greeting.");
        assert!(vm.get_emitted_logs().is_empty());
    }

    #[test]
    fn test_save_greeting_with_explicit_context() {
        let vm = TestVM::new();
        let mut contract = Greeter::from(&vm);

        contract.save_greeting("alice", "howdy", 1_609_459_200_000_000_000);

        assert_eq!(vm.get_storage("alice").as_deref(), Some("howdy"));
        assert_eq!(
            vm.get_storage("alice_last_updated").as_deref(),
            Some("Fri Jan 01 2021 00:00:00 GMT+0000 (Coordinated Universal Time)")
        );
        assert_eq!(
            vm.get_emitted_logs(),
            vec![
                "Saving greeting \"howdy\" with timestamp: 1609459200000000000 for account \"alice\""
            ]
        );
        // the host's own caller is irrelevant to the core write
        assert_eq!(contract.get_greeting(DEFAULT_SENDER), "Hello");
    }

    #[test]
    fn test_set_greeting_uses_host_context() {
        let vm = TestVMBuilder::new()
            .sender("alice")
            .block_timestamp(1_609_459_200_000_000_000)
            .build();
        let mut contract = Greeter::from(&vm);

        contract.set_greeting("howdy");

        assert_eq!(contract.get_greeting("alice"), "howdy");
        assert_eq!(
            contract.get_update_date("alice"),
            "Fri Jan 01 2021 00:00:00 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_stored_greeting_is_read_back_verbatim() {
        let vm = TestVMBuilder::new()
            .storage_entry("carol", "")
            .storage_entry("carol_last_updated", "sometime")
            .build();
        let contract = Greeter::from(&vm);

        assert_eq!(contract.get_greeting("carol"), "");
        assert_eq!(contract.get_update_date("carol"), "sometime");
    }

    #[test]
    fn test_route_unknown_method() {
        let vm = TestVM::new();
        let mut contract = Greeter::from(&vm);
        assert!(contract.route("deleteGreeting", b"{}").is_none());
    }

    #[test]
    fn test_every_exported_method_routes() {
        let vm = TestVM::new();
        let mut contract = Greeter::from(&vm);
        for method in METHODS {
            let args: serde_json::Map<String, serde_json::Value> = method
                .args
                .iter()
                .map(|arg| (arg.name.to_owned(), serde_json::Value::from("x")))
                .collect();
            let input = serde_json::to_vec(&args).unwrap();
            let output = contract.route(method.name, &input);
            assert!(
                matches!(output, Some(Ok(_))),
                "{} did not route",
                method.name
            );
        }
    }
}
