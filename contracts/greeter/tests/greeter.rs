// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use greeter::{user_entrypoint, Greeter, DEFAULT_MESSAGE, DEFAULT_UPDATE_DATE};
use greeter_sdk::{host::VM, testing::*};
use pretty_assertions::assert_eq;

const NEW_YEAR_2021_NANOS: u64 = 1_609_459_200_000_000_000;
const NEW_YEAR_2021: &str = "Fri Jan 01 2021 00:00:00 GMT+0000 (Coordinated Universal Time)";

#[test]
fn test_unwritten_account_defaults() {
    let vm = TestVM::new();
    let contract = Greeter::from(&vm);

    assert_eq!(contract.get_greeting("bob"), DEFAULT_MESSAGE);
    assert_eq!(contract.get_update_date("bob"), DEFAULT_UPDATE_DATE);
    assert_eq!(contract.get_greeting(""), "Hello");
    assert_eq!(contract.get_update_date(""), "No custom greeting.");
}

#[test]
fn test_alice_says_howdy() {
    let vm = TestVM::new();
    vm.set_sender("alice");
    vm.set_block_timestamp(NEW_YEAR_2021_NANOS);
    let mut contract = Greeter::from(&vm);

    contract.set_greeting("howdy");

    assert_eq!(contract.get_greeting("alice"), "howdy");
    assert_eq!(contract.get_update_date("alice"), NEW_YEAR_2021);
    assert_eq!(
        vm.get_emitted_logs(),
        vec!["Saving greeting \"howdy\" with timestamp: 1609459200000000000 for account \"alice\""]
    );
}

#[test]
fn test_writes_both_keys_together() {
    let vm = TestVM::new();
    vm.set_sender("alice");
    vm.set_block_timestamp(NEW_YEAR_2021_NANOS);
    let mut contract = Greeter::from(&vm);

    contract.set_greeting("howdy");

    let storage = vm.snapshot().storage;
    assert_eq!(storage.len(), 2);
    assert_eq!(storage["alice"], "howdy");
    assert_eq!(storage["alice_last_updated"], NEW_YEAR_2021);
}

#[test]
fn test_overwrite_keeps_latest() {
    let vm = TestVM::new();
    vm.set_sender("alice");
    let mut contract = Greeter::from(&vm);

    vm.set_block_timestamp(0);
    contract.set_greeting("first");
    vm.set_block_timestamp(NEW_YEAR_2021_NANOS);
    contract.set_greeting("second");

    assert_eq!(contract.get_greeting("alice"), "second");
    assert_eq!(contract.get_update_date("alice"), NEW_YEAR_2021);
    assert_eq!(vm.get_emitted_logs().len(), 2);
}

#[test]
fn test_same_call_twice_is_idempotent() {
    let vm = TestVM::new();
    vm.set_sender("alice");
    vm.set_block_timestamp(NEW_YEAR_2021_NANOS);
    let mut contract = Greeter::from(&vm);

    contract.set_greeting("howdy");
    let once = vm.snapshot().storage;
    contract.set_greeting("howdy");
    let twice = vm.snapshot().storage;

    assert_eq!(once, twice);
}

#[test]
fn test_accounts_are_isolated() {
    let vm = TestVM::new();
    let mut contract = Greeter::from(&vm);

    vm.set_sender("bob");
    vm.set_block_timestamp(0);
    contract.set_greeting("yo");

    vm.set_sender("alice");
    vm.set_block_timestamp(NEW_YEAR_2021_NANOS);
    contract.set_greeting("howdy");

    assert_eq!(contract.get_greeting("bob"), "yo");
    assert_eq!(
        contract.get_update_date("bob"),
        "Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)"
    );
    assert_eq!(contract.get_greeting("alice"), "howdy");
    assert_eq!(contract.get_greeting("carol"), "Hello");
}

#[test]
fn test_any_caller_reads_any_account() {
    let vm = TestVM::new();
    let mut contract = Greeter::from(&vm);

    vm.set_sender("alice");
    contract.set_greeting("howdy");

    vm.set_sender("mallory");
    assert_eq!(contract.get_greeting("alice"), "howdy");
}

#[test]
fn test_message_is_not_validated() {
    let vm = TestVM::new();
    vm.set_sender("alice");
    let mut contract = Greeter::from(&vm);

    let message = "quotes \" and\nnewlines, ünïcode 👋";
    contract.set_greeting(message);
    assert_eq!(contract.get_greeting("alice"), message);

    contract.set_greeting("");
    assert_eq!(contract.get_greeting("alice"), "");
}

#[test]
fn test_entrypoint_round_trip() {
    let vm = TestVMBuilder::new()
        .sender("alice")
        .block_timestamp(NEW_YEAR_2021_NANOS)
        .build();

    let before = user_entrypoint(VM::from(&vm), "getGreeting", br#"{"accountId":"alice"}"#);
    assert_eq!(before, Ok(br#""Hello""#.to_vec()));

    let set = user_entrypoint(VM::from(&vm), "setGreeting", br#"{"message":"howdy"}"#);
    assert_eq!(set, Ok(Vec::new()));

    let greeting = user_entrypoint(VM::from(&vm), "getGreeting", br#"{"accountId":"alice"}"#);
    assert_eq!(greeting, Ok(br#""howdy""#.to_vec()));

    let date = user_entrypoint(VM::from(&vm), "getUpdateDate", br#"{"accountId":"alice"}"#)
        .expect("view call succeeds");
    let date: String = serde_json::from_slice(&date).unwrap();
    assert_eq!(date, NEW_YEAR_2021);
}

#[test]
fn test_entrypoint_rejects_bad_calls() {
    let vm = TestVM::new();

    let unknown = user_entrypoint(VM::from(&vm), "deleteGreeting", b"{}");
    assert_eq!(unknown, Err(b"method not found: deleteGreeting".to_vec()));

    let missing = user_entrypoint(VM::from(&vm), "setGreeting", br#"{"greeting":"hi"}"#)
        .unwrap_err();
    assert!(String::from_utf8(missing)
        .unwrap()
        .starts_with("invalid arguments for setGreeting"));

    let malformed = user_entrypoint(VM::from(&vm), "getGreeting", b"alice");
    assert!(malformed.is_err());

    // nothing was written by the failed calls
    assert!(vm.snapshot().storage.is_empty());
    assert!(vm.get_emitted_logs().is_empty());
}
