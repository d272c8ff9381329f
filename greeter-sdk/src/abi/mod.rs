// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The call ABI: methods are routed by name, arguments arrive as a JSON object and return
//! values leave as JSON.
//!
//! ```
//! use greeter_sdk::abi;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Args {
//!     account_id: String,
//! }
//!
//! let args: Args = abi::decode_args("lookup", br#"{"accountId":"bob.test"}"#).unwrap();
//! assert_eq!(args.account_id, "bob.test");
//! assert_eq!(abi::encode_return(&"hi").unwrap(), br#""hi""#);
//! ```

use greeter_core::TopLevelStorage;
use serde::{de::DeserializeOwned, Serialize};

use crate::{CallResult, Error, Result};

#[cfg(feature = "export-abi")]
pub use export::GenerateAbi;

#[cfg(feature = "export-abi")]
pub mod export;

/// Executes a method given its name and JSON-encoded arguments.
pub trait Router: TopLevelStorage {
    /// Tries to find and execute a method with the given name, returning `None` if none is found.
    fn route(&mut self, method: &str, input: &[u8]) -> Option<Result<Vec<u8>>>;
}

/// Entrypoint used when a contract is the target of a call.
/// Unknown methods and malformed arguments revert with a UTF-8 error message.
pub fn router_entrypoint<R: Router>(storage: &mut R, method: &str, input: &[u8]) -> CallResult {
    match storage.route(method, input) {
        Some(Ok(output)) => Ok(output),
        Some(Err(err)) => {
            crate::console!("call to {method} failed: {err}");
            Err(err.into())
        }
        None => {
            crate::console!("no route for method {method}");
            Err(Error::UnknownMethod(method.to_owned()).into())
        }
    }
}

/// Decodes the JSON argument object of `method`. Empty input is treated as `{}`.
pub fn decode_args<T: DeserializeOwned>(method: &str, input: &[u8]) -> Result<T> {
    let input = if input.is_empty() { b"{}".as_slice() } else { input };
    serde_json::from_slice(input).map_err(|source| Error::InvalidArgs {
        method: method.to_owned(),
        source,
    })
}

/// Encodes a method's return value as JSON.
pub fn encode_return<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}
