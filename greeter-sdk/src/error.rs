// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Errors raised while dispatching a call to a contract method.

/// Result type for routing and argument handling.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Represents a failure to dispatch a call. Contract methods themselves never fail; only the
/// plumbing around them can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No method with this name is exposed by the contract.
    #[error("method not found: {0}")]
    UnknownMethod(String),
    /// The call's arguments could not be decoded for the method.
    #[error("invalid arguments for {method}: {source}")]
    InvalidArgs {
        /// Name of the method being called.
        method: String,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The method's return value could not be encoded.
    #[error("failed to encode return value: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<Error> for Vec<u8> {
    fn from(err: Error) -> Vec<u8> {
        err.to_string().into_bytes()
    }
}
