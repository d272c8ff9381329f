// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Types relating to method definitions.

use serde::Serialize;

/// State mutability of a contract method. Hosts may run view methods without a signed
/// transaction, so a view method must never write storage or emit logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Purity {
    /// No state write.
    View,
    /// Everything is allowed.
    Write,
}

impl Purity {
    /// Returns whether a method with this purity requires a transaction.
    pub const fn is_mutating(&self) -> bool {
        matches!(self, Purity::Write)
    }

    /// Returns the keyword used for this purity in exported interfaces.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Purity::View => "view",
            Purity::Write => "write",
        }
    }
}

impl core::fmt::Display for Purity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named method argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arg {
    /// Name of the field in the JSON argument object.
    pub name: &'static str,
    /// JSON type of the field.
    #[serde(rename = "type")]
    pub ty: &'static str,
}

/// Describes one externally callable method of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Method {
    /// Name the method is routed by.
    pub name: &'static str,
    /// Whether the method may change state.
    pub purity: Purity,
    /// Fields of the JSON argument object.
    pub args: &'static [Arg],
    /// JSON type of the return value, if any.
    pub returns: Option<&'static str>,
}
