// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Traits for exporting a contract's call interface.
//! Exporting is only available with the `export-abi` feature, which binaries use to print the
//! interface at build time.

use core::{fmt, marker::PhantomData};

use serde_json::json;

use crate::{methods::Method, Result};

/// Describes the externally callable surface of a contract.
pub trait GenerateAbi {
    /// Name of the contract.
    const NAME: &'static str;

    /// Methods exposed by the contract's router, in declaration order.
    const METHODS: &'static [Method];
}

/// Renders the text interface of `T`:
///
/// ```text
/// contract Name {
///     view method(arg: string) -> string;
/// }
/// ```
pub struct AbiPrinter<T: GenerateAbi>(PhantomData<T>);

impl<T: GenerateAbi> AbiPrinter<T> {
    /// Creates a printer for `T`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: GenerateAbi> Default for AbiPrinter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GenerateAbi> fmt::Display for AbiPrinter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "contract {} {{", T::NAME)?;
        for method in T::METHODS {
            write!(f, "    {} {}(", method.purity, method.name)?;
            for (i, arg) in method.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", arg.name, arg.ty)?;
            }
            f.write_str(")")?;
            if let Some(returns) = method.returns {
                write!(f, " -> {returns}")?;
            }
            writeln!(f, ";")?;
        }
        write!(f, "}}")
    }
}

/// Returns the JSON interface of `T`.
pub fn abi_json<T: GenerateAbi>() -> serde_json::Value {
    json!({
        "name": T::NAME,
        "methods": T::METHODS,
    })
}

/// Prints the interface of `T` to stdout, as text or pretty JSON.
pub fn print_abi<T: GenerateAbi>(as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&abi_json::<T>())?);
    } else {
        println!("{}", AbiPrinter::<T>::new());
    }
    Ok(())
}
