// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use clap::Parser;
use greeter::Greeter;
use greeter_sdk::abi::export::print_abi;

/// Prints the call interface of the greeter contract.
#[derive(Debug, Parser)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Print the interface as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    print_abi::<Greeter>(args.json)?;
    Ok(())
}
