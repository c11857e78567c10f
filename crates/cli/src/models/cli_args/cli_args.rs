use crate::prelude::*;
use clap::{Parser, Subcommand};

pub const BINARY_NAME: &str = "evm-stps";

/// Load testing and reporting tools for EVM chains reachable over JSON-RPC.
#[derive(Debug, Parser)]
#[command(name = BINARY_NAME)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Flood the node with signed transfers from one wallet and report the
    /// accepted transactions per second.
    Spam(SpamArgs),

    /// Sum the `Withdrawal` events a betting contract emitted for wallets.
    Winnings(WinningsArgs),
}
