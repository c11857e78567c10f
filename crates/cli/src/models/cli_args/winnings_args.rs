use crate::prelude::*;
use clap::Parser;

use std::str::FromStr;

pub const DEFAULT_SYMBOL: &str = "AVAX";
/// Fractional digits of the displayed totals.
pub const DISPLAY_DECIMALS: usize = 4;

#[derive(Parser, Debug)]
pub struct WinningsArgs {
    /// JSON-RPC endpoint of the node.
    #[arg(long, env = "RPC_URL")]
    rpc_url: String,

    /// Address of the betting contract emitting `Withdrawal` events.
    #[arg(long, env = "CONTRACT_ADDRESS")]
    contract: String,

    /// Wallet to total, repeat the flag or separate with commas for several.
    #[arg(long = "wallet", env = "WALLET_ADDRESS", value_delimiter = ',')]
    wallets: Vec<String>,

    /// First block to scan.
    #[arg(long, default_value_t = DEFAULT_DEPLOYMENT_BLOCK)]
    deployment_block: u64,

    /// Maximum number of blocks per `eth_getLogs` request.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,

    /// Currency symbol shown next to the totals.
    #[arg(long, default_value_t = DEFAULT_SYMBOL.to_owned())]
    symbol: String,
}

/// Validated `winnings` invocation.
#[derive(Debug)]
pub struct WinningsConfig {
    pub parameters: WinningsParameters,
    /// Distinct wallets in the order given.
    pub wallets: IndexSet<EthAccountId>,
    pub symbol: String,
}

impl TryFrom<WinningsArgs> for WinningsConfig {
    type Error = InvalidCliArgs;

    fn try_from(args: WinningsArgs) -> Result<Self, Self::Error> {
        let url = parse_node_url(&args.rpc_url)?;
        if args.chunk_size == 0 {
            return Err(InvalidCliArgs::ChunkSizeMustBePositive);
        }
        let wallets = args
            .wallets
            .iter()
            .map(|wallet| EthAccountId::from_str(wallet.trim()))
            .collect::<Result<IndexSet<_>, _>>()?;
        if wallets.is_empty() {
            return Err(InvalidCliArgs::NoWalletAddress);
        }

        let parameters = WinningsParameters::builder()
            .node_url(url)
            .contract(EthAccountId::from_str(&args.contract)?)
            .deployment_block(args.deployment_block)
            .chunk_size(args.chunk_size)
            .build();

        Ok(Self {
            parameters,
            wallets,
            symbol: args.symbol,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "0xc0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0";
    const WALLET_A: &str = "0x1111111111111111111111111111111111111111";
    const WALLET_B: &str = "0x2222222222222222222222222222222222222222";

    fn args(extra: &[&str]) -> WinningsArgs {
        let base = [
            "winnings",
            "--rpc-url",
            "https://api.avax.network/ext/bc/C/rpc",
            "--contract",
            CONTRACT,
        ];
        WinningsArgs::try_parse_from(base.iter().chain(extra)).unwrap()
    }

    #[test]
    fn defaults() {
        let config = WinningsConfig::try_from(args(&["--wallet", WALLET_A])).unwrap();
        assert_eq!(*config.parameters.deployment_block(), 36_646_282);
        assert_eq!(*config.parameters.chunk_size(), 2_000);
        assert_eq!(config.symbol, "AVAX");
        assert_eq!(config.wallets.len(), 1);
    }

    #[test]
    fn repeated_wallets_are_scanned_once() {
        let joined = format!("{WALLET_A},{WALLET_B}");
        let config =
            WinningsConfig::try_from(args(&["--wallet", &joined, "--wallet", WALLET_A])).unwrap();
        let wallets = config.wallets.iter().map(|w| w.to_string().to_lowercase());
        assert_eq!(wallets.collect::<Vec<_>>(), vec![WALLET_A, WALLET_B]);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(matches!(
            WinningsConfig::try_from(args(&["--wallet", WALLET_A, "--chunk-size", "0"])),
            Err(InvalidCliArgs::ChunkSizeMustBePositive)
        ));
    }

    #[test]
    fn missing_wallet_is_rejected() {
        let mut args = args(&[]);
        args.wallets.clear();
        assert!(matches!(
            WinningsConfig::try_from(args),
            Err(InvalidCliArgs::NoWalletAddress)
        ));
    }
}
