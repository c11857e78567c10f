use crate::prelude::*;
use clap::Parser;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PROMETHEUS_HOST: &str = "127.0.0.1";

#[derive(Parser, Debug)]
pub struct SpamArgs {
    /// JSON-RPC endpoint of the node, `ws://`/`wss://` or `http://`/`https://`.
    #[arg(long, env = "RPC_URL")]
    rpc_url: String,

    /// Hex encoded secret key of the funded sending wallet.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: String,

    /// Address receiving every transfer.
    #[arg(long, env = "RECEIVER_ADDRESS")]
    receiver: String,

    /// Transfers submitted concurrently by each batch loop.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Number of batch loops running side by side.
    #[arg(long, default_value_t = DEFAULT_BATCH_COUNT)]
    batch_count: usize,

    /// Pause between two batches of one loop, in milliseconds.
    #[arg(long, default_value_t = 1)]
    batch_delay_ms: u64,

    #[arg(long, default_value = "50")]
    gas_price_gwei: String,

    #[arg(long, default_value_t = DEFAULT_GAS_LIMIT)]
    gas_limit: u64,

    /// Value of each transfer, in ether.
    #[arg(long, default_value = "0.000001")]
    value: String,

    /// Stop after this many seconds. Runs until Ctrl-C when omitted.
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Serve `tps`, `tx_success_count` and `tx_failed_count` gauges on this port.
    #[arg(long)]
    prometheus_port: Option<u16>,

    #[arg(long, default_value_t = DEFAULT_PROMETHEUS_HOST.to_owned())]
    prometheus_host: String,
}

/// Validated `spam` invocation.
#[derive(Debug)]
pub struct SpamConfig {
    pub parameters: SpammerParameters,
    pub duration: Option<Duration>,
    /// `(host, port)` of the Prometheus endpoint, if enabled.
    pub prometheus: Option<(String, u16)>,
}

impl TryFrom<SpamArgs> for SpamConfig {
    type Error = InvalidCliArgs;

    fn try_from(args: SpamArgs) -> Result<Self, Self::Error> {
        let url = parse_node_url(&args.rpc_url)?;
        if args.batch_size == 0 {
            return Err(InvalidCliArgs::BatchSizeMustBePositive);
        }
        if args.batch_count == 0 {
            return Err(InvalidCliArgs::BatchCountMustBePositive);
        }
        if args.duration_secs == Some(0) {
            return Err(InvalidCliArgs::DurationMustBePositive);
        }

        let parameters = SpammerParameters::builder()
            .node_url(url)
            .private_key(args.private_key)
            .receiver(EthAccountId::from_str(&args.receiver)?)
            .batch_size(args.batch_size)
            .batch_count(args.batch_count)
            .batch_delay(Duration::from_millis(args.batch_delay_ms))
            .gas_price(parse_gwei(&args.gas_price_gwei)?)
            .gas_limit(args.gas_limit)
            .transfer_value(parse_ether(&args.value)?)
            .build();

        Ok(Self {
            parameters,
            duration: args.duration_secs.map(Duration::from_secs),
            prometheus: args
                .prometheus_port
                .map(|port| (args.prometheus_host, port)),
        })
    }
}
