use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Node url invalid {bad_value}")]
    NodeUrlInvalid { bad_value: String },

    #[error("{0}")]
    AddressInvalid(#[from] InvalidAddress),

    #[error("{0}")]
    AmountInvalid(#[from] InvalidAmount),

    #[error("Batch size must be positive")]
    BatchSizeMustBePositive,

    #[error("Batch count must be positive")]
    BatchCountMustBePositive,

    #[error("Duration must be positive")]
    DurationMustBePositive,

    #[error("Chunk size must be positive")]
    ChunkSizeMustBePositive,

    #[error("At least one wallet address is required")]
    NoWalletAddress,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Core error: {0}")]
    CoreError(#[from] Error),

    #[error("Failed to start Prometheus endpoint: {0}")]
    PrometheusSetupFailed(anyhow::Error),

    #[error("Failed to listen for Ctrl-C: {underlying}")]
    SignalHandlerFailed { underlying: String },
}

pub(crate) fn parse_node_url(raw: &str) -> Result<Url, InvalidCliArgs> {
    Url::parse(raw).map_err(|_| InvalidCliArgs::NodeUrlInvalid {
        bad_value: raw.to_owned(),
    })
}
