use crate::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bootstrap error {0}")]
    Bootstrap(#[from] BootstrapSpammerError),

    #[error("Spammer error {0}")]
    Spammer(#[from] SpammerError),

    #[error("Scan error {0}")]
    Scan(#[from] ScanError),

    #[error("RPC error {0}")]
    Rpc(#[from] RpcError),

    #[error("Join senders error {0}")]
    JoinSendersError(#[from] Box<tokio::task::JoinError>),
}

/// Failure while bringing the spammer up, together with how far it got and
/// the diagnostics recorded on the way.
#[derive(Debug, thiserror::Error)]
#[error("{kind} (rpc connected: {}, wallet initialized: {})", status.rpc_connected(), status.wallet_initialized())]
pub struct BootstrapSpammerError {
    pub status: ConnectionStatus,
    pub kind: BootstrapFailure,
    pub diagnostics: DiagnosticLog,
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapFailure {
    #[error("Failed to create API client: {underlying}")]
    CreateApiFailure { underlying: String },

    #[error("RPC endpoint unreachable: {underlying}")]
    RpcUnreachable { underlying: RpcError },

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(#[from] InvalidPrivateKey),

    #[error("Failed to fetch wallet balance: {underlying}")]
    BalanceFetchFailed { underlying: RpcError },

    #[error("Failed to fetch initial nonce: {underlying}")]
    InitialNonceFetchFailed { underlying: GetNonceError },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPrivateKey {
    #[error("Private key is not valid hex")]
    NotHex,

    #[error("Private key must be 32 bytes, got {len}")]
    WrongLength { len: usize },

    #[error("Private key is not a valid secp256k1 scalar")]
    NotOnCurve,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpammerError {
    #[error("A throughput run is already in progress")]
    AlreadyRunning,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to fetch chain head: {underlying}")]
    ChainHeadFetchFailed { underlying: RpcError },

    #[error("Failed to fetch logs for blocks {range}: {underlying}")]
    LogFetchFailed { range: BlockRange, underlying: RpcError },

    #[error("Withdrawal log in block {block:?} has {len} data bytes, expected at least 32")]
    MalformedWithdrawalLog { block: Option<u64>, len: usize },
}
