use crate::prelude::*;

/// How far the spammer got connecting to the node and loading its wallet.
/// Set once during bootstrap and never reconciled afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct ConnectionStatus {
    #[getset(get = "pub")]
    rpc_connected: bool,

    #[getset(get = "pub")]
    wallet_initialized: bool,
}

impl ConnectionStatus {
    pub fn with_rpc_connected(self) -> Self {
        Self {
            rpc_connected: true,
            ..self
        }
    }

    pub fn with_wallet_initialized(self) -> Self {
        Self {
            wallet_initialized: true,
            ..self
        }
    }

    pub fn is_ready(&self) -> bool {
        self.rpc_connected && self.wallet_initialized
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rpc = if self.rpc_connected {
            "✓ Connected"
        } else {
            "✗ Disconnected"
        };
        let wallet = if self.wallet_initialized {
            "✓ Initialized"
        } else {
            "✗ Not Ready"
        };
        write!(f, "RPC Connection: {rpc} | Wallet: {wallet}")
    }
}
