use crate::prelude::*;

use log::Level;

impl Spammer<JsonRpcClient> {
    /// Connects to the node at [`SpammerParameters::node_url`] and bootstraps.
    pub async fn connect(parameters: SpammerParameters) -> Result<Self, Error> {
        let rpc = JsonRpcClient::connect(parameters.node_url())
            .await
            .map_err(|e| {
                fail(
                    ConnectionStatus::default(),
                    BootstrapFailure::CreateApiFailure {
                        underlying: e.to_string(),
                    },
                    &mut DiagnosticLog::default(),
                )
            })?;
        Self::bootstrap(parameters, rpc).await
    }
}

fn fail(status: ConnectionStatus, kind: BootstrapFailure, diagnostics: &mut DiagnosticLog) -> Error {
    diagnostics.record(Level::Error, format!("Initialization Error: {kind}"));
    Error::Bootstrap(BootstrapSpammerError {
        status,
        kind,
        diagnostics: std::mem::take(diagnostics),
    })
}

impl<R: EthRpc> Spammer<R> {
    /// Verifies the node answers, derives the sending wallet from the private
    /// key and loads its balance and nonce.
    pub async fn bootstrap(parameters: SpammerParameters, rpc: R) -> Result<Self, Error> {
        let mut status = ConnectionStatus::default();
        let mut diagnostics = DiagnosticLog::default();

        let chain_id = rpc.chain_id().await.map_err(|underlying| {
            fail(
                status,
                BootstrapFailure::RpcUnreachable { underlying },
                &mut diagnostics,
            )
        })?;
        status = status.with_rpc_connected();
        info!("Connected to {} (chain id {chain_id})", parameters.node_url());

        let signer = EthereumSigner::from_private_key_hex(parameters.private_key().expose())
            .map_err(|e| fail(status, e.into(), &mut diagnostics))?;
        let account_id = *signer.account_id();

        let balance = rpc.balance(account_id).await.map_err(|underlying| {
            fail(
                status,
                BootstrapFailure::BalanceFetchFailed { underlying },
                &mut diagnostics,
            )
        })?;

        let nonce = get_nonce(&rpc, account_id).await.map_err(|underlying| {
            fail(
                status,
                BootstrapFailure::InitialNonceFetchFailed { underlying },
                &mut diagnostics,
            )
        })?;
        status = status.with_wallet_initialized();

        diagnostics.record(
            Level::Info,
            format!("Initialized wallet with balance: {} ETH", format_ether(balance)),
        );
        info!("Wallet {account_id} ready, {status}");

        Ok(Self::new(
            rpc,
            signer,
            chain_id,
            parameters,
            status,
            nonce,
            diagnostics,
        ))
    }
}
