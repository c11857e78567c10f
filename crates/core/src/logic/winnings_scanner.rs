use crate::prelude::*;

/// Sums the `Withdrawal` events a betting contract emitted for a wallet.
#[derive(Debug, Getters)]
pub struct WinningsScanner<R = JsonRpcClient> {
    #[getset(get = "pub")]
    rpc: R,

    #[getset(get = "pub")]
    parameters: WinningsParameters,
}

impl WinningsScanner<JsonRpcClient> {
    pub async fn connect(parameters: WinningsParameters) -> Result<Self, Error> {
        let rpc = JsonRpcClient::connect(parameters.node_url()).await?;
        Ok(Self::new(parameters, rpc))
    }
}

impl<R: EthRpc> WinningsScanner<R> {
    pub fn new(parameters: WinningsParameters, rpc: R) -> Self {
        Self { rpc, parameters }
    }

    fn withdrawal_filter(&self, user: EthAccountId, chunk: BlockRange) -> LogFilter {
        LogFilter::builder()
            .address(*self.parameters.contract())
            .topics(vec![withdrawal_topic(), user.to_topic()])
            .from_block(*chunk.from())
            .to_block(*chunk.to())
            .build()
    }

    /// Scans from the deployment block to the current head in chunks of at
    /// most [`WinningsParameters::chunk_size`] blocks, one request at a time.
    /// A failed chunk aborts the scan.
    pub async fn scan(&self, user: EthAccountId) -> Result<WinningsSummary, ScanError> {
        let head = self
            .rpc
            .block_number()
            .await
            .map_err(|underlying| ScanError::ChainHeadFetchFailed { underlying })?;
        let deployment_block = *self.parameters.deployment_block();
        if deployment_block > head {
            warn!("Deployment block {deployment_block} is past the chain head {head}, nothing to scan");
            return Ok(WinningsSummary::empty(user, None));
        }

        let range = BlockRange::new(deployment_block, head);
        let chunk_size = (*self.parameters.chunk_size()).max(1);
        info!(
            "Scanning {} blocks ({range}) for withdrawals of {user}",
            range.len()
        );

        let mut summary = WinningsSummary::empty(user, Some(range));
        for chunk in range.chunks(chunk_size) {
            let logs = self
                .rpc
                .logs(&self.withdrawal_filter(user, chunk))
                .await
                .map_err(|underlying| ScanError::LogFetchFailed {
                    range: chunk,
                    underlying,
                })?;
            let withdrawals = logs
                .iter()
                .map(Withdrawal::decode)
                .collect::<Result<Vec<_>, _>>()?;
            for withdrawal in &withdrawals {
                debug!("Found withdrawal: {}", format_ether(*withdrawal.amount()));
            }
            trace!("Blocks {chunk}: {} withdrawals", withdrawals.len());
            summary.add_chunk(withdrawals);
        }

        info!(
            "Total winnings of {user}: {} over {} withdrawals",
            summary.total_ether(),
            summary.withdrawals()
        );
        Ok(summary)
    }

    /// Scans each distinct wallet once, in the order given.
    pub async fn scan_all(
        &self,
        users: impl IntoIterator<Item = EthAccountId>,
    ) -> Vec<(EthAccountId, Result<WinningsSummary, ScanError>)> {
        let users = users.into_iter().collect::<IndexSet<_>>();
        let mut results = Vec::with_capacity(users.len());
        for user in users {
            results.push((user, self.scan(user).await));
        }
        results
    }
}
