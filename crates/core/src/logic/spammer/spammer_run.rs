use crate::prelude::*;

use std::sync::Arc;

use futures::future::join_all;
use log::Level;
use tokio::{task, time::Instant};

impl<R: EthRpc> Spammer<R> {
    /// Spawns [`SpammerParameters::batch_count`] batch loops, each submitting
    /// [`SpammerParameters::batch_size`] transfers concurrently per round
    /// until [`Spammer::stop`] is called.
    pub fn start(self: &Arc<Self>) -> Result<SpammerHandle, SpammerError> {
        let run = self.begin_run()?;
        let batch_count = *self.parameters().batch_count();
        info!(
            "Starting {} batch loops of {} transfers from {} to {}",
            batch_count,
            self.parameters().batch_size(),
            self.signer().account_id(),
            self.parameters().receiver()
        );

        let handles = (0..batch_count)
            .map(|index| {
                let spammer = Arc::clone(self);
                let run = Arc::clone(&run);
                task::spawn(async move { spammer.batch_loop(index, run).await })
            })
            .collect();

        Ok(SpammerHandle::new(handles))
    }

    async fn batch_loop(&self, index: usize, run: Arc<ThroughputRun>) {
        let batch_size = *self.parameters().batch_size();
        let batch_delay = *self.parameters().batch_delay();
        while run.is_running() {
            let sends = (0..batch_size).map(|_| async {
                let outcome = self.send_transaction().await;
                let mut metrics = run.metrics();
                match outcome {
                    Some(hash) => {
                        metrics.record_success(hash);
                    }
                    None => metrics.record_failure(),
                }
            });
            join_all(sends).await;
            tokio::time::sleep(batch_delay).await;
        }
        debug!("Batch loop {index} stopped");
    }

    /// Signs and submits one transfer with the next local nonce. Returns the
    /// transaction hash, or `None` if the node rejected it.
    pub async fn send_transaction(&self) -> Option<TxHash> {
        let nonce = self.nonce().next();
        let signed = Transaction::builder()
            .to(*self.parameters().receiver())
            .value(*self.parameters().transfer_value())
            .nonce(nonce)
            .gas_price(*self.parameters().gas_price())
            .gas_limit(*self.parameters().gas_limit())
            .chain_id(*self.chain_id())
            .build()
            .sign(self.signer());

        match self.rpc().send_raw_transaction(signed.raw()).await {
            Ok(hash) => Some(hash),
            Err(err) => {
                if err.is_nonce_conflict() {
                    self.resync_nonce().await;
                }
                self.diagnostic(Level::Warn, format!("Transaction Error: {err}"));
                None
            }
        }
    }

    async fn resync_nonce(&self) {
        match get_nonce(self.rpc().as_ref(), *self.signer().account_id()).await {
            Ok(nonce) => {
                debug!("Resynced nonce to {nonce}");
                self.nonce().resync(nonce);
            }
            Err(err) => self.diagnostic(Level::Error, format!("Nonce refresh failed: {err}")),
        }
    }

    /// Signals every batch loop to exit after its current batch and freezes
    /// the metrics. Returns `None` if no run was ever started.
    pub fn stop(&self) -> Option<FinalMetrics> {
        let run = self.current_run()?;
        run.halt();
        let metrics = run.metrics().freeze_at(Instant::now());
        self.diagnostic(Level::Info, format!("Test Complete - {metrics}"));
        Some(metrics)
    }
}
