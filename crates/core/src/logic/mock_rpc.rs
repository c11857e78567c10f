use crate::prelude::*;

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

/// In memory node for exercising the spammer and the scanner.
#[derive(Debug, Default)]
pub(crate) struct MockRpc {
    chain_id: ChainId,
    balance: U256,
    network_nonce: AtomicU64,
    head: u64,
    logs: Vec<EthLog>,
    failing_log_block: Option<u64>,
    unreachable: bool,
    transaction_count_failing: AtomicBool,
    constant_hash: Option<TxHash>,
    scripted_send_errors: Mutex<VecDeque<RpcError>>,
    transaction_count_calls: AtomicUsize,
    sent: Mutex<Vec<Vec<u8>>>,
    log_requests: Mutex<Vec<BlockRange>>,
}

fn unreachable_error() -> RpcError {
    RpcError::Transport {
        underlying: "connection refused".to_owned(),
    }
}

impl MockRpc {
    pub(crate) fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub(crate) fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    pub(crate) fn with_network_nonce(self, nonce: Nonce) -> Self {
        self.network_nonce.store(nonce, Ordering::SeqCst);
        self
    }

    pub(crate) fn with_head(mut self, head: u64) -> Self {
        self.head = head;
        self
    }

    /// Logs must carry a block number to be matched against filters.
    pub(crate) fn with_logs(mut self, logs: Vec<EthLog>) -> Self {
        self.logs = logs;
        self
    }

    /// `eth_getLogs` fails for any range containing `block`.
    pub(crate) fn failing_logs_at(mut self, block: u64) -> Self {
        self.failing_log_block = Some(block);
        self
    }

    pub(crate) fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Every accepted transaction reports the same hash.
    pub(crate) fn with_constant_hash(mut self, hash: TxHash) -> Self {
        self.constant_hash = Some(hash);
        self
    }

    /// The next submissions fail with these errors, in order.
    pub(crate) fn rejecting_sends(self, errors: impl IntoIterator<Item = RpcError>) -> Self {
        lock(&self.scripted_send_errors).extend(errors);
        self
    }

    /// From now on only `eth_getTransactionCount` fails, usable once the
    /// mock is owned by a bootstrapped spammer.
    pub(crate) fn failing_transaction_count(&self) {
        self.transaction_count_failing.store(true, Ordering::SeqCst);
    }

    pub(crate) fn set_network_nonce(&self, nonce: Nonce) {
        self.network_nonce.store(nonce, Ordering::SeqCst);
    }

    pub(crate) fn transaction_count_calls(&self) -> usize {
        self.transaction_count_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn sent(&self) -> Vec<Vec<u8>> {
        lock(&self.sent).clone()
    }

    pub(crate) fn log_requests(&self) -> Vec<BlockRange> {
        lock(&self.log_requests).clone()
    }

    fn check_reachable(&self) -> Result<(), RpcError> {
        if self.unreachable {
            Err(unreachable_error())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EthRpc for MockRpc {
    async fn chain_id(&self) -> Result<ChainId, RpcError> {
        self.check_reachable()?;
        Ok(self.chain_id)
    }

    async fn block_number(&self) -> Result<u64, RpcError> {
        self.check_reachable()?;
        Ok(self.head)
    }

    async fn transaction_count(&self, _account: EthAccountId) -> Result<Nonce, RpcError> {
        self.transaction_count_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        if self.transaction_count_failing.load(Ordering::SeqCst) {
            return Err(RpcError::Call {
                code: -32603,
                message: "internal error".to_owned(),
            });
        }
        Ok(self.network_nonce.load(Ordering::SeqCst))
    }

    async fn balance(&self, _account: EthAccountId) -> Result<U256, RpcError> {
        self.check_reachable()?;
        Ok(self.balance)
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<TxHash, RpcError> {
        self.check_reachable()?;
        if let Some(error) = lock(&self.scripted_send_errors).pop_front() {
            return Err(error);
        }
        lock(&self.sent).push(raw.to_vec());
        Ok(self.constant_hash.unwrap_or_else(|| EthHash::keccak(raw)))
    }

    async fn logs(&self, filter: &LogFilter) -> Result<Vec<EthLog>, RpcError> {
        self.check_reachable()?;
        let range = filter.range();
        lock(&self.log_requests).push(range);
        let contains = |block: u64| (*range.from()..=*range.to()).contains(&block);
        if self.failing_log_block.is_some_and(contains) {
            return Err(RpcError::Call {
                code: -32005,
                message: "query returned more than 10000 results".to_owned(),
            });
        }
        Ok(self
            .logs
            .iter()
            .filter(|log| {
                log.address() == filter.address()
                    && log.topics().starts_with(filter.topics())
                    && log.block_number().is_some_and(contains)
            })
            .cloned()
            .collect())
    }
}
