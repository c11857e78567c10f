use crate::prelude::*;

pub type Nonce = u64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetNonceError {
    #[error("Failed to fetch transaction count: {underlying}")]
    TransactionCountFetchFailed { underlying: RpcError },
}

/// Fetch the current nonce for an account
pub async fn get_nonce<R>(rpc: &R, account_id: EthAccountId) -> Result<Nonce, GetNonceError>
where
    R: EthRpc + ?Sized,
{
    let nonce = rpc
        .transaction_count(account_id)
        .await
        .map_err(|underlying| GetNonceError::TransactionCountFetchFailed { underlying })?;
    info!("Fetched nonce: {nonce}");
    Ok(nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_transaction_count() {
        let rpc = MockRpc::default().with_network_nonce(17);
        assert_eq!(get_nonce(&rpc, EthAccountId::default()).await, Ok(17));
        assert_eq!(rpc.transaction_count_calls(), 1);
    }

    #[tokio::test]
    async fn wraps_rpc_failures() {
        let rpc = MockRpc::default().unreachable();
        assert!(matches!(
            get_nonce(&rpc, EthAccountId::default()).await,
            Err(GetNonceError::TransactionCountFetchFailed { .. })
        ));
    }
}
