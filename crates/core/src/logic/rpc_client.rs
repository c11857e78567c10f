use crate::prelude::*;

use async_trait::async_trait;
use jsonrpsee_client_transport::ws::WsTransportClientBuilder;
use jsonrpsee_core::{
    client::{Client as WsClient, ClientT, Error as ClientError},
    params::ArrayParams,
    rpc_params,
};
use jsonrpsee_http_client::{HttpClient, HttpClientBuilder};
use serde::de::DeserializeOwned;
use tokio::time::Duration;

/// Maximal number of connection attempts.
pub const MAX_ATTEMPTS: usize = 10;
/// Delay period between failed connection attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_CONCURRENT_REQUESTS: usize = 64 * 1024;

/// The subset of the Ethereum JSON-RPC API the tools need.
#[async_trait]
pub trait EthRpc: Send + Sync + 'static {
    /// `eth_chainId`
    async fn chain_id(&self) -> Result<ChainId, RpcError>;

    /// `eth_blockNumber`
    async fn block_number(&self) -> Result<u64, RpcError>;

    /// `eth_getTransactionCount` at the latest block.
    async fn transaction_count(&self, account: EthAccountId) -> Result<Nonce, RpcError>;

    /// `eth_getBalance` at the latest block, in wei.
    async fn balance(&self, account: EthAccountId) -> Result<U256, RpcError>;

    /// `eth_sendRawTransaction`
    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<TxHash, RpcError>;

    /// `eth_getLogs`
    async fn logs(&self, filter: &LogFilter) -> Result<Vec<EthLog>, RpcError>;
}

impl From<ClientError> for RpcError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Call(call) => RpcError::Call {
                code: call.code(),
                message: call.message().to_owned(),
            },
            ClientError::ParseError(e) => RpcError::Decode {
                underlying: e.to_string(),
            },
            other => RpcError::Transport {
                underlying: other.to_string(),
            },
        }
    }
}

impl From<InvalidQuantity> for RpcError {
    fn from(error: InvalidQuantity) -> Self {
        RpcError::Decode {
            underlying: error.to_string(),
        }
    }
}

enum Transport {
    Ws(WsClient),
    Http(HttpClient),
}

/// [`EthRpc`] over jsonrpsee, websocket for `ws://`/`wss://` urls and plain
/// HTTP for `http://`/`https://`.
#[derive(derive_more::Debug)]
#[debug("JsonRpcClient({url})")]
pub struct JsonRpcClient {
    url: Url,
    transport: Transport,
}

impl JsonRpcClient {
    pub async fn connect(url: &Url) -> Result<Self, RpcError> {
        let transport = match url.scheme() {
            "ws" | "wss" => Transport::Ws(connect_ws(url).await?),
            "http" | "https" => Transport::Http(
                HttpClientBuilder::default()
                    .request_timeout(REQUEST_TIMEOUT)
                    .build(url.as_str())?,
            ),
            other => {
                return Err(RpcError::Transport {
                    underlying: format!("Unsupported url scheme {other} in {url}"),
                })
            }
        };
        Ok(Self {
            url: url.clone(),
            transport,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn request<T>(&self, method: &str, params: ArrayParams) -> Result<T, RpcError>
    where
        T: DeserializeOwned,
    {
        trace!("{method} -> {}", self.url);
        let response = match &self.transport {
            Transport::Ws(client) => client.request(method, params).await,
            Transport::Http(client) => client.request(method, params).await,
        };
        response.map_err(RpcError::from)
    }

    /// Methods answering with a hex quantity string.
    async fn request_quantity(&self, method: &str, params: ArrayParams) -> Result<String, RpcError> {
        self.request::<String>(method, params).await
    }
}

/// Tries [`MAX_ATTEMPTS`] times to open a websocket to the given node.
async fn connect_ws(url: &Url) -> Result<WsClient, RpcError> {
    for i in 1..=MAX_ATTEMPTS {
        info!("Attempt #{}: Connecting to {}", i, url);
        match WsTransportClientBuilder::default().build(url.clone()).await {
            Ok((sender, receiver)) => {
                return Ok(WsClient::builder()
                    .request_timeout(REQUEST_TIMEOUT)
                    .max_concurrent_requests(MAX_CONCURRENT_REQUESTS)
                    .build_with_tokio(sender, receiver))
            }
            Err(err) => {
                warn!("API client {} error: {:?}", url, err);
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
    let err = format!("Failed to connect to {} after {} attempts", url, MAX_ATTEMPTS);
    error!("{}", err);
    Err(RpcError::Transport { underlying: err })
}

#[async_trait]
impl EthRpc for JsonRpcClient {
    async fn chain_id(&self) -> Result<ChainId, RpcError> {
        let quantity = self.request_quantity("eth_chainId", rpc_params![]).await?;
        Ok(parse_quantity_u64(&quantity)?)
    }

    async fn block_number(&self) -> Result<u64, RpcError> {
        let quantity = self.request_quantity("eth_blockNumber", rpc_params![]).await?;
        Ok(parse_quantity_u64(&quantity)?)
    }

    async fn transaction_count(&self, account: EthAccountId) -> Result<Nonce, RpcError> {
        let quantity = self
            .request_quantity("eth_getTransactionCount", rpc_params![account, "latest"])
            .await?;
        Ok(parse_quantity_u64(&quantity)?)
    }

    async fn balance(&self, account: EthAccountId) -> Result<U256, RpcError> {
        let quantity = self
            .request_quantity("eth_getBalance", rpc_params![account, "latest"])
            .await?;
        Ok(parse_quantity_u256(&quantity)?)
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<TxHash, RpcError> {
        let raw = format!("0x{}", hex::encode(raw));
        self.request("eth_sendRawTransaction", rpc_params![raw]).await
    }

    async fn logs(&self, filter: &LogFilter) -> Result<Vec<EthLog>, RpcError> {
        self.request("eth_getLogs", rpc_params![filter]).await
    }
}
