use crate::prelude::*;

/// Block the betting contract was deployed at, minus a safety margin.
pub const DEFAULT_DEPLOYMENT_BLOCK: u64 = 36_656_282 - 10_000;
/// Maximum blocks per `eth_getLogs` request.
pub const DEFAULT_CHUNK_SIZE: u64 = 2_000;

#[derive(Debug, Clone, Getters, Builder)]
pub struct WinningsParameters {
    #[getset(get = "pub")]
    node_url: Url,

    #[getset(get = "pub")]
    contract: EthAccountId,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_DEPLOYMENT_BLOCK)]
    deployment_block: u64,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,
}
