use crate::prelude::*;

use serde::Serialize;

/// Parameter object of `eth_getLogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    #[getset(get = "pub")]
    address: EthAccountId,

    /// Positional topic filters, `topics[0]` is the event signature.
    #[getset(get = "pub")]
    topics: Vec<EthHash>,

    #[getset(get = "pub")]
    #[serde(with = "quantity")]
    from_block: u64,

    #[getset(get = "pub")]
    #[serde(with = "quantity")]
    to_block: u64,
}

impl LogFilter {
    pub fn range(&self) -> BlockRange {
        BlockRange::new(self.from_block, self.to_block)
    }
}
