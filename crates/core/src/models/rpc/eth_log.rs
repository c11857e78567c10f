use crate::prelude::*;

use serde::Deserialize;

/// An entry of the `eth_getLogs` result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct EthLog {
    #[getset(get = "pub")]
    address: EthAccountId,

    #[getset(get = "pub")]
    topics: Vec<EthHash>,

    #[getset(get = "pub")]
    #[serde(with = "impl_serde::serialize")]
    data: Vec<u8>,

    #[getset(get = "pub")]
    #[serde(default, deserialize_with = "quantity::deserialize_option")]
    block_number: Option<u64>,

    #[getset(get = "pub")]
    #[serde(default)]
    transaction_hash: Option<TxHash>,
}

impl EthLog {
    pub fn new(address: EthAccountId, topics: Vec<EthHash>, data: Vec<u8>) -> Self {
        Self {
            address,
            topics,
            data,
            block_number: None,
            transaction_hash: None,
        }
    }

    pub fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    /// The `n`th 32 byte word of the non-indexed event data.
    pub fn data_word(&self, n: usize) -> Option<U256> {
        let start = n.checked_mul(32)?;
        let word = self.data.get(start..start + 32)?;
        Some(U256::from_big_endian(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_node_response() {
        let json = serde_json::json!({
            "address": format!("0x{}", "aa".repeat(20)),
            "topics": [format!("0x{}", "bb".repeat(32))],
            "data": "0x00000000000000000000000000000000000000000000000000038d7ea4c68000",
            "blockNumber": "0x22f5a8a",
            "transactionHash": format!("0x{}", "cc".repeat(32)),
            "logIndex": "0x0",
            "removed": false
        });
        let log: EthLog = serde_json::from_value(json).unwrap();
        assert_eq!(*log.address(), EthAccountId([0xaa; 20]));
        assert_eq!(*log.block_number(), Some(36_657_802));
        assert_eq!(log.data_word(0), Some(U256::exp10(15)));
        assert_eq!(log.data_word(1), None);
    }

    #[test]
    fn pending_log_has_no_block_number() {
        let json = serde_json::json!({
            "address": format!("0x{}", "aa".repeat(20)),
            "topics": [],
            "data": "0x",
            "blockNumber": null,
            "transactionHash": null
        });
        let log: EthLog = serde_json::from_value(json).unwrap();
        assert_eq!(*log.block_number(), None);
        assert_eq!(*log.transaction_hash(), None);
        assert_eq!(log.data_word(0), None);
    }
}
