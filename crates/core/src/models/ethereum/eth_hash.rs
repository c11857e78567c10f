use sp_core::{keccak_256, H256};

/// A 32 byte hash: transaction hashes and log topics.
#[derive(Eq, PartialEq, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct EthHash(pub [u8; 32]);

impl_serde::impl_fixed_hash_serde!(EthHash, 32);

impl EthHash {
    pub fn keccak(data: impl AsRef<[u8]>) -> Self {
        Self(keccak_256(data.as_ref()))
    }
}

impl std::fmt::Display for EthHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl core::fmt::Debug for EthHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", H256(self.0))
    }
}

impl From<[u8; 32]> for EthHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<H256> for EthHash {
    fn from(h256: H256) -> Self {
        Self(h256.0)
    }
}

pub type TxHash = EthHash;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            EthHash::keccak(b"").to_string(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn deserializes_from_json_rpc_hex() {
        let json = format!("\"0x{}\"", "ab".repeat(32));
        let hash: EthHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, EthHash([0xab; 32]));
    }
}
