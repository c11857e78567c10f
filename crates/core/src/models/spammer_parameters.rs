use crate::prelude::*;

use std::time::Duration;

/// Concurrent transfers awaited together by one batch loop.
pub const DEFAULT_BATCH_SIZE: usize = 200;
/// Batch loops running side by side.
pub const DEFAULT_BATCH_COUNT: usize = 10;
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(1);
/// 50 gwei
pub const DEFAULT_GAS_PRICE_WEI: u64 = 50_000_000_000;
/// Plain value transfer.
pub const DEFAULT_GAS_LIMIT: u64 = 21_000;
/// 0.000001 ether
pub const DEFAULT_TRANSFER_VALUE_WEI: u64 = 1_000_000_000_000;

/// Hex encoded secp256k1 secret, never printed.
#[derive(Clone, PartialEq, Eq, derive_more::Debug)]
#[debug("PrivateKey(<redacted>)")]
pub struct PrivateKey(String);

impl From<String> for PrivateKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PrivateKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl PrivateKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Getters, Builder)]
pub struct SpammerParameters {
    #[getset(get = "pub")]
    node_url: Url,

    #[getset(get = "pub")]
    #[builder(into)]
    private_key: PrivateKey,

    #[getset(get = "pub")]
    receiver: EthAccountId,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_BATCH_COUNT)]
    batch_count: usize,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_BATCH_DELAY)]
    batch_delay: Duration,

    #[getset(get = "pub")]
    #[builder(default = U256::from(DEFAULT_GAS_PRICE_WEI))]
    gas_price: U256,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_GAS_LIMIT)]
    gas_limit: u64,

    #[getset(get = "pub")]
    #[builder(default = U256::from(DEFAULT_TRANSFER_VALUE_WEI))]
    transfer_value: U256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults_match_the_reference_run() {
        let parameters = SpammerParameters::builder()
            .node_url(Url::parse("http://127.0.0.1:9650/ext/bc/C/rpc").unwrap())
            .private_key("0x01")
            .receiver(EthAccountId::from_str(&"22".repeat(20)).unwrap())
            .build();
        assert_eq!(*parameters.batch_size(), 200);
        assert_eq!(*parameters.batch_count(), 10);
        assert_eq!(*parameters.gas_price(), parse_gwei("50").unwrap());
        assert_eq!(*parameters.gas_limit(), 21_000);
        assert_eq!(*parameters.transfer_value(), parse_ether("0.000001").unwrap());
    }

    #[test]
    fn private_key_is_redacted() {
        let key = PrivateKey::from("0xdeadbeef");
        assert_eq!(format!("{key:?}"), "PrivateKey(<redacted>)");
        assert_eq!(key.expose(), "0xdeadbeef");
    }
}
