use sp_core::{ecdsa, keccak_256, H160};

use crate::prelude::*;

/// A 20 byte Ethereum address.
#[derive(Eq, PartialEq, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct EthAccountId(pub [u8; 20]);

impl_serde::impl_fixed_hash_serde!(EthAccountId, 20);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid hex address {bad_value}")]
pub struct InvalidAddress {
    pub bad_value: String,
}

/// EIP-55 mixed-case checksum encoding.
impl std::fmt::Display for EthAccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let address = hex::encode(self.0);
        let address_hash = hex::encode(keccak_256(address.as_bytes()));

        let checksum = address.chars().zip(address_hash.chars()).fold(
            String::from("0x"),
            |mut acc, (address_char, hash_char)| {
                // make char uppercase if the matching hash nibble is 8..f
                if hash_char.to_digit(16).unwrap_or_default() > 7 {
                    acc.push(address_char.to_ascii_uppercase())
                } else {
                    acc.push(address_char)
                }
                acc
            },
        );
        write!(f, "{checksum}")
    }
}

impl core::fmt::Debug for EthAccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", H160(self.0))
    }
}

impl EthAccountId {
    /// Derives the address of a secp256k1 key: the last 20 bytes of the
    /// keccak hash of the uncompressed public key without its `0x04` tag.
    pub fn from_public(public: &ecdsa::Public) -> Result<Self, InvalidPrivateKey> {
        let decompressed = libsecp256k1::PublicKey::parse_compressed(&public.0)
            .map_err(|_| InvalidPrivateKey::NotOnCurve)?
            .serialize();
        let mut m = [0u8; 64];
        m.copy_from_slice(&decompressed[1..65]);
        Ok(H160::from_slice(&keccak_256(&m)[12..]).into())
    }

    /// The address left-padded to 32 bytes, as it appears in an indexed
    /// event topic.
    pub fn to_topic(&self) -> EthHash {
        let mut topic = [0u8; 32];
        topic[12..].copy_from_slice(&self.0);
        EthHash(topic)
    }
}

impl From<[u8; 20]> for EthAccountId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<EthAccountId> for [u8; 20] {
    fn from(value: EthAccountId) -> Self {
        value.0
    }
}

impl From<H160> for EthAccountId {
    fn from(h160: H160) -> Self {
        Self(h160.0)
    }
}

impl From<EthAccountId> for H160 {
    fn from(value: EthAccountId) -> Self {
        H160(value.0)
    }
}

impl std::str::FromStr for EthAccountId {
    type Err = InvalidAddress;

    /// Accepts 40 hex chars with or without `0x`, in any letter case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidAddress {
            bad_value: input.to_owned(),
        };
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }
}
