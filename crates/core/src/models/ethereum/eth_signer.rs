use crate::prelude::*;

use sp_core::{ecdsa, Pair};

/// A recoverable secp256k1 signature split into its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// `0` or `1`
    pub recovery_id: u8,
}

impl From<ecdsa::Signature> for EthSignature {
    fn from(signature: ecdsa::Signature) -> Self {
        let bytes = signature.0;
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self {
            r,
            s,
            recovery_id: bytes[64],
        }
    }
}

#[derive(Clone, derive_more::Debug, Getters)]
#[debug("EthereumSigner({})", account_id)]
pub struct EthereumSigner {
    #[getset(get = "pub")]
    account_id: EthAccountId,
    signer: ecdsa::Pair,
}

impl std::hash::Hash for EthereumSigner {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.account_id.hash(state);
    }
}
impl Eq for EthereumSigner {}
impl PartialEq for EthereumSigner {
    fn eq(&self, other: &Self) -> bool {
        self.account_id == other.account_id
    }
}

impl EthereumSigner {
    fn from_pair(pair: ecdsa::Pair) -> Result<Self, InvalidPrivateKey> {
        let account_id = EthAccountId::from_public(&pair.public())?;
        Ok(Self {
            account_id,
            signer: pair,
        })
    }

    /// Parses a 32 byte secret given as hex, with or without a `0x` prefix.
    pub fn from_private_key_hex(private_key: &str) -> Result<Self, InvalidPrivateKey> {
        let trimmed = private_key.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let seed = hex::decode(digits).map_err(|_| InvalidPrivateKey::NotHex)?;
        if seed.len() != 32 {
            return Err(InvalidPrivateKey::WrongLength { len: seed.len() });
        }
        let pair = ecdsa::Pair::from_seed_slice(&seed).map_err(|_| InvalidPrivateKey::NotOnCurve)?;
        Self::from_pair(pair)
    }

    pub fn sign_prehashed(&self, hash: &EthHash) -> EthSignature {
        self.signer.sign_prehashed(&hash.0).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_address_from_private_key() {
        let signer = EthereumSigner::from_private_key_hex(
            "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
        )
        .unwrap();
        assert_eq!(
            signer.account_id().to_string(),
            "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23"
        );
    }

    #[test]
    fn prefix_is_optional() {
        let a = EthereumSigner::from_private_key_hex(&"46".repeat(32)).unwrap();
        let b = EthereumSigner::from_private_key_hex(&format!("0x{}", "46".repeat(32))).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.account_id().to_string(),
            "0x9d8A62f656a8d1615C1294fd71e9CFb3E4855A4F"
        );
    }

    #[test]
    fn rejects_short_key() {
        assert_eq!(
            EthereumSigner::from_private_key_hex("0x1234").unwrap_err(),
            InvalidPrivateKey::WrongLength { len: 2 }
        );
    }

    #[test]
    fn rejects_non_hex_key() {
        assert_eq!(
            EthereumSigner::from_private_key_hex("not a key").unwrap_err(),
            InvalidPrivateKey::NotHex
        );
    }

    #[test]
    fn rejects_zero_scalar() {
        assert_eq!(
            EthereumSigner::from_private_key_hex(&"00".repeat(32)).unwrap_err(),
            InvalidPrivateKey::NotOnCurve
        );
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let signer = EthereumSigner::from_private_key_hex(&"46".repeat(32)).unwrap();
        let debug = format!("{signer:?}");
        assert!(debug.starts_with("EthereumSigner(0x"));
        assert!(!debug.contains(&"46".repeat(32)));
    }
}
