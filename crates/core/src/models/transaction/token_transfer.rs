use crate::prelude::*;

use alloy_rlp::{Encodable, Header};

// Later we might change this into a tagged union if we want to support more transaction types.
pub type Transaction = TokenTransferTransaction;

pub type ChainId = u64;

/// A legacy (type 0) value transfer with empty calldata, signed with the
/// EIP-155 replay protection scheme.
#[derive(Debug, Clone, Builder, Getters, PartialEq, Eq, Hash, derive_more::Display)]
#[display("Transfer {{ to: {}, value: {}, nonce: {} }}", to, value, nonce)]
pub struct TokenTransferTransaction {
    #[getset(get = "pub")]
    to: EthAccountId,

    #[getset(get = "pub")]
    value: U256,

    #[getset(get = "pub")]
    nonce: Nonce,

    #[getset(get = "pub")]
    gas_price: U256,

    #[getset(get = "pub")]
    gas_limit: u64,

    #[getset(get = "pub")]
    chain_id: ChainId,
}

/// RLP encoded transaction ready for `eth_sendRawTransaction`.
#[derive(Debug, Clone, Getters, PartialEq, Eq)]
pub struct SignedTransaction {
    #[getset(get = "pub")]
    raw: Vec<u8>,

    #[getset(get = "pub")]
    hash: TxHash,
}

fn be_bytes(value: U256) -> [u8; 32] {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    buf
}

/// RLP integers are big endian without leading zeros.
fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

fn rlp_list(fields: &[&dyn Encodable]) -> Vec<u8> {
    let payload_length = fields.iter().map(|f| f.length()).sum();
    let header = Header {
        list: true,
        payload_length,
    };
    let mut out = Vec::with_capacity(header.length() + payload_length);
    header.encode(&mut out);
    for field in fields {
        field.encode(&mut out);
    }
    out
}

const EMPTY_CALLDATA: &[u8] = &[];

impl Transaction {
    /// `rlp([nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0])`
    pub fn signing_payload(&self) -> Vec<u8> {
        let gas_price = be_bytes(self.gas_price);
        let value = be_bytes(self.value);
        rlp_list(&[
            &self.nonce,
            &trim_leading_zeros(&gas_price),
            &self.gas_limit,
            &self.to.0,
            &trim_leading_zeros(&value),
            &EMPTY_CALLDATA,
            &self.chain_id,
            &0u8,
            &0u8,
        ])
    }

    pub fn signing_hash(&self) -> EthHash {
        EthHash::keccak(self.signing_payload())
    }

    pub fn sign(&self, signer: &EthereumSigner) -> SignedTransaction {
        let signature = signer.sign_prehashed(&self.signing_hash());
        let v = u64::from(signature.recovery_id) + self.chain_id * 2 + 35;
        let gas_price = be_bytes(self.gas_price);
        let value = be_bytes(self.value);
        let raw = rlp_list(&[
            &self.nonce,
            &trim_leading_zeros(&gas_price),
            &self.gas_limit,
            &self.to.0,
            &trim_leading_zeros(&value),
            &EMPTY_CALLDATA,
            &v,
            &trim_leading_zeros(&signature.r),
            &trim_leading_zeros(&signature.s),
        ]);
        let hash = EthHash::keccak(&raw);
        trace!("Signed {self} as {hash}");
        SignedTransaction { raw, hash }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    /// The worked example from EIP-155.
    fn eip155_example() -> Transaction {
        Transaction::builder()
            .nonce(9)
            .gas_price(parse_gwei("20").unwrap())
            .gas_limit(21000)
            .to(EthAccountId::from_str("0x3535353535353535353535353535353535353535").unwrap())
            .value(parse_ether("1").unwrap())
            .chain_id(1)
            .build()
    }

    #[test]
    fn signing_payload_matches_eip155() {
        assert_eq!(
            hex::encode(eip155_example().signing_payload()),
            "ec098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a764000080018080"
        );
    }

    #[test]
    fn signing_hash_matches_eip155() {
        assert_eq!(
            eip155_example().signing_hash().to_string(),
            "0xdaf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53"
        );
    }

    #[test]
    fn signed_transaction_matches_eip155() {
        let signer = EthereumSigner::from_private_key_hex(&"46".repeat(32)).unwrap();
        let signed = eip155_example().sign(&signer);
        assert_eq!(
            hex::encode(signed.raw()),
            "f86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
        );
        assert_eq!(*signed.hash(), EthHash::keccak(signed.raw()));
    }

    #[test]
    fn zero_value_encodes_as_empty_string() {
        let tx = Transaction::builder()
            .nonce(0)
            .gas_price(U256::zero())
            .gas_limit(0)
            .to(EthAccountId::default())
            .value(U256::zero())
            .chain_id(0)
            .build();
        let payload = tx.signing_payload();
        // list header, three empty ints, 21 byte address, empty value and data, three empty ints
        assert_eq!(payload.len(), 1 + 3 + 21 + 2 + 3);
        assert_eq!(payload[0], 0xc0 + 29);
    }

    #[test]
    fn display_is_compact() {
        let tx = eip155_example();
        assert_eq!(
            tx.to_string(),
            format!("Transfer {{ to: {}, value: 1000000000000000000, nonce: 9 }}", tx.to())
        );
    }
}
