//! Hex encoded JSON-RPC quantities, `"0x1b4"`.

use crate::prelude::*;

use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid hex quantity {bad_value}")]
pub struct InvalidQuantity {
    pub bad_value: String,
}

fn hex_digits(quantity: &str) -> Result<&str, InvalidQuantity> {
    quantity
        .strip_prefix("0x")
        .filter(|digits| !digits.is_empty())
        .ok_or_else(|| InvalidQuantity {
            bad_value: quantity.to_owned(),
        })
}

pub fn parse_quantity_u64(quantity: &str) -> Result<u64, InvalidQuantity> {
    let digits = hex_digits(quantity)?;
    u64::from_str_radix(digits, 16).map_err(|_| InvalidQuantity {
        bad_value: quantity.to_owned(),
    })
}

pub fn parse_quantity_u256(quantity: &str) -> Result<U256, InvalidQuantity> {
    let digits = hex_digits(quantity)?;
    U256::from_str_radix(digits, 16).map_err(|_| InvalidQuantity {
        bad_value: quantity.to_owned(),
    })
}

pub fn format_quantity(value: u64) -> String {
    format!("{value:#x}")
}

pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_quantity(*value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let quantity = String::deserialize(deserializer)?;
    parse_quantity_u64(&quantity).map_err(D::Error::custom)
}

/// `null` for pending logs.
pub fn deserialize_option<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|quantity| parse_quantity_u64(&quantity).map_err(D::Error::custom))
        .transpose()
}
