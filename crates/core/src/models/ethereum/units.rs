use crate::prelude::*;

pub const ETHER_DECIMALS: usize = 18;
pub const GWEI_DECIMALS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAmount {
    #[error("Amount {bad_value} is not a decimal number")]
    NotDecimal { bad_value: String },

    #[error("Amount {bad_value} has more than {decimals} fractional digits")]
    TooPrecise { bad_value: String, decimals: usize },

    #[error("Amount {bad_value} does not fit in 256 bits")]
    Overflow { bad_value: String },
}

/// Parses a decimal string like `"0.000001"` into base units, scaling by
/// `10^decimals`.
pub fn parse_units(amount: &str, decimals: usize) -> Result<U256, InvalidAmount> {
    let trimmed = amount.trim();
    let (integer, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction) {
        return Err(InvalidAmount::NotDecimal {
            bad_value: amount.to_owned(),
        });
    }
    if fraction.len() > decimals {
        return Err(InvalidAmount::TooPrecise {
            bad_value: amount.to_owned(),
            decimals,
        });
    }
    let digits = format!("{integer}{fraction:0<decimals$}");
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(digits).map_err(|_| InvalidAmount::Overflow {
        bad_value: amount.to_owned(),
    })
}

pub fn parse_ether(amount: &str) -> Result<U256, InvalidAmount> {
    parse_units(amount, ETHER_DECIMALS)
}

pub fn parse_gwei(amount: &str) -> Result<U256, InvalidAmount> {
    parse_units(amount, GWEI_DECIMALS)
}

fn split_digits(value: U256, decimals: usize) -> (String, String) {
    let digits = format!("{:0>width$}", value.to_string(), width = decimals + 1);
    let (integer, fraction) = digits.split_at(digits.len() - decimals);
    (integer.to_owned(), fraction.to_owned())
}

/// Formats base units as a decimal string with trailing fractional zeros
/// removed, `"1.5"`, `"0.000001"`, `"12"`.
pub fn format_units(value: U256, decimals: usize) -> String {
    let (integer, fraction) = split_digits(value, decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

/// Formats wei with exactly `places` fractional digits, rounding half up.
pub fn format_ether_fixed(wei: U256, places: usize) -> String {
    let places = places.min(ETHER_DECIMALS);
    let scale = U256::exp10(ETHER_DECIMALS - places);
    let half = scale / U256::from(2u8);
    let rounded = wei.saturating_add(half) / scale;
    if places == 0 {
        return rounded.to_string();
    }
    let (integer, fraction) = split_digits(rounded, places);
    format!("{integer}.{fraction}")
}
