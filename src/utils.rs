use alloy_primitives::{hex, Address, U256};

use crate::error::{Error, Result};

/// Decode hex data, with or without a leading `0x`.
pub(crate) fn parse_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s)?)
}

/// Render bytes as `0x`-prefixed lowercase hex, the form every encoder returns.
pub(crate) fn to_hex(data: &[u8]) -> String {
    hex::encode_prefixed(data)
}

/// True only for `0x`-prefixed strings holding a whole number of hex bytes.
pub(crate) fn is_hex_string(s: &str) -> bool {
    match s.strip_prefix("0x") {
        Some(digits) => digits.len() % 2 == 0 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Parse a 20-byte address. All-lowercase and all-uppercase forms are accepted as-is; a
/// mixed-case address must carry a valid EIP-55 checksum.
pub(crate) fn parse_address(s: &str) -> Result<Address> {
    let invalid = || Error::InvalidAddress(s.to_string());
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let addr: Address = digits.parse().map_err(|_| invalid())?;
    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && addr.to_checksum(None)[2..] != *digits {
        return Err(invalid());
    }
    Ok(addr)
}

/// Parse an unsigned integer written in decimal, or in hex with a `0x` prefix.
pub(crate) fn parse_uint(s: &str) -> Result<U256> {
    let invalid = || Error::InvalidNumericValue(s.to_string());
    let trimmed = s.trim();
    if let Some(digits) = trimmed.strip_prefix("0x") {
        if digits.is_empty() {
            return Err(invalid());
        }
        return U256::from_str_radix(digits, 16).map_err(|_| invalid());
    }
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    U256::from_str_radix(trimmed, 10).map_err(|_| invalid())
}

/// Minimal big-endian bytes of an integer. Zero is a single zero byte.
pub(crate) fn uint_to_min_bytes(v: U256) -> Vec<u8> {
    let bytes = v.to_be_bytes::<32>();
    let skip = bytes.iter().take_while(|b| **b == 0).count().min(31);
    bytes[skip..].to_vec()
}

/// Read big-endian bytes as an integer, failing if they're wider than `max` bytes.
pub(crate) fn uint_from_be(data: &[u8], max: usize) -> Result<U256> {
    if data.len() > max {
        return Err(Error::ValueTooLarge {
            max,
            actual: data.len(),
        });
    }
    U256::try_from_be_slice(data).ok_or(Error::ValueTooLarge {
        max,
        actual: data.len(),
    })
}
