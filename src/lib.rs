//! lsp2-codec encodes and decodes the values stored under ERC725Y keys, following the LSP2 JSON
//! schema vocabulary. A schema describes each key with a *value type*, the concrete byte encoding
//! (`uint256`, `address[]`, `bytes4[CompactBytesArray]`, ...), and a *value content*, the meaning
//! layered on top of it (`Address`, `Number`, `JSONURL`, ...).
//!
//! It provides:
//!
//! - Encoding and decoding for every LSP2 value type, including the Solidity ABI scalar and
//! 	dynamic array types, and the non-ABI `[CompactBytesArray]` packed format
//! - Encoding and decoding for every LSP2 value content, including verified URLs that commit to
//! 	the hash of the content they point at
//! - Lenient decoding where LSP2 calls for it: content that doesn't fit its declared shape is
//! 	logged and reported as [`Decoded::Tolerated`] instead of failing the whole read
//!
//! All byte strings cross the API as `0x`-prefixed hex, and everything the encoders return is
//! lowercase apart from literal constants, which come back exactly as written.
//!
//! ```
//! use lsp2_codec::{decode_value_content, encode_value_content, Value};
//!
//! let encoded = encode_value_content("Number", &Value::from(1u8)).unwrap();
//! assert_eq!(encoded, format!("0x{:0>64}", "1"));
//! let decoded = decode_value_content("Number", &encoded).unwrap().into_value();
//! assert_eq!(decoded, Value::from(1u8));
//! ```
//!
//! Diagnostics are emitted through [`tracing`] under the `lsp2_codec` target. The crate never
//! installs a subscriber.

pub mod abi;
mod error;
pub mod formats;
pub mod packed;
pub mod url;
mod utils;
mod value;
mod value_content;
mod value_type;
pub mod verification;

pub use self::error::{Error, Result};
pub use self::url::{UrlSource, UrlWithHash, VerificationInput};
pub use self::value::Value;
pub use self::value_content::{Decoded, ValueContent};
pub use self::value_type::ValueType;
pub use self::verification::{Verification, VerificationMethod};

/// The largest element a packed array can hold, set by its 2-byte length prefix.
pub const MAX_PACKED_ELEMENT_LEN: usize = u16::MAX as usize;
/// Length of the fixed part of a verified URL: a 4-byte method selector and a 32-byte hash.
pub const VERIFIED_URL_HEADER_LEN: usize = 4 + 32;
/// The `N` values accepted by `Bytes{N}` value content.
pub const ALLOWED_BYTES_SIZES: [usize; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

fn is_empty_data(data: &str) -> bool {
    data.is_empty() || data == "0x"
}

/// Encode a value as the given value type.
///
/// The type key is checked first, so an unknown type fails even for a null value. A
/// [`Value::Null`] is passed through as `None` rather than being encoded.
pub fn encode_value_type(value_type: &str, value: &Value) -> Result<Option<String>> {
    let ty: ValueType = value_type.parse()?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(utils::to_hex(&ty.encode(value)?)))
}

/// Decode hex data stored as the given value type. Empty data (`0x`) decodes to
/// [`Value::Null`].
pub fn decode_value_type(value_type: &str, data: &str) -> Result<Value> {
    let ty: ValueType = value_type.parse()?;
    if is_empty_data(data) {
        return Ok(Value::Null);
    }
    ty.decode(data)
}

/// Encode a value as the given value content.
///
/// A content key starting with `0x` is a constant: the value must be a string equal to it.
/// Otherwise a [`Value::Null`] encodes to the empty `0x`, and a bare string is refused for
/// `AssetURL`, `JSONURL` and `Boolean` content.
pub fn encode_value_content(value_content: &str, value: &Value) -> Result<String> {
    let content: ValueContent = value_content.parse()?;
    if !content.is_literal() {
        if value.is_null() {
            return Ok("0x".to_string());
        }
        if let Value::Str(_) = value {
            match &content {
                ValueContent::AssetUrl | ValueContent::JsonUrl => {
                    return Err(value.mismatch("object"))
                }
                ValueContent::Boolean => return Err(value.mismatch("boolean")),
                _ => (),
            }
        }
    }
    content.encode_hex(value)
}

/// Decode hex data stored as the given value content.
///
/// Empty data (`0x`) decodes to [`Value::Null`], except for constant content keys, which only
/// compare the data against themselves.
pub fn decode_value_content(value_content: &str, data: &str) -> Result<Decoded> {
    let content: ValueContent = value_content.parse()?;
    if !content.is_literal() && is_empty_data(data) {
        return Ok(Decoded::Value(Value::Null));
    }
    content.decode(data)
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::U256;

    mod types {
        use super::*;

        #[test]
        fn null_passthrough() {
            assert_eq!(encode_value_type("uint256", &Value::Null), Ok(None));
            assert_eq!(decode_value_type("uint256", "0x"), Ok(Value::Null));
            assert_eq!(decode_value_type("bool", ""), Ok(Value::Null));
        }

        #[test]
        fn unknown_first() {
            assert_eq!(
                encode_value_type("uint64", &Value::Null),
                Err(Error::UnknownValueType("uint64".to_string()))
            );
            assert_eq!(
                decode_value_type("uint64", "0x"),
                Err(Error::UnknownValueType("uint64".to_string()))
            );
        }

        #[test]
        fn encodes() {
            assert_eq!(
                encode_value_type("bytes4", &Value::from("0xcafe")),
                Ok(Some("0xcafe0000".to_string()))
            );
            assert_eq!(
                encode_value_type("bytes4", &Value::from("0x0102030405")),
                Err(Error::ValueTooLarge { max: 4, actual: 5 })
            );
        }

        #[test]
        fn packed_uint_overflow() {
            let value: Value = [1u64, 256, 3].into_iter().collect();
            assert_eq!(
                encode_value_type("uint8[CompactBytesArray]", &value),
                Err(Error::ElementTooLarge {
                    index: 1,
                    max: 1,
                    actual: 2
                })
            );
        }
    }

    mod contents {
        use super::*;

        #[test]
        fn null_is_empty() {
            assert_eq!(encode_value_content("Number", &Value::Null), Ok("0x".to_string()));
            assert_eq!(
                decode_value_content("Number", "0x"),
                Ok(Decoded::Value(Value::Null))
            );
        }

        #[test]
        fn unknown() {
            assert_eq!(
                encode_value_content("Nope", &Value::Null),
                Err(Error::UnknownValueContent("Nope".to_string()))
            );
            assert_eq!(
                decode_value_content("Nope", "0x01"),
                Err(Error::UnknownValueContent("Nope".to_string()))
            );
        }

        #[test]
        fn bare_strings_refused() {
            assert_eq!(
                encode_value_content("JSONURL", &Value::from("ipfs://Qm")),
                Err(Error::TypeMismatch {
                    expected: "object",
                    actual: "Str"
                })
            );
            assert_eq!(
                encode_value_content("Boolean", &Value::from("true")),
                Err(Error::TypeMismatch {
                    expected: "boolean",
                    actual: "Str"
                })
            );
        }

        #[test]
        fn number_one() {
            let one = format!("0x{:0>64}", "1");
            assert_eq!(encode_value_content("Number", &Value::from(1u8)), Ok(one.clone()));
            assert_eq!(
                decode_value_content("Number", &one).unwrap().into_value(),
                Value::Int(U256::from(1))
            );
        }

        #[test]
        fn literal_value_unchanged() {
            assert_eq!(
                encode_value_content("0xCAFE", &Value::from("0xCAFE")),
                Ok("0xCAFE".to_string())
            );
            assert_eq!(
                encode_value_content("0xabc", &Value::from("0xabc")),
                Ok("0xabc".to_string())
            );
            assert_eq!(
                decode_value_content("0xabc", "0xabc").unwrap().into_value(),
                Value::from("0xabc")
            );
        }

        #[test]
        fn literal_checked_before_null() {
            assert!(matches!(
                encode_value_content("0xcafe", &Value::Null),
                Err(Error::ConstantMismatch { .. })
            ));
            assert_eq!(
                decode_value_content("0xcafe", "0x"),
                Ok(Decoded::Value(Value::Null))
            );
            assert_eq!(
                decode_value_content("0x", "0x"),
                Ok(Decoded::Value(Value::from("0x")))
            );
        }
    }
}
