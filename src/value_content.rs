//! Value content: the meaning layered on top of a value type.
//!
//! A value content picks an underlying [`ValueType`] and adds its own checks on the way in and
//! out: `Address` validates checksums, `Number` takes decimal input, `JSONURL` builds a verified
//! URL frame, and so on. A content key starting with `0x` is a literal constant that the stored
//! value must match exactly.
//!
//! Decoding `Bytes{N}`, `Bytes` and `BitArray` content is lenient. Data that is the wrong shape for
//! those is logged and comes back as [`Decoded::Tolerated`] rather than as an error.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::url::{self, UrlSource};
use crate::utils;
use crate::value::Value;
use crate::value_type::ValueType;
use crate::ALLOWED_BYTES_SIZES;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueContent {
    Keccak256,
    Number,
    Address,
    String,
    Markdown,
    /// `URL`
    Url,
    /// `AssetURL`
    AssetUrl,
    /// `JSONURL`
    JsonUrl,
    /// `Bytes` with no length: any byte string.
    Bytes,
    /// `Bytes{N}`: a byte string of exactly `N` bytes. Only the sizes in
    /// [`ALLOWED_BYTES_SIZES`] can be encoded.
    BytesN(usize),
    BitArray,
    Boolean,
    /// A constant, `0x`-prefixed value the stored data has to equal.
    Literal(String),
}

fn bytes_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Bytes([1-9]\d*)$").expect("pattern is valid"))
}

impl FromStr for ValueContent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use self::ValueContent::*;
        if s.starts_with("0x") {
            return Ok(Literal(s.to_string()));
        }
        Ok(match s {
            "Keccak256" => Keccak256,
            "Number" => Number,
            "Address" => Address,
            "String" => String,
            "Markdown" => Markdown,
            "URL" => Url,
            "AssetURL" => AssetUrl,
            "JSONURL" => JsonUrl,
            "Bytes" => Bytes,
            "BitArray" => BitArray,
            "Boolean" => Boolean,
            _ => {
                let unknown = || Error::UnknownValueContent(s.to_string());
                let caps = bytes_regex().captures(s).ok_or_else(unknown)?;
                BytesN(caps[1].parse().map_err(|_| unknown())?)
            }
        })
    }
}

impl fmt::Display for ValueContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ValueContent::*;
        match self {
            Keccak256 => f.write_str("Keccak256"),
            Number => f.write_str("Number"),
            Address => f.write_str("Address"),
            String => f.write_str("String"),
            Markdown => f.write_str("Markdown"),
            Url => f.write_str("URL"),
            AssetUrl => f.write_str("AssetURL"),
            JsonUrl => f.write_str("JSONURL"),
            Bytes => f.write_str("Bytes"),
            BytesN(n) => write!(f, "Bytes{}", n),
            BitArray => f.write_str("BitArray"),
            Boolean => f.write_str("Boolean"),
            Literal(s) => f.write_str(s),
        }
    }
}

/// Result of decoding value content.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// The data decoded cleanly. Empty data decodes to [`Value::Null`].
    Value(Value),
    /// The data didn't fit the content, but that isn't treated as an error. Holds the diagnostic
    /// that was logged.
    Tolerated(String),
}

impl Decoded {
    /// The decoded value, with tolerated results turned into [`Value::Null`].
    pub fn into_value(self) -> Value {
        match self {
            Decoded::Value(v) => v,
            Decoded::Tolerated(_) => Value::Null,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Decoded::Value(v) => Some(v),
            Decoded::Tolerated(_) => None,
        }
    }

    pub fn is_tolerated(&self) -> bool {
        matches!(self, Decoded::Tolerated(_))
    }
}

impl From<Value> for Decoded {
    fn from(v: Value) -> Self {
        Decoded::Value(v)
    }
}

fn tolerate(content: &ValueContent, diagnostic: String) -> Decoded {
    tracing::warn!(
        target: "lsp2_codec",
        value_content = %content,
        "{}",
        diagnostic
    );
    Decoded::Tolerated(diagnostic)
}

/// Hex data for the byte-string contents. Strings must be `0x`-prefixed hex.
fn hex_input(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Str(s) if !utils::is_hex_string(s) => {
            Err(Error::InvalidEncoding(format!("value \"{}\" is not hex", s)))
        }
        Value::Str(s) => utils::parse_hex(s),
        Value::Bin(b) => Ok(b.clone()),
        other => Err(other.mismatch("hex data")),
    }
}

/// The supplied value, if it's a string equal to the constant.
fn match_constant<'a>(constant: &str, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::Str(s) if s == constant => Ok(s.as_str()),
        other => Err(Error::ConstantMismatch {
            expected: constant.to_string(),
            actual: match other {
                Value::Str(s) => s.clone(),
                other => other.name().to_string(),
            },
        }),
    }
}

fn url_input(value: &Value) -> Result<UrlSource> {
    match value {
        Value::Url(source) => Ok(source.clone()),
        Value::VerifiedUrl(decoded) => Ok(UrlSource::from(decoded.clone())),
        other => Err(other.mismatch("object")),
    }
}

impl ValueContent {
    /// The value type this content is stored as. `None` for the verified URL frames and for
    /// literal constants.
    pub fn value_type(&self) -> Option<ValueType> {
        use self::ValueContent::*;
        match self {
            Keccak256 => Some(ValueType::Bytes32),
            Number => Some(ValueType::Uint256),
            Address => Some(ValueType::Address),
            String | Markdown | Url => Some(ValueType::String),
            Bytes | BytesN(_) | BitArray => Some(ValueType::Bytes),
            Boolean => Some(ValueType::Bool),
            AssetUrl | JsonUrl | Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ValueContent::Literal(_))
    }

    /// Encode a value into `0x`-prefixed hex.
    ///
    /// Literal content returns the matched constant exactly as written, so it keeps its case and
    /// needn't be whole bytes. Everything else is the lowercase hex of [`encode`](Self::encode).
    pub fn encode_hex(&self, value: &Value) -> Result<String> {
        match self {
            ValueContent::Literal(constant) => Ok(match_constant(constant, value)?.to_string()),
            _ => Ok(utils::to_hex(&self.encode(value)?)),
        }
    }

    /// Encode a value into raw bytes. A literal constant must be whole-byte hex to have a byte
    /// form.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        use self::ValueContent::*;
        match self {
            Literal(constant) => utils::parse_hex(match_constant(constant, value)?),
            Keccak256 => hex_input(value),
            Number => {
                let n = match value {
                    Value::Int(v) => *v,
                    Value::Str(s) if !s.trim().starts_with("0x") => utils::parse_uint(s)?,
                    Value::Str(s) => return Err(Error::InvalidNumericValue(s.clone())),
                    other => return Err(other.mismatch("unsigned integer")),
                };
                Ok(n.to_be_bytes::<32>().to_vec())
            }
            Address => Ok(value.to_address()?.to_vec()),
            String | Markdown | Url => ValueType::String.encode(value),
            AssetUrl => url::encode_asset_url(&url_input(value)?),
            JsonUrl => url::encode_json_url(&url_input(value)?),
            Bytes | BitArray => hex_input(value),
            BytesN(n) => {
                let data = hex_input(value)?;
                if !ALLOWED_BYTES_SIZES.contains(n) {
                    return Err(Error::UnsupportedBytesLength(*n));
                }
                if data.len() > *n {
                    return Err(Error::ValueTooLarge {
                        max: *n,
                        actual: data.len(),
                    });
                }
                if data.len() < *n {
                    return Err(Error::InvalidEncoding(format!(
                        "Bytes{} needs exactly {} bytes, got {}",
                        n,
                        n,
                        data.len()
                    )));
                }
                Ok(data)
            }
            Boolean => ValueType::Bool.encode(value),
        }
    }

    /// Decode a `0x`-prefixed hex string.
    ///
    /// Literal content decodes to the constant when `data` matches it exactly and to
    /// [`Value::Null`] otherwise. All other content expects non-empty data.
    pub fn decode(&self, data: &str) -> Result<Decoded> {
        use self::ValueContent::*;
        Ok(Decoded::Value(match self {
            Literal(constant) => {
                if data == constant {
                    Value::Str(constant.clone())
                } else {
                    Value::Null
                }
            }
            Keccak256 => Value::Bin(utils::parse_hex(data)?),
            Number => Value::Int(utils::uint_from_be(&utils::parse_hex(data)?, 32)?),
            Address => ValueType::Address.decode(data)?,
            String | Markdown | Url => ValueType::String.decode(data)?,
            AssetUrl | JsonUrl => {
                Value::VerifiedUrl(url::decode_verified_url(&utils::parse_hex(data)?)?)
            }
            Bytes | BitArray | BytesN(_) => {
                if !utils::is_hex_string(data) {
                    return Ok(tolerate(self, format!("Value: {} is not hex", data)));
                }
                let bytes = utils::parse_hex(data)?;
                if let BytesN(n) = self {
                    if !ALLOWED_BYTES_SIZES.contains(n) {
                        return Ok(tolerate(
                            self,
                            format!("Bytes length {} for valueContent {} is not valid", n, self),
                        ));
                    }
                    if bytes.len() != *n {
                        return Ok(tolerate(
                            self,
                            format!(
                                "Value: {} is not of type {}, expected {} bytes",
                                data, self, n
                            ),
                        ));
                    }
                }
                Value::Bin(bytes)
            }
            // The bool decoder can't fail, so this mapping never fires; anything that isn't
            // exactly 0x01 reads as false.
            Boolean => ValueType::Bool.decode(data).map_err(|_| Error::TypeMismatch {
                expected: "boolean",
                actual: "hex data",
            })?,
        }))
    }
}
