use alloy_primitives::{Address, U256};

use crate::error::{Error, Result};
use crate::url::{UrlSource, UrlWithHash};
use crate::utils;

/// A value on its way into an encoder, or out of a decoder.
///
/// Encoders are loose about what they take: a `uint256` accepts an [`Int`](Value::Int) or a
/// numeric string, `bytes` accepts [`Bin`](Value::Bin) or a hex string, and so on. Decoders
/// always return the most specific variant for their type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(U256),
    Str(String),
    Address(Address),
    Bin(Vec<u8>),
    Array(Vec<Value>),
    /// Encode-side source for `JSONURL` and `AssetURL` content.
    Url(UrlSource),
    /// Decoded `JSONURL` or `AssetURL` content.
    VerifiedUrl(UrlWithHash),
}

impl Value {
    /// Short name of the variant, for error messages.
    pub fn name(&self) -> &'static str {
        use self::Value::*;
        match self {
            Null => "Null",
            Bool(_) => "Bool",
            Int(_) => "Int",
            Str(_) => "Str",
            Address(_) => "Address",
            Bin(_) => "Bin",
            Array(_) => "Array",
            Url(_) => "Url",
            VerifiedUrl(_) => "VerifiedUrl",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(val) = *self {
            Some(val)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<U256> {
        if let Value::Int(val) = *self {
            Some(val)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(ref val) = *self {
            Some(val.as_str())
        } else {
            None
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        if let Value::Address(val) = *self {
            Some(val)
        } else {
            None
        }
    }

    pub fn as_bin(&self) -> Option<&[u8]> {
        if let Value::Bin(ref val) = *self {
            Some(val.as_slice())
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(ref val) = *self {
            Some(val.as_slice())
        } else {
            None
        }
    }

    pub fn as_verified_url(&self) -> Option<&UrlWithHash> {
        if let Value::VerifiedUrl(ref val) = *self {
            Some(val)
        } else {
            None
        }
    }

    pub(crate) fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.name(),
        }
    }

    /// Byte content of a byte-string input: raw bytes, or a hex string.
    pub(crate) fn to_hex_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Value::Bin(v) => Ok(v.clone()),
            Value::Str(s) => utils::parse_hex(s),
            Value::Address(a) => Ok(a.to_vec()),
            other => Err(other.mismatch("hex data")),
        }
    }

    /// Unsigned integer input: a number, or a decimal or `0x` hex string.
    pub(crate) fn to_uint(&self) -> Result<U256> {
        match self {
            Value::Int(v) => Ok(*v),
            Value::Str(s) => utils::parse_uint(s),
            other => Err(other.mismatch("unsigned integer")),
        }
    }

    /// Address input, either typed or as a hex string.
    pub(crate) fn to_address(&self) -> Result<Address> {
        match self {
            Value::Address(a) => Ok(*a),
            Value::Str(s) => utils::parse_address(s),
            other => Err(other.mismatch("address")),
        }
    }

    /// Array input.
    pub(crate) fn to_array(&self) -> Result<&[Value]> {
        self.as_array().ok_or_else(|| self.mismatch("array"))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(U256::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(U256::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(U256::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Int(U256::from(v))
    }
}

impl From<u128> for Value {
    fn from(v: u128) -> Self {
        Value::Int(U256::from(v))
    }
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Address> for Value {
    fn from(v: Address) -> Self {
        Value::Address(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bin(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bin(v.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<UrlSource> for Value {
    fn from(v: UrlSource) -> Self {
        Value::Url(v)
    }
}

impl From<UrlWithHash> for Value {
    fn from(v: UrlWithHash) -> Self {
        Value::VerifiedUrl(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}
