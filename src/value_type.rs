//! Value types: the concrete byte encodings an ERC725Y value can be stored in.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::abi::{self, ParamType, Token};
use crate::error::{Error, Result};
use crate::packed;
use crate::utils;
use crate::value::Value;

/// Every value type this crate can encode and decode.
///
/// Parsed from the schema's `valueType` string with [`FromStr`], and rendered back with
/// [`Display`](fmt::Display). `boolean` and `boolean[]` are accepted as aliases of `bool` and
/// `bool[]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    String,
    Address,
    Uint128,
    Uint256,
    Bytes32,
    Bytes4,
    Bytes,
    BoolArray,
    StringArray,
    AddressArray,
    Uint256Array,
    Bytes32Array,
    Bytes4Array,
    BytesArray,
    /// `bytes[CompactBytesArray]`
    CompactBytes,
    /// `string[CompactBytesArray]`
    CompactString,
    /// `bytesN[CompactBytesArray]`, holding the element width in bytes (1 through 32).
    CompactFixedBytes(u8),
    /// `uintM[CompactBytesArray]`, holding the element width in bits (8 through 256).
    CompactUint(u16),
}

fn compact_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(bytes|uint)(\d{1,3})\[CompactBytesArray\]$").expect("pattern is valid")
    })
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use self::ValueType::*;
        Ok(match s {
            "bool" | "boolean" => Bool,
            "string" => String,
            "address" => Address,
            "uint128" => Uint128,
            "uint256" => Uint256,
            "bytes32" => Bytes32,
            "bytes4" => Bytes4,
            "bytes" => Bytes,
            "bool[]" | "boolean[]" => BoolArray,
            "string[]" => StringArray,
            "address[]" => AddressArray,
            "uint256[]" => Uint256Array,
            "bytes32[]" => Bytes32Array,
            "bytes4[]" => Bytes4Array,
            "bytes[]" => BytesArray,
            "bytes[CompactBytesArray]" => CompactBytes,
            "string[CompactBytesArray]" => CompactString,
            _ => {
                let unknown = || Error::UnknownValueType(s.to_string());
                let caps = compact_regex().captures(s).ok_or_else(unknown)?;
                let size: u16 = caps[2].parse().map_err(|_| unknown())?;
                match &caps[1] {
                    "bytes" if (1..=32).contains(&size) => CompactFixedBytes(size as u8),
                    "uint" if (8..=256).contains(&size) && size % 8 == 0 => CompactUint(size),
                    _ => return Err(unknown()),
                }
            }
        })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ValueType::*;
        match self {
            Bool => f.write_str("bool"),
            String => f.write_str("string"),
            Address => f.write_str("address"),
            Uint128 => f.write_str("uint128"),
            Uint256 => f.write_str("uint256"),
            Bytes32 => f.write_str("bytes32"),
            Bytes4 => f.write_str("bytes4"),
            Bytes => f.write_str("bytes"),
            BoolArray => f.write_str("bool[]"),
            StringArray => f.write_str("string[]"),
            AddressArray => f.write_str("address[]"),
            Uint256Array => f.write_str("uint256[]"),
            Bytes32Array => f.write_str("bytes32[]"),
            Bytes4Array => f.write_str("bytes4[]"),
            BytesArray => f.write_str("bytes[]"),
            CompactBytes => f.write_str("bytes[CompactBytesArray]"),
            CompactString => f.write_str("string[CompactBytesArray]"),
            CompactFixedBytes(n) => write!(f, "bytes{}[CompactBytesArray]", n),
            CompactUint(m) => write!(f, "uint{}[CompactBytesArray]", m),
        }
    }
}

/// Bytes for a `bytes4`/`bytes32` input. Hex strings are taken as bytes, any other string as its
/// UTF-8 text, and numbers as their shortest big-endian form.
fn fixed_bytes_input(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Str(s) if !utils::is_hex_string(s) => Ok(s.as_bytes().to_vec()),
        Value::Int(v) => Ok(utils::uint_to_min_bytes(*v)),
        other => other.to_hex_bytes(),
    }
}

fn fits(data: Vec<u8>, max: usize) -> Result<Vec<u8>> {
    if data.len() > max {
        return Err(Error::ValueTooLarge {
            max,
            actual: data.len(),
        });
    }
    Ok(data)
}

fn element_fits(index: usize, data: Vec<u8>, max: usize) -> Result<Vec<u8>> {
    if data.len() > max {
        return Err(Error::ElementTooLarge {
            index,
            max,
            actual: data.len(),
        });
    }
    Ok(data)
}

fn token_to_value(token: Token) -> Value {
    match token {
        Token::Bool(b) => Value::Bool(b),
        Token::String(s) => Value::Str(s),
        Token::Address(a) => Value::Address(a),
        Token::Uint(v) => Value::Int(v),
        Token::FixedBytes(b) | Token::Bytes(b) => Value::Bin(b),
        Token::Array(items) => Value::Array(items.into_iter().map(token_to_value).collect()),
    }
}

fn string_input(value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(s.clone()),
        Value::Int(v) => Ok(v.to_string()),
        other => Err(other.mismatch("string")),
    }
}

impl ValueType {
    /// ABI type of each element, for the plain dynamic-array types.
    fn array_element(&self) -> Option<ParamType> {
        use self::ValueType::*;
        Some(match self {
            BoolArray => ParamType::Bool,
            StringArray => ParamType::String,
            AddressArray => ParamType::Address,
            Uint256Array => ParamType::Uint(256),
            Bytes32Array => ParamType::FixedBytes(32),
            Bytes4Array => ParamType::FixedBytes(4),
            BytesArray => ParamType::Bytes,
            _ => return None,
        })
    }

    /// True for the `[CompactBytesArray]` types.
    pub fn is_compact(&self) -> bool {
        use self::ValueType::*;
        matches!(
            self,
            CompactBytes | CompactString | CompactFixedBytes(_) | CompactUint(_)
        )
    }

    /// True for every array type, packed or ABI-encoded.
    pub fn is_array(&self) -> bool {
        self.is_compact() || self.array_element().is_some()
    }

    fn array_token(&self, element: &ParamType, index: usize, value: &Value) -> Result<Token> {
        Ok(match element {
            ParamType::Bool => Token::Bool(value.as_bool().ok_or_else(|| value.mismatch("boolean"))?),
            ParamType::String => Token::String(string_input(value)?),
            ParamType::Address => Token::Address(value.to_address()?),
            ParamType::Uint(_) => Token::Uint(value.to_uint()?),
            ParamType::FixedBytes(n) => {
                Token::FixedBytes(element_fits(index, value.to_hex_bytes()?, *n)?)
            }
            _ => Token::Bytes(value.to_hex_bytes()?),
        })
    }

    /// Encode a value into raw bytes.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        use self::ValueType::*;
        match self {
            Bool => {
                let b = value.as_bool().ok_or_else(|| value.mismatch("boolean"))?;
                Ok(vec![b as u8])
            }
            String => Ok(string_input(value)?.into_bytes()),
            Address => Ok(value.to_address()?.to_vec()),
            Uint128 => {
                let v = value.to_uint()?;
                if v.bit_len() > 128 {
                    return Err(Error::ValueTooLarge {
                        max: 16,
                        actual: v.byte_len(),
                    });
                }
                Ok(abi::encode(&Token::Uint(v))[16..].to_vec())
            }
            Uint256 => Ok(abi::encode(&Token::Uint(value.to_uint()?))),
            Bytes32 => {
                let data = fits(fixed_bytes_input(value)?, 32)?;
                Ok(abi::encode(&Token::FixedBytes(data)))
            }
            Bytes4 => {
                let data = fits(fixed_bytes_input(value)?, 4)?;
                Ok(abi::encode(&Token::FixedBytes(data))[..4].to_vec())
            }
            Bytes => value.to_hex_bytes(),
            BoolArray | StringArray | AddressArray | Uint256Array | Bytes32Array | Bytes4Array
            | BytesArray => {
                let element = self
                    .array_element()
                    .ok_or_else(|| Error::UnknownValueType(self.to_string()))?;
                let tokens = value
                    .to_array()?
                    .iter()
                    .enumerate()
                    .map(|(i, v)| self.array_token(&element, i, v))
                    .collect::<Result<Vec<_>>>()?;
                Ok(abi::encode(&Token::Array(tokens)))
            }
            CompactBytes | CompactFixedBytes(_) => {
                let items = value
                    .to_array()?
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        v.to_hex_bytes().map_err(|e| match e {
                            Error::InvalidEncoding(_) => Error::InvalidEncoding(format!(
                                "value at index {} is not hex",
                                i
                            )),
                            e => e,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                match self {
                    CompactFixedBytes(n) => packed::encode_packed_fixed(&items, *n as usize),
                    _ => packed::encode_packed(&items),
                }
            }
            CompactString => {
                let strings = value
                    .to_array()?
                    .iter()
                    .map(string_input)
                    .collect::<Result<Vec<_>>>()?;
                packed::encode_packed_strings(&strings)
            }
            CompactUint(bits) => {
                let values = value
                    .to_array()?
                    .iter()
                    .map(Value::to_uint)
                    .collect::<Result<Vec<_>>>()?;
                packed::encode_packed_uint(&values, *bits as usize / 8)
            }
        }
    }

    /// Decode a `0x`-prefixed hex string into a value.
    ///
    /// `bool` never fails: exactly `0x01` is `true`, and anything else is `false`.
    pub fn decode(&self, data: &str) -> Result<Value> {
        use self::ValueType::*;
        let bytes = match self {
            Bool => Vec::new(),
            _ => utils::parse_hex(data)?,
        };
        match self {
            Bool => Ok(Value::Bool(data == "0x01")),
            String => Ok(Value::Str(std::string::String::from_utf8(bytes)?)),
            Address => {
                if bytes.len() != 20 {
                    return Err(Error::InvalidAddress(data.to_string()));
                }
                Ok(Value::Address(alloy_primitives::Address::from_slice(&bytes)))
            }
            Uint128 => Ok(Value::Int(utils::uint_from_be(&bytes, 16)?)),
            Uint256 => Ok(Value::Int(utils::uint_from_be(&bytes, 32)?)),
            Bytes32 => {
                let data = fits(bytes, 32)?;
                Ok(token_to_value(abi::decode(&ParamType::FixedBytes(32), &data)?))
            }
            Bytes4 => {
                // Push it back through the encoder so short input comes out padded to 4 bytes.
                let data = fits(bytes, 4)?;
                let word = abi::encode(&Token::FixedBytes(data));
                Ok(token_to_value(abi::decode(&ParamType::FixedBytes(4), &word)?))
            }
            Bytes => Ok(Value::Bin(bytes)),
            BoolArray | StringArray | AddressArray | Uint256Array | Bytes32Array | Bytes4Array
            | BytesArray => {
                let element = self
                    .array_element()
                    .ok_or_else(|| Error::UnknownValueType(self.to_string()))?;
                let token = abi::decode(&ParamType::Array(Box::new(element)), &bytes)?;
                Ok(token_to_value(token))
            }
            CompactBytes => Ok(packed::decode_packed(&bytes)?.into_iter().collect()),
            CompactString => Ok(packed::decode_packed_strings(&bytes)?.into_iter().collect()),
            CompactFixedBytes(n) => Ok(packed::decode_packed_fixed(&bytes, *n as usize)?
                .into_iter()
                .collect()),
            CompactUint(bits) => Ok(packed::decode_packed_uint(&bytes, *bits as usize / 8)?
                .into_iter()
                .collect()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::{hex, U256};

    fn enc(ty: &str, value: impl Into<Value>) -> Result<String> {
        let ty: ValueType = ty.parse()?;
        Ok(utils::to_hex(&ty.encode(&value.into())?))
    }

    fn dec(ty: &str, data: &str) -> Result<Value> {
        ty.parse::<ValueType>()?.decode(data)
    }

    fn word(hex_str: &str) -> String {
        format!("{:0>64}", hex_str)
    }

    mod parsing {
        use super::*;

        #[test]
        fn display_roundtrip() {
            for key in [
                "bool",
                "string",
                "address",
                "uint128",
                "uint256",
                "bytes32",
                "bytes4",
                "bytes",
                "bool[]",
                "string[]",
                "address[]",
                "uint256[]",
                "bytes32[]",
                "bytes4[]",
                "bytes[]",
                "bytes[CompactBytesArray]",
                "string[CompactBytesArray]",
                "bytes1[CompactBytesArray]",
                "bytes32[CompactBytesArray]",
                "uint8[CompactBytesArray]",
                "uint256[CompactBytesArray]",
            ] {
                let ty: ValueType = key.parse().unwrap();
                assert_eq!(ty.to_string(), key);
            }
        }

        #[test]
        fn aliases() {
            assert_eq!("boolean".parse::<ValueType>().unwrap(), ValueType::Bool);
            assert_eq!("boolean[]".parse::<ValueType>().unwrap(), ValueType::BoolArray);
        }

        #[test]
        fn unknown() {
            for key in [
                "uint64",
                "bytes33[CompactBytesArray]",
                "bytes0[CompactBytesArray]",
                "uint7[CompactBytesArray]",
                "uint264[CompactBytesArray]",
                "address[CompactBytesArray]",
                "Bytes",
                "",
            ] {
                assert_eq!(
                    key.parse::<ValueType>(),
                    Err(Error::UnknownValueType(key.to_string())),
                    "{} should not parse",
                    key
                );
            }
        }

        #[test]
        fn array_kinds() {
            assert!(ValueType::AddressArray.is_array());
            assert!(!ValueType::AddressArray.is_compact());
            assert!(ValueType::CompactUint(8).is_array());
            assert!(!ValueType::Bytes.is_array());
        }
    }

    mod scalars {
        use super::*;

        #[test]
        fn bool() {
            assert_eq!(enc("bool", true).unwrap(), "0x01");
            assert_eq!(enc("boolean", false).unwrap(), "0x00");
            assert_eq!(dec("bool", "0x01").unwrap(), Value::Bool(true));
            assert_eq!(dec("bool", "0x00").unwrap(), Value::Bool(false));
            // Lenient: anything that isn't exactly 0x01 is false
            assert_eq!(dec("bool", "0xff").unwrap(), Value::Bool(false));
            assert_eq!(dec("bool", "nonsense").unwrap(), Value::Bool(false));
            assert!(matches!(enc("bool", "true"), Err(Error::TypeMismatch { .. })));
        }

        #[test]
        fn string() {
            assert_eq!(enc("string", "hey!").unwrap(), "0x68657921");
            assert_eq!(enc("string", 12u8).unwrap(), "0x3132");
            assert_eq!(dec("string", "0x68657921").unwrap(), Value::from("hey!"));
            assert!(matches!(dec("string", "0xff"), Err(Error::InvalidEncoding(_))));
        }

        #[test]
        fn address() {
            let checksummed = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
            assert_eq!(
                enc("address", checksummed).unwrap(),
                checksummed.to_lowercase()
            );
            let decoded = dec("address", &checksummed.to_lowercase()).unwrap();
            assert_eq!(decoded.as_address().unwrap().to_checksum(None), checksummed);
            assert!(matches!(
                enc("address", "0x1234"),
                Err(Error::InvalidAddress(_))
            ));
            assert!(matches!(dec("address", "0x1234"), Err(Error::InvalidAddress(_))));
        }

        #[test]
        fn uint128() {
            assert_eq!(enc("uint128", 5u8).unwrap(), format!("0x{:0>32}", "5"));
            assert_eq!(
                dec("uint128", &format!("0x{:0>32}", "5")).unwrap(),
                Value::Int(U256::from(5))
            );
            assert_eq!(
                enc("uint128", U256::from(u128::MAX) + U256::from(1)),
                Err(Error::ValueTooLarge { max: 16, actual: 17 })
            );
            assert_eq!(
                dec("uint128", &format!("0x{:0>34}", "5")),
                Err(Error::ValueTooLarge { max: 16, actual: 17 })
            );
        }

        #[test]
        fn uint256() {
            assert_eq!(enc("uint256", 1u8).unwrap(), format!("0x{}", word("1")));
            assert_eq!(enc("uint256", "0x0a").unwrap(), format!("0x{}", word("a")));
            assert_eq!(dec("uint256", "0x0a").unwrap(), Value::Int(U256::from(10)));
            assert_eq!(
                dec("uint256", &format!("0x{:0>66}", "1")),
                Err(Error::ValueTooLarge { max: 32, actual: 33 })
            );
            assert!(matches!(dec("uint256", "0xgg"), Err(Error::InvalidEncoding(_))));
            assert!(matches!(
                enc("uint256", "lots"),
                Err(Error::InvalidNumericValue(_))
            ));
        }

        #[test]
        fn bytes4() {
            assert_eq!(enc("bytes4", "0xcafe").unwrap(), "0xcafe0000");
            assert_eq!(enc("bytes4", "hey!").unwrap(), "0x68657921");
            assert_eq!(enc("bytes4", 0x0102u16).unwrap(), "0x01020000");
            assert_eq!(
                enc("bytes4", "0x0102030405"),
                Err(Error::ValueTooLarge { max: 4, actual: 5 })
            );
            assert_eq!(
                dec("bytes4", "0xcafe").unwrap(),
                Value::Bin(vec![0xca, 0xfe, 0, 0])
            );
            assert_eq!(
                dec("bytes4", "0x0102030405"),
                Err(Error::ValueTooLarge { max: 4, actual: 5 })
            );
        }

        #[test]
        fn bytes32() {
            let full = format!("0x{}", "ab".repeat(32));
            assert_eq!(enc("bytes32", full.as_str()).unwrap(), full);
            assert_eq!(
                enc("bytes32", "0xab").unwrap(),
                format!("0xab{}", "0".repeat(62))
            );
            assert_eq!(
                dec("bytes32", &full).unwrap(),
                Value::Bin(vec![0xab; 32])
            );
            assert_eq!(
                dec("bytes32", &format!("0x{}", "ab".repeat(33))),
                Err(Error::ValueTooLarge { max: 32, actual: 33 })
            );
            assert!(matches!(dec("bytes32", "0xab"), Err(Error::InvalidEncoding(_))));
        }

        #[test]
        fn bytes() {
            assert_eq!(enc("bytes", "0xDEADbeef").unwrap(), "0xdeadbeef");
            assert_eq!(enc("bytes", vec![1u8, 2]).unwrap(), "0x0102");
            assert_eq!(dec("bytes", "0xdeadbeef").unwrap(), Value::Bin(vec![0xde, 0xad, 0xbe, 0xef]));
        }
    }

    mod arrays {
        use super::*;

        #[test]
        fn uint256_array() {
            let value: Value = [1u64, 2, 3].into_iter().collect();
            let encoded = enc("uint256[]", value.clone()).unwrap();
            assert_eq!(
                encoded,
                format!("0x{}{}{}{}{}", word("20"), word("3"), word("1"), word("2"), word("3"))
            );
            assert_eq!(dec("uint256[]", &encoded).unwrap(), value);
        }

        #[test]
        fn address_array() {
            let a = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
            let b = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
            let value: Value = [a, b].into_iter().collect();
            let encoded = enc("address[]", value).unwrap();
            let decoded = dec("address[]", &encoded).unwrap();
            let addrs: Vec<_> = decoded
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_address().unwrap().to_checksum(None))
                .collect();
            assert_eq!(addrs, vec![a.to_string(), b.to_string()]);
        }

        #[test]
        fn string_and_bool_arrays() {
            let strings: Value = ["a", "bc", ""].into_iter().collect();
            let encoded = enc("string[]", strings.clone()).unwrap();
            assert_eq!(dec("string[]", &encoded).unwrap(), strings);

            let bools: Value = [true, false].into_iter().collect();
            let encoded = enc("boolean[]", bools.clone()).unwrap();
            assert_eq!(dec("bool[]", &encoded).unwrap(), bools);
        }

        #[test]
        fn bytes4_array() {
            let value: Value = ["0xcafecafe", "0x01020304"].into_iter().collect();
            let encoded = enc("bytes4[]", value).unwrap();
            assert_eq!(
                dec("bytes4[]", &encoded).unwrap(),
                Value::Array(vec![
                    Value::Bin(vec![0xca, 0xfe, 0xca, 0xfe]),
                    Value::Bin(vec![1, 2, 3, 4]),
                ])
            );
            let too_big: Value = ["0x01", "0x0102030405"].into_iter().collect();
            assert_eq!(
                enc("bytes4[]", too_big),
                Err(Error::ElementTooLarge {
                    index: 1,
                    max: 4,
                    actual: 5
                })
            );
        }

        #[test]
        fn bytes_array() {
            let value = Value::Array(vec![Value::Bin(vec![1, 2, 3]), Value::Bin(vec![])]);
            let encoded = enc("bytes[]", value.clone()).unwrap();
            assert_eq!(dec("bytes[]", &encoded).unwrap(), value);
        }

        #[test]
        fn not_an_array() {
            assert!(matches!(
                enc("uint256[]", 5u8),
                Err(Error::TypeMismatch {
                    expected: "array",
                    actual: "Int"
                })
            ));
        }
    }

    mod compact {
        use super::*;

        #[test]
        fn bytes() {
            let value: Value = ["0xaabbccdd", "0xcafecafecafecafecafecafecafecafe", "0xff"]
                .into_iter()
                .collect();
            let encoded = enc("bytes[CompactBytesArray]", value).unwrap();
            assert_eq!(
                encoded,
                "0x0004aabbccdd0010cafecafecafecafecafecafecafecafe0001ff"
            );
            assert_eq!(
                dec("bytes[CompactBytesArray]", &encoded).unwrap(),
                Value::Array(vec![
                    Value::Bin(hex::decode("aabbccdd").unwrap()),
                    Value::Bin(hex::decode("cafecafecafecafecafecafecafecafe").unwrap()),
                    Value::Bin(vec![0xff]),
                ])
            );
        }

        #[test]
        fn bytes_not_hex() {
            let value: Value = ["0xaa", "zz"].into_iter().collect();
            assert_eq!(
                enc("bytes[CompactBytesArray]", value),
                Err(Error::InvalidEncoding(
                    "value at index 1 is not hex".to_string()
                ))
            );
        }

        #[test]
        fn truncated() {
            assert!(matches!(
                dec("bytes[CompactBytesArray]", "0x0004aabbcc"),
                Err(Error::MalformedPackedArray { .. })
            ));
        }

        #[test]
        fn fixed_bytes() {
            let value: Value = ["0xaabb", "0xcc"].into_iter().collect();
            let encoded = enc("bytes2[CompactBytesArray]", value).unwrap();
            assert_eq!(encoded, "0x0002aabb0001cc");
            let too_big: Value = ["0xaabbcc"].into_iter().collect();
            assert_eq!(
                enc("bytes2[CompactBytesArray]", too_big),
                Err(Error::ElementTooLarge {
                    index: 0,
                    max: 2,
                    actual: 3
                })
            );
        }

        #[test]
        fn uint() {
            let value: Value = [1u64, 2, 3].into_iter().collect();
            let encoded = enc("uint8[CompactBytesArray]", value.clone()).unwrap();
            assert_eq!(encoded, "0x000101000102000103");
            assert_eq!(dec("uint8[CompactBytesArray]", &encoded).unwrap(), value);

            let encoded = enc("uint16[CompactBytesArray]", value.clone()).unwrap();
            assert_eq!(encoded, "0x000200010002000200020003");

            let overflow: Value = [1u64, 256, 3].into_iter().collect();
            assert_eq!(
                enc("uint8[CompactBytesArray]", overflow),
                Err(Error::ElementTooLarge {
                    index: 1,
                    max: 1,
                    actual: 2
                })
            );
        }

        #[test]
        fn strings() {
            let value: Value = ["one", "two", ""].into_iter().collect();
            let encoded = enc("string[CompactBytesArray]", value.clone()).unwrap();
            assert_eq!(encoded, "0x00036f6e65000374776f0000");
            assert_eq!(dec("string[CompactBytesArray]", &encoded).unwrap(), value);
        }
    }

    #[test]
    fn reencode_is_identical() {
        let cases = [
            ("string", "0x68657921".to_string()),
            ("bytes", "0xdeadbeef".to_string()),
            ("bytes4", "0xcafecafe".to_string()),
            ("bytes32", format!("0x{}", "12".repeat(32))),
            ("uint256", format!("0x{}", word("2a"))),
            ("uint128", format!("0x{:0>32}", "2a")),
            ("bool", "0x01".to_string()),
            ("uint256[]", format!("0x{}{}{}", word("20"), word("1"), word("7"))),
            ("bytes[CompactBytesArray]", "0x0002aabb0000".to_string()),
            ("uint32[CompactBytesArray]", "0x00040000000a".to_string()),
            ("string[CompactBytesArray]", "0x000161".to_string()),
        ];
        for (ty, data) in cases {
            let value = dec(ty, &data).unwrap();
            assert_eq!(enc(ty, value).unwrap(), data, "{} should re-encode identically", ty);
        }
    }
}
