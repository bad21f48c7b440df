use std::fmt;

use alloy_primitives::hex::FromHexError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The value type key isn't one this crate knows how to encode or decode.
    UnknownValueType(String),
    /// The value content key isn't one this crate knows how to encode or decode.
    UnknownValueContent(String),
    /// Data wasn't valid hex, valid UTF-8, or valid ABI-encoded data.
    InvalidEncoding(String),
    /// A value needs more bytes than its type allows.
    ValueTooLarge { max: usize, actual: usize },
    /// One element of an array needs more bytes than its element type allows.
    ElementTooLarge {
        index: usize,
        max: usize,
        actual: usize,
    },
    /// A length prefix inside a packed array pointed past the end of the data.
    MalformedPackedArray {
        offset: usize,
        expected: usize,
        actual: usize,
    },
    /// A verified URL was shorter than its fixed header.
    MalformedFrame { actual: usize, expected: usize },
    /// Value wasn't a 20-byte address, or its mixed-case checksum didn't match.
    InvalidAddress(String),
    /// Value couldn't be read as an unsigned integer.
    InvalidNumericValue(String),
    /// Value had the wrong shape for the requested encoding.
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// Both raw JSON content and an explicit verification method were given.
    ConflictingVerificationInput,
    /// Neither a verification hash nor raw JSON content was given.
    MissingVerificationData,
    /// A literal value content didn't match the supplied value.
    ConstantMismatch { expected: String, actual: String },
    /// A `Bytes{N}` value content used an `N` outside the allowed sizes.
    UnsupportedBytesLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnknownValueType(ref ty) => write!(f, "Unknown valueType: \"{}\"", ty),
            Error::UnknownValueContent(ref content) => {
                write!(f, "Unknown valueContent: \"{}\"", content)
            }
            Error::InvalidEncoding(ref err) => write!(f, "Invalid encoding: {}", err),
            Error::ValueTooLarge { max, actual } => write!(
                f,
                "Value too large: needs {} bytes, maximum allowed is {}",
                actual, max
            ),
            Error::ElementTooLarge { index, max, actual } => write!(
                f,
                "Element at index {} too large: needs {} bytes, maximum allowed is {}",
                index, actual, max
            ),
            Error::MalformedPackedArray {
                offset,
                expected,
                actual,
            } => write!(
                f,
                "Malformed packed array: element at offset {} expected {} bytes, but only {} remain",
                offset, expected, actual
            ),
            Error::MalformedFrame { actual, expected } => write!(
                f,
                "Verified URL too short: got {} bytes, header alone is {}",
                actual, expected
            ),
            Error::InvalidAddress(ref addr) => write!(f, "Address: \"{}\" is an invalid address", addr),
            Error::InvalidNumericValue(ref val) => {
                write!(f, "Value \"{}\" is not an unsigned integer", val)
            }
            Error::TypeMismatch { expected, actual } => {
                write!(f, "Expected {}, got {}", expected, actual)
            }
            Error::ConflictingVerificationInput => f.write_str(
                "When passing in `json`, \"keccak256(utf8)\" is used as the verification method; \
                 `verification.method` must not be set",
            ),
            Error::MissingVerificationData => f.write_str(
                "Either `verification.data` or `json` must be provided",
            ),
            Error::ConstantMismatch {
                ref expected,
                ref actual,
            } => write!(f, "Expected constant {}, got {}", expected, actual),
            Error::UnsupportedBytesLength(len) => {
                write!(f, "Bytes{} is not a supported valueContent length", len)
            }
        }
    }
}

impl std::error::Error for Error {}

impl std::convert::From<FromHexError> for Error {
    fn from(e: FromHexError) -> Self {
        Self::InvalidEncoding(e.to_string())
    }
}

impl std::convert::From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::InvalidEncoding(e.to_string())
    }
}

impl std::convert::From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::InvalidEncoding(e.to_string())
    }
}
