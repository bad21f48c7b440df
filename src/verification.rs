use std::fmt;
use std::sync::OnceLock;

use alloy_primitives::{keccak256, B256};
use serde::{Deserialize, Serialize};

/// Name of the default verification method, used whenever raw JSON content is hashed.
pub const KECCAK256_UTF8: &str = "keccak256(utf8)";
/// Name of the verification method for hashing arbitrary bytes.
pub const KECCAK256_BYTES: &str = "keccak256(bytes)";
/// What a decoded verification method reports when its selector isn't registered.
pub const UNKNOWN_METHOD: &str = "unknown";
/// Selector written when no known verification method applies.
pub const NO_METHOD_SELECTOR: [u8; 4] = [0u8; 4];

/// A hashing scheme used to commit to the content behind a URL.
///
/// Each known method is identified on-chain by a 4-byte selector: the first 4 bytes of the
/// keccak256 hash of the method's name. Anything else is [`VerificationMethod::Unknown`], which is
/// never an error. It only means the hash can't be checked by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationMethod {
    /// `keccak256(utf8)`: keccak256 over the UTF-8 text of the content.
    Keccak256Utf8,
    /// `keccak256(bytes)`: keccak256 over the raw content bytes.
    Keccak256Bytes,
    /// Unregistered or absent method.
    Unknown,
}

fn registry() -> &'static [(VerificationMethod, [u8; 4]); 2] {
    static REGISTRY: OnceLock<[(VerificationMethod, [u8; 4]); 2]> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let sel = |name: &str| {
            let mut out = [0u8; 4];
            out.copy_from_slice(&keccak256(name.as_bytes())[..4]);
            out
        };
        [
            (VerificationMethod::Keccak256Utf8, sel(KECCAK256_UTF8)),
            (VerificationMethod::Keccak256Bytes, sel(KECCAK256_BYTES)),
        ]
    })
}

impl VerificationMethod {
    /// The method's registered name, or `"unknown"`.
    pub fn name(&self) -> &'static str {
        match self {
            VerificationMethod::Keccak256Utf8 => KECCAK256_UTF8,
            VerificationMethod::Keccak256Bytes => KECCAK256_BYTES,
            VerificationMethod::Unknown => UNKNOWN_METHOD,
        }
    }

    /// The 4-byte selector written on-chain. Unknown methods use `0x00000000`.
    pub fn selector(&self) -> [u8; 4] {
        registry()
            .iter()
            .find(|(m, _)| m == self)
            .map(|(_, sel)| *sel)
            .unwrap_or(NO_METHOD_SELECTOR)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VerificationMethod::Unknown)
    }

    /// Look up a method by its on-chain selector.
    pub fn from_selector(selector: &[u8]) -> VerificationMethod {
        registry()
            .iter()
            .find(|(_, sel)| sel[..] == *selector)
            .map(|(m, _)| *m)
            .unwrap_or(VerificationMethod::Unknown)
    }

    /// Look up a method by either its name or its `0x`-prefixed selector.
    pub fn lookup(name_or_selector: &str) -> VerificationMethod {
        if let Some(m) = registry().iter().map(|(m, _)| *m).find(|m| m.name() == name_or_selector) {
            return m;
        }
        match crate::utils::parse_hex(name_or_selector) {
            Ok(sel) if sel.len() == 4 && name_or_selector.starts_with("0x") => {
                VerificationMethod::from_selector(&sel)
            }
            _ => VerificationMethod::Unknown,
        }
    }

    /// Hash raw content with this method. Unknown methods can't hash anything.
    pub fn hash(&self, data: &[u8]) -> Option<B256> {
        match self {
            VerificationMethod::Keccak256Utf8 | VerificationMethod::Keccak256Bytes => {
                Some(keccak256(data))
            }
            VerificationMethod::Unknown => None,
        }
    }

    /// Hash JSON content. A JSON string is hashed as its own text; anything else is hashed as its
    /// compact serialization, with object keys in insertion order.
    pub fn hash_json(&self, json: &serde_json::Value) -> Option<B256> {
        match json {
            serde_json::Value::String(s) => self.hash(s.as_bytes()),
            other => self.hash(other.to_string().as_bytes()),
        }
    }
}

impl Default for VerificationMethod {
    fn default() -> Self {
        VerificationMethod::Keccak256Utf8
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for VerificationMethod {
    fn from(s: String) -> Self {
        VerificationMethod::lookup(&s)
    }
}

impl From<&str> for VerificationMethod {
    fn from(s: &str) -> Self {
        VerificationMethod::lookup(s)
    }
}

impl From<VerificationMethod> for String {
    fn from(m: VerificationMethod) -> Self {
        m.name().to_string()
    }
}

/// A verification method together with the hash it produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verification {
    pub method: VerificationMethod,
    pub data: B256,
}

impl Verification {
    pub fn new(method: VerificationMethod, data: B256) -> Self {
        Self { method, data }
    }

    /// Check that `content` hashes to the stored data. Always false for unknown methods.
    pub fn verify(&self, content: &[u8]) -> bool {
        self.method.hash(content).map_or(false, |h| h == self.data)
    }
}
