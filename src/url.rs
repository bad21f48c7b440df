//! Verified URLs: a URL together with a hash of the content it points at.
//!
//! On-chain the frame is `selector (4 bytes) ++ hash (32 bytes) ++ UTF-8 url`, where the selector
//! identifies the [`VerificationMethod`] that produced the hash. See
//! [`formats`](crate::formats) for the layout.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::verification::{Verification, VerificationMethod, NO_METHOD_SELECTOR};
use crate::VERIFIED_URL_HEADER_LEN;

/// A decoded verified URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlWithHash {
    pub verification: Verification,
    pub url: String,
}

/// Verification details supplied when encoding. Either part may be left out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<VerificationMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<B256>,
}

/// The source of a verified URL, as given to the encoder.
///
/// For `JSONURL` content the hash can come from `verification.data`, or be computed from `json`
/// with `keccak256(utf8)`. `AssetURL` content only takes `verification`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<serde_json::Value>,
    pub url: String,
}

impl UrlSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_verification(mut self, method: VerificationMethod, data: B256) -> Self {
        self.verification = Some(VerificationInput {
            method: Some(method),
            data: Some(data),
        });
        self
    }

    pub fn with_json(mut self, json: serde_json::Value) -> Self {
        self.json = Some(json);
        self
    }
}

impl From<UrlWithHash> for UrlSource {
    fn from(v: UrlWithHash) -> Self {
        UrlSource {
            verification: Some(VerificationInput {
                method: Some(v.verification.method),
                data: Some(v.verification.data),
            }),
            json: None,
            url: v.url,
        }
    }
}

/// Build the verified URL frame. Missing or unknown methods get the `0x00000000` selector, and a
/// missing hash is written as 32 zero bytes.
pub fn encode_verified_url(verification: Option<&VerificationInput>, url: &str) -> Vec<u8> {
    let selector = verification
        .and_then(|v| v.method)
        .map_or(NO_METHOD_SELECTOR, |m| m.selector());
    let data = verification.and_then(|v| v.data).unwrap_or(B256::ZERO);

    let mut buf = Vec::with_capacity(VERIFIED_URL_HEADER_LEN + url.len());
    buf.extend_from_slice(&selector);
    buf.extend_from_slice(data.as_slice());
    buf.extend_from_slice(url.as_bytes());
    buf
}

/// Split a verified URL frame back into its parts.
///
/// An unrecognized selector isn't an error: the method comes back as
/// [`VerificationMethod::Unknown`] and the hash and url are still returned. Frames shorter than
/// the 36-byte header fail with [`Error::MalformedFrame`].
pub fn decode_verified_url(blob: &[u8]) -> Result<UrlWithHash> {
    if blob.len() < VERIFIED_URL_HEADER_LEN {
        return Err(Error::MalformedFrame {
            actual: blob.len(),
            expected: VERIFIED_URL_HEADER_LEN,
        });
    }
    let (selector, rest) = blob.split_at(4);
    let (hash, url) = rest.split_at(32);

    let method = VerificationMethod::from_selector(selector);
    if !method.is_known() {
        tracing::debug!(
            target: "lsp2_codec",
            selector = %crate::utils::to_hex(selector),
            "unrecognized verification method selector"
        );
    }

    Ok(UrlWithHash {
        verification: Verification::new(method, B256::from_slice(hash)),
        url: std::str::from_utf8(url)?.to_string(),
    })
}

/// Encode `JSONURL` content. If `json` is given its hash is computed here, and the method must be
/// left unset; otherwise `verification.data` has to be present.
pub fn encode_json_url(source: &UrlSource) -> Result<Vec<u8>> {
    let method = source.verification.as_ref().and_then(|v| v.method);
    let mut data = source.verification.as_ref().and_then(|v| v.data);

    if let Some(json) = &source.json {
        if method.is_some() {
            return Err(Error::ConflictingVerificationInput);
        }
        data = VerificationMethod::Keccak256Utf8.hash_json(json);
    }

    let data = data.ok_or(Error::MissingVerificationData)?;
    let verification = VerificationInput {
        method: Some(method.unwrap_or(VerificationMethod::Keccak256Utf8)),
        data: Some(data),
    };
    Ok(encode_verified_url(Some(&verification), &source.url))
}

/// Encode `AssetURL` content. Raw `json` content isn't accepted here.
pub fn encode_asset_url(source: &UrlSource) -> Result<Vec<u8>> {
    if source.json.is_some() {
        return Err(Error::TypeMismatch {
            expected: "verification and url",
            actual: "json",
        });
    }
    Ok(encode_verified_url(
        source.verification.as_ref(),
        &source.url,
    ))
}
