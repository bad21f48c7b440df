#![no_main]
use libfuzzer_sys::fuzz_target;
use lsp2_codec::url::{decode_verified_url, encode_verified_url};

fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = decode_verified_url(data) {
        // Unknown selectors don't survive a round trip, they're written back as 0x00000000
        if decoded.verification.method.is_known() {
            let input = lsp2_codec::VerificationInput {
                method: Some(decoded.verification.method),
                data: Some(decoded.verification.data),
            };
            assert_eq!(encode_verified_url(Some(&input), &decoded.url), data);
        }
    }
});
