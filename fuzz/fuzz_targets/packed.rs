#![no_main]
use libfuzzer_sys::fuzz_target;
use lsp2_codec::packed::{decode_packed, encode_packed};

fuzz_target!(|data: &[u8]| {
    if let Ok(items) = decode_packed(data) {
        assert_eq!(encode_packed(&items).unwrap(), data);
    }
});
