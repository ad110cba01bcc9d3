#![no_main]

use libfuzzer_sys::fuzz_target;
use rlzjb::{DecodeResult, decompress, decompress_into};

/// Verifies that the decoder safely handles arbitrary, potentially malformed input.
///
/// The first two bytes choose the target size; the rest is the stream.
///
/// # Invariant
/// Every success yields exactly `target_len` bytes (or none for an empty stream),
/// and the append form agrees with the owned form without touching the prefix on error.
fn verify_decompression_robustness(data: &[u8]) {
    if data.len() < 2 {
        return;
    }
    let target_len = u16::from_le_bytes([data[0], data[1]]) as usize;
    let stream = &data[2..];

    let owned = decompress(stream, target_len);
    if let Ok(ref out) = owned {
        let expected = if stream.is_empty() { 0 } else { target_len };
        assert_eq!(out.len(), expected, "Success with wrong length");
    }

    let mut appended = b"prefix".to_vec();
    let result = decompress_into(stream, target_len, &mut appended);
    assert_eq!(result.is_ok(), owned.is_ok());
    assert_eq!(&appended[..6], b"prefix");
    match owned {
        Ok(out) => assert_eq!(&appended[6..], &out[..]),
        Err(_) => assert_eq!(appended.len(), 6, "Partial output leaked on error"),
    }

    let packaged = DecodeResult::decode(stream, target_len);
    assert_eq!(packaged.is_success(), result.is_ok());
}

fuzz_target!(|data: &[u8]| {
    verify_decompression_robustness(data);
});
