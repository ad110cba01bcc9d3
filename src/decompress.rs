use crate::error::DecompressionError;
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecompressionError>;

// --- Constants ---

/// Number of tokens (literals or references) classified by one control byte.
const TOKENS_PER_CONTROL: usize = 8;

/// Bits of the first reference byte that carry the biased match length.
const MATCH_BITS: usize = 6;

/// Shortest match a reference can express. Stored lengths are biased by this.
pub const MIN_MATCH: usize = 3;

/// Longest match a reference can express (6 bits + 3).
pub const MAX_MATCH: usize = (1 << MATCH_BITS) - 1 + MIN_MATCH;

/// Mask for the 10-bit distance carried by a reference.
const DISTANCE_MASK: usize = (1 << (16 - MATCH_BITS)) - 1;

/// Farthest back a reference can reach.
pub const MAX_DISTANCE: usize = DISTANCE_MASK;

/// Encoded size of a back-reference token.
const REFERENCE_SIZE: usize = 2;

/// Upper bound on output bytes per input byte, used to cap the up-front reservation.
const MAX_EXPANSION: usize = MAX_MATCH / REFERENCE_SIZE;

/// Decompresses an LZJB stream into a new buffer of exactly `target_len` bytes.
///
/// The stream carries no length header, so the caller supplies the expected size.
/// Decoding stops as soon as `target_len` bytes exist, even if input remains.
/// An empty `input` is a vacuous success and yields an empty buffer.
pub fn decompress(input: &[u8], target_len: usize) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress_into(input, target_len, &mut output)?;
    Ok(output)
}

/// Decompresses an LZJB stream, appending exactly `target_len` bytes to `output`.
///
/// Back-references may only address bytes produced by this call, never data that
/// was already in `output`. On error, `output` is restored to its original length.
pub fn decompress_into(input: &[u8], target_len: usize, output: &mut Vec<u8>) -> Result<()> {
    if input.is_empty() {
        return Ok(());
    }

    // A stream cannot expand past MAX_EXPANSION, so a huge target paired with a
    // tiny input never reserves more than the input could describe.
    let bound = target_len.min(input.len().saturating_mul(MAX_EXPANSION));
    output.reserve_exact(bound);

    let start = output.len();
    match decompress_stream(input, target_len, output) {
        Ok(()) => {
            log::trace!(
                "lzjb: decoded {} bytes into {} bytes",
                input.len(),
                output.len() - start
            );
            Ok(())
        }
        Err(e) => {
            output.truncate(start);
            Err(e)
        }
    }
}

/// Walks the control-byte blocks until the target is reached or the input runs out.
fn decompress_stream(input: &[u8], target_len: usize, output: &mut Vec<u8>) -> Result<()> {
    let start = output.len();
    let target_end = start.saturating_add(target_len);
    let end = input.len();
    let mut in_pos = 0;

    while output.len() < target_end {
        if in_pos >= end {
            log::debug!(
                "lzjb: input exhausted at {} of {} output bytes",
                output.len() - start,
                target_len
            );
            return Err(DecompressionError::TruncatedInput);
        }

        // 1. Load Control Byte
        let control = input[in_pos];
        in_pos += 1;

        // --- All-Literals Fast Path ---
        // Only taken when all 8 literals are present and fit under the target.
        if control == 0
            && in_pos + TOKENS_PER_CONTROL <= end
            && output.len() + TOKENS_PER_CONTROL <= target_end
        {
            output.extend_from_slice(&input[in_pos..in_pos + TOKENS_PER_CONTROL]);
            in_pos += TOKENS_PER_CONTROL;
            continue;
        }

        // 2. Mixed Literals/References Loop
        for i in 0..TOKENS_PER_CONTROL {
            // Remaining bits of this control byte are ignored once the target is met.
            if output.len() >= target_end {
                break;
            }
            if in_pos >= end {
                log::debug!(
                    "lzjb: stream ends inside a block at {} of {} output bytes",
                    output.len() - start,
                    target_len
                );
                return Err(DecompressionError::TruncatedInput);
            }

            let is_reference = (control >> i) & 1 != 0;

            if is_reference {
                if in_pos + REFERENCE_SIZE > end {
                    log::debug!("lzjb: reference at input offset {in_pos} is cut short");
                    return Err(DecompressionError::OversizedToken);
                }

                let (length, distance) = parse_reference(input[in_pos], input[in_pos + 1]);
                let token_pos = in_pos;
                in_pos += REFERENCE_SIZE;

                // Clamp so the copy never runs past the target.
                let length = length.min(target_end - output.len());
                apply_match(output, start, length, distance).inspect_err(|e| {
                    log::debug!(
                        "lzjb: rejected reference at input offset {token_pos} \
                         (distance {distance}, {} bytes decoded): {e}",
                        output.len() - start
                    );
                })?;
            } else {
                output.push(input[in_pos]);
                in_pos += 1;
            }
        }
    }

    Ok(())
}

/// Splits a 2-byte reference into `(length, distance)`.
///
/// The top 6 bits of the first byte hold `length - 3`; the remaining 10 bits
/// (big-endian across both bytes) hold the distance.
#[inline]
const fn parse_reference(b0: u8, b1: u8) -> (usize, usize) {
    let length = (b0 >> (8 - MATCH_BITS)) as usize + MIN_MATCH;
    let distance = (((b0 as usize) << 8) | b1 as usize) & DISTANCE_MASK;
    (length, distance)
}

/// Applies a back-reference to the output buffer.
///
/// `start` marks where this stream's output begins; the reference may not reach
/// behind it. Overlapping copies (distance < length) replay bytes in emission order.
#[inline]
fn apply_match(output: &mut Vec<u8>, start: usize, length: usize, distance: usize) -> Result<()> {
    if distance == 0 || length == 0 {
        return Err(DecompressionError::InvalidToken);
    }
    if distance > output.len() - start {
        return Err(DecompressionError::CorruptReference);
    }

    let src_pos = output.len() - distance;

    // --- RLE Fast Path (Distance == 1) ---
    if distance == 1 {
        let last_byte = output[src_pos];
        output.resize(output.len() + length, last_byte);
    } else if distance >= length {
        // Source and destination do not overlap.
        output.extend_from_within(src_pos..src_pos + length);
    } else {
        for k in 0..length {
            let val = output[src_pos + k];
            output.push(val);
        }
    }

    Ok(())
}
