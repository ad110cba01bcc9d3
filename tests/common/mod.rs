//! Test-only LZJB encoder and stream builder.
//!
//! The crate ships a decoder only; these helpers produce streams to feed it.

#![allow(dead_code)]

use rlzjb::{MAX_DISTANCE, MAX_MATCH, MIN_MATCH};

/// Size of the single-entry match table (10-bit hash).
const TABLE_SIZE: usize = 1 << 10;

/// One decoded token, used to hand-build streams.
#[derive(Debug, Clone, Copy)]
pub enum Token {
    Literal(u8),
    Reference { length: usize, distance: usize },
}

/// Collects up to 8 tokens behind one control byte.
///
/// Bit `i` of the control byte is set when token `i` is a reference.
pub struct ControlAccumulator {
    control_pos: usize,
    item_count: usize,
}

impl ControlAccumulator {
    pub const fn new() -> Self {
        Self {
            control_pos: 0,
            item_count: 8,
        }
    }

    /// Starts a new block if the current one is full.
    fn begin_item(&mut self, output: &mut Vec<u8>) {
        if self.item_count == 8 {
            self.control_pos = output.len();
            output.push(0);
            self.item_count = 0;
        }
    }

    pub fn push_literal(&mut self, byte: u8, output: &mut Vec<u8>) {
        self.begin_item(output);
        output.push(byte);
        self.item_count += 1;
    }

    pub fn push_reference(&mut self, length: usize, distance: usize, output: &mut Vec<u8>) {
        assert!((MIN_MATCH..=MAX_MATCH).contains(&length), "bad length {length}");
        assert!(distance <= MAX_DISTANCE, "bad distance {distance}");
        self.begin_item(output);
        output[self.control_pos] |= 1 << self.item_count;
        output.extend_from_slice(&encode_reference(length, distance));
        self.item_count += 1;
    }
}

/// Packs `(length, distance)` into the 2-byte reference layout.
pub fn encode_reference(length: usize, distance: usize) -> [u8; 2] {
    [
        (((length - MIN_MATCH) << 2) | (distance >> 8)) as u8,
        (distance & 0xFF) as u8,
    ]
}

/// Serializes a token list into a stream.
pub fn encode_tokens(tokens: &[Token]) -> Vec<u8> {
    let mut output = Vec::new();
    let mut acc = ControlAccumulator::new();
    for token in tokens {
        match *token {
            Token::Literal(b) => acc.push_literal(b, &mut output),
            Token::Reference { length, distance } => {
                acc.push_reference(length, distance, &mut output)
            }
        }
    }
    output
}

/// Greedy single-probe encoder in the style of the ZFS reference compressor.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    let mut acc = ControlAccumulator::new();
    let mut table = [usize::MAX; TABLE_SIZE];
    let mut pos = 0;

    while pos < input.len() {
        if pos + MIN_MATCH <= input.len() {
            let h = hash_3_bytes(&input[pos..pos + MIN_MATCH]);
            let candidate = table[h];
            table[h] = pos;

            if candidate != usize::MAX && pos - candidate <= MAX_DISTANCE {
                let limit = (input.len() - pos).min(MAX_MATCH);
                let mut len = 0;
                while len < limit && input[candidate + len] == input[pos + len] {
                    len += 1;
                }
                if len >= MIN_MATCH {
                    acc.push_reference(len, pos - candidate, &mut output);
                    pos += len;
                    continue;
                }
            }
        }
        acc.push_literal(input[pos], &mut output);
        pos += 1;
    }

    output
}

fn hash_3_bytes(b: &[u8]) -> usize {
    let h = ((b[0] as usize) << 16) | ((b[1] as usize) << 8) | b[2] as usize;
    (h.wrapping_mul(2_654_435_761) >> 12) & (TABLE_SIZE - 1)
}
