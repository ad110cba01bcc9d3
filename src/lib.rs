//! # LZJB Decompression
//!
//! `rlzjb` is a safe, pure-Rust decoder for LZJB, the LZ77-style format used by
//! ZFS and Solaris crash dumps. The stream has no header: the caller must know
//! the decompressed size and pass it in.
//!
//! ## Format
//!
//! Each block starts with a control byte. Bit `i`, counted from the least
//! significant bit, says whether token `i` is a literal byte (`0`) or a 2-byte
//! back-reference (`1`). A reference packs `length - 3` into the top 6 bits and
//! a backward distance into the low 10 bits (big-endian).
//!
//! ## Example
//!
//! ```rust
//! use rlzjb::decompress;
//!
//! // Control 0b0000_0010: literal 'a', then a reference of length 5 at distance 1.
//! let compressed = [0x02, b'a', 0x08, 0x01];
//!
//! let data = decompress(&compressed, 6).expect("Decompression failed");
//! assert_eq!(data, b"aaaaaa");
//! ```

#![no_std]
#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]
#![cfg_attr(feature = "ffi", deny(unsafe_code))]

extern crate alloc;

pub mod decompress;
pub mod error;
#[cfg(feature = "ffi")]
#[allow(unsafe_code)]
pub mod ffi;
pub mod result;

pub use decompress::{MAX_DISTANCE, MAX_MATCH, MIN_MATCH, decompress, decompress_into};
pub use error::DecompressionError;
pub use result::DecodeResult;
