//! C-ABI entry points for hosts that load the decoder across a foreign-call boundary.
//!
//! A successful result owns a heap buffer that must be handed back through
//! [`free_result`]. Failure results never own memory.

use crate::result::DecodeResult;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::{ptr, slice};

/// Fixed-layout decode outcome: `{ success, size, data }`.
///
/// `data` is null whenever `success` is false, and after the buffer was released.
#[repr(C)]
#[derive(Debug)]
pub struct DecompressionResult {
    pub success: bool,
    pub size: usize,
    pub data: *mut u8,
}

impl DecompressionResult {
    const fn failure() -> Self {
        Self {
            success: false,
            size: 0,
            data: ptr::null_mut(),
        }
    }
}

impl From<DecodeResult> for DecompressionResult {
    fn from(result: DecodeResult) -> Self {
        match result.into_vec() {
            Some(data) => {
                // A boxed slice has no spare capacity, so `size` alone is enough to free it.
                let boxed = data.into_boxed_slice();
                let size = boxed.len();
                Self {
                    success: true,
                    size,
                    data: Box::into_raw(boxed).cast::<u8>(),
                }
            }
            None => Self::failure(),
        }
    }
}

/// Decodes `input_len` bytes at `input` into a new buffer of `size` bytes.
///
/// A null `input` with `input_len == 0` is the empty-input success.
///
/// # Safety
///
/// `input` must be null or valid for reads of `input_len` bytes for the whole call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decompress_external(
    input: *const u8,
    input_len: usize,
    size: usize,
) -> DecompressionResult {
    if input.is_null() {
        if input_len == 0 {
            return DecodeResult::Success(Vec::new()).into();
        }
        log::debug!("lzjb: null input pointer with length {input_len}");
        return DecompressionResult::failure();
    }

    // SAFETY: the caller guarantees `input` is readable for `input_len` bytes.
    let input = unsafe { slice::from_raw_parts(input, input_len) };
    DecodeResult::decode(input, size).into()
}

/// Releases the buffer owned by `result` and clears its handle.
///
/// Null pointers, failure results and already-released results are ignored.
///
/// # Safety
///
/// `result` must be null or point to a valid `DecompressionResult` whose `data`
/// and `size` are either as returned by [`decompress_external`] or already
/// cleared by a previous call to this function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_result(result: *mut DecompressionResult) {
    // SAFETY: the caller guarantees `result` is null or valid for writes.
    let Some(result) = (unsafe { result.as_mut() }) else {
        return;
    };
    if !result.success || result.data.is_null() {
        return;
    }

    let raw = ptr::slice_from_raw_parts_mut(result.data, result.size);
    // SAFETY: `data`/`size` come from `Box::into_raw` on a boxed slice of exactly `size` bytes.
    drop(unsafe { Box::from_raw(raw) });

    result.data = ptr::null_mut();
    result.size = 0;
}
