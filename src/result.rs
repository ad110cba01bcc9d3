use crate::decompress::decompress;
use crate::error::DecompressionError;
use alloc::vec::Vec;

/// Outcome of a decode as seen by callers that only care about success or failure.
///
/// The detailed [`DecompressionError`] is logged and dropped when a result is
/// collapsed into `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    Success(Vec<u8>),
    Failure,
}

impl DecodeResult {
    /// Decodes `input` to `target_len` bytes and packages the outcome.
    #[must_use]
    pub fn decode(input: &[u8], target_len: usize) -> Self {
        decompress(input, target_len).into()
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Number of decoded bytes; zero for a failure.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the decoded bytes; empty for a failure.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Success(data) => data,
            Self::Failure => &[],
        }
    }

    /// Takes ownership of the decoded bytes, or `None` for a failure.
    #[must_use]
    pub fn into_vec(self) -> Option<Vec<u8>> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure => None,
        }
    }

    /// Frees the buffer held by a success and leaves `Failure` behind.
    ///
    /// Releasing a failure, or releasing twice, does nothing.
    pub fn release(&mut self) {
        *self = Self::Failure;
    }
}

impl From<Result<Vec<u8>, DecompressionError>> for DecodeResult {
    fn from(result: Result<Vec<u8>, DecompressionError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => {
                log::debug!("lzjb: decode failed: {e}");
                Self::Failure
            }
        }
    }
}
