use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Input exhausted before the target size was reached")]
    TruncatedInput,

    #[error("Back-reference points before the start of the output")]
    CorruptReference,

    #[error("Token extends past the end of the input")]
    OversizedToken,

    #[error("Back-reference with zero distance or zero length")]
    InvalidToken,
}
