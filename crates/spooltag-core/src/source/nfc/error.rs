use thiserror::Error;

/// Errors returned while reading an NFC dump.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum NfcDumpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing \"Mifare Classic type\" declaration")]
    MissingTagType,
    #[error("line {line}: unsupported Mifare Classic type '{label}'")]
    UnsupportedTagType { line: usize, label: String },
    #[error("line {line}: invalid block line: {message}")]
    InvalidBlockLine { line: usize, message: String },
    #[error("line {line}: invalid hex byte '{token}'")]
    InvalidHexByte { line: usize, token: String },
    #[error("line {line}: block {index} out of range for {blocks}-block tag")]
    BlockIndexOutOfRange {
        line: usize,
        index: usize,
        blocks: usize,
    },
    #[error("line {line}: block {index} listed twice")]
    DuplicateBlock { line: usize, index: usize },
}
