mod nfc;

pub use nfc::NfcFileSource;
pub use nfc::error::NfcDumpError;
pub use nfc::parser::parse_nfc_dump;

use thiserror::Error;

use crate::tag::TagDump;

/// Anything that can produce one populated tag dump.
pub trait TagSource {
    fn read_tag(&mut self) -> Result<TagDump, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("NFC dump parse error: {0}")]
    Dump(String),
}

impl From<NfcDumpError> for SourceError {
    fn from(value: NfcDumpError) -> Self {
        match value {
            NfcDumpError::Io(err) => SourceError::Io(err),
            other => SourceError::Dump(other.to_string()),
        }
    }
}
