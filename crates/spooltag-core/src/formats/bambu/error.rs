use thiserror::Error;

use crate::tag::{TagError, TagType};

/// The admission check that rejected a tag.
///
/// # Examples
/// ```
/// use spooltag_core::formats::bambu::error::Rejection;
///
/// let rejection = Rejection::ImplausibleDiameter { diameter: 0.5 };
/// assert!(rejection.to_string().contains("implausible filament diameter"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("unsupported tag type: {found}")]
    WrongTagType { found: TagType },
    #[error("material id does not start with \"GF\"")]
    MissingMaterialPrefix,
    #[error("unknown filament type")]
    UnknownFilamentType,
    #[error("detailed type is not printable ASCII")]
    DetailedTypeNotPrintable,
    #[error("implausible filament diameter: {diameter} mm")]
    ImplausibleDiameter { diameter: f32 },
}

/// Errors returned by spool decoding.
///
/// `NotRecognized` is a data-dependent outcome: the tag is simply not a spool
/// tag and retrying will not help. `Tag` means the dump could not even be
/// inspected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpoolError {
    #[error("not a recognised spool tag: {0}")]
    NotRecognized(Rejection),
    #[error("malformed tag dump: {0}")]
    Tag(#[from] TagError),
}

impl From<Rejection> for SpoolError {
    fn from(value: Rejection) -> Self {
        SpoolError::NotRecognized(value)
    }
}
