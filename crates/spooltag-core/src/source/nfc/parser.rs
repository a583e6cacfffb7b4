use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::trace;

use crate::source::{SourceError, TagSource};
use crate::tag::{Block, TagDump, TagType};

use super::error::NfcDumpError;
use super::layout;
use super::reader::{parse_block_line, parse_tag_type};

/// Tag source backed by an NFC dump file.
pub struct NfcFileSource {
    text: String,
}

impl NfcFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path).map_err(SourceError::from)?;
        Ok(Self { text })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TagSource for NfcFileSource {
    fn read_tag(&mut self) -> Result<TagDump, SourceError> {
        parse_nfc_dump(&self.text).map_err(SourceError::from)
    }
}

/// Parse the text of an NFC dump into a tag dump.
///
/// Header lines other than the tag type are ignored, as are blank lines and
/// `#` comments. Blocks that are not listed stay zeroed.
///
/// # Examples
/// ```
/// use spooltag_core::{TagType, parse_nfc_dump};
///
/// let dump = parse_nfc_dump("Mifare Classic type: 1K\nBlock 2: 50 4C 41 ?? 00\n")?;
/// assert_eq!(dump.tag_type(), TagType::Classic1k);
/// assert_eq!(&dump.block(2)?[..4], b"PLA\0");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns `NfcDumpError` for a missing or unknown tag type, malformed block
/// lines, duplicate blocks, or blocks beyond the declared tag size.
pub fn parse_nfc_dump(text: &str) -> Result<TagDump, NfcDumpError> {
    let mut tag_type: Option<TagType> = None;
    let mut blocks: BTreeMap<usize, (usize, Block)> = BTreeMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(layout::COMMENT_PREFIX) {
            continue;
        }

        if let Some(label) = trimmed.strip_prefix(layout::TAG_TYPE_PREFIX) {
            tag_type = Some(parse_tag_type(line, label)?);
        } else if let Some(rest) = trimmed.strip_prefix(layout::BLOCK_PREFIX) {
            let (index, block) = parse_block_line(line, rest)?;
            trace!(line, index, "dump block parsed");
            if blocks.insert(index, (line, block)).is_some() {
                return Err(NfcDumpError::DuplicateBlock { line, index });
            }
        }
    }

    let tag_type = tag_type.ok_or(NfcDumpError::MissingTagType)?;
    let mut dump = TagDump::new(tag_type);
    for (index, (line, block)) in blocks {
        dump.set_block(index, block)
            .map_err(|_| NfcDumpError::BlockIndexOutOfRange {
                line,
                index,
                blocks: tag_type.block_count(),
            })?;
    }
    Ok(dump)
}

#[cfg(test)]
mod tests {
    use super::{NfcFileSource, parse_nfc_dump};
    use crate::source::nfc::error::NfcDumpError;
    use crate::source::{SourceError, TagSource};
    use crate::tag::TagType;

    const HEADER: &str = "Filetype: Flipper NFC device\n\
        Version: 4\n\
        # Device type can be ISO14443-3A, ISO14443-3B, ISO14443-4A, NTAG/Ultralight, Mifare Classic\n\
        Device type: Mifare Classic\n\
        UID: 75 88 6B 1D\n\
        ATQA: 00 04\n\
        SAK: 08\n";

    #[test]
    fn parses_header_and_blocks() {
        let text = format!(
            "{HEADER}Mifare Classic type: 1K\nData format version: 2\n\
             Block 0: 75 88 6B 1D 8B 08 04 00 04 A6 A1 0D 5F 6D 90 00\n\
             Block 1: 41 30 30 2D 52 33 00 00 47 46 41 30 30 00 00 00\n"
        );
        let dump = parse_nfc_dump(&text).unwrap();
        assert_eq!(dump.tag_type(), TagType::Classic1k);
        assert_eq!(dump.block_count(), 64);
        assert_eq!(&dump.block(1).unwrap()[8..13], b"GFA00");
        assert_eq!(dump.block(63).unwrap(), &[0u8; 16]);
    }

    #[test]
    fn type_may_follow_blocks() {
        let dump = parse_nfc_dump("Block 10: 00 00 00 00 8C 0C\nMifare Classic type: 1K\n").unwrap();
        assert_eq!(&dump.block(10).unwrap()[4..6], &[0x8C, 0x0C]);
    }

    #[test]
    fn missing_type_is_an_error() {
        let err = parse_nfc_dump(HEADER).unwrap_err();
        assert!(matches!(err, NfcDumpError::MissingTagType));
    }

    #[test]
    fn block_beyond_tag_size_is_an_error() {
        let err = parse_nfc_dump("Mifare Classic type: MINI\nBlock 20: 00\n").unwrap_err();
        assert!(matches!(
            err,
            NfcDumpError::BlockIndexOutOfRange {
                line: 2,
                index: 20,
                blocks: 20
            }
        ));
    }

    #[test]
    fn duplicate_block_is_an_error() {
        let err = parse_nfc_dump("Mifare Classic type: 1K\nBlock 4: 00\nBlock 4: 01\n").unwrap_err();
        assert!(matches!(err, NfcDumpError::DuplicateBlock { line: 3, index: 4 }));
    }

    #[test]
    fn source_maps_parse_errors() {
        let mut source = NfcFileSource::from_text("Mifare Classic type: 2K\n");
        let err = source.read_tag().unwrap_err();
        assert!(matches!(err, SourceError::Dump(ref msg) if msg.contains("unsupported")));
    }
}
