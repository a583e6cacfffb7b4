//! In-memory model of a sector-organised NFC tag dump.
//!
//! A dump is an ordered array of 16-byte blocks plus the tag variant that
//! produced it. The variant fixes the block count, so a `TagDump` always holds
//! exactly `tag_type.block_count()` blocks. Decoders borrow the dump and never
//! mutate it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of a single addressable block, in bytes.
pub const BLOCK_SIZE: usize = 16;

/// One raw storage block.
pub type Block = [u8; BLOCK_SIZE];

/// Physical capacity variant of a Mifare Classic tag.
///
/// # Examples
/// ```
/// use spooltag_core::TagType;
///
/// assert_eq!(TagType::Classic1k.block_count(), 64);
/// assert_eq!(TagType::Classic4k.block_count(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagType {
    /// Mifare Classic Mini (320 bytes, 20 blocks).
    Mini,
    /// Mifare Classic 1K (64 blocks).
    Classic1k,
    /// Mifare Classic 4K (256 blocks).
    Classic4k,
}

impl TagType {
    /// Number of 16-byte blocks exposed by this variant.
    pub fn block_count(self) -> usize {
        match self {
            TagType::Mini => 20,
            TagType::Classic1k => 64,
            TagType::Classic4k => 256,
        }
    }

    /// Label used by NFC dump files (`Mifare Classic type: <label>`).
    pub fn dump_label(self) -> &'static str {
        match self {
            TagType::Mini => "MINI",
            TagType::Classic1k => "1K",
            TagType::Classic4k => "4K",
        }
    }

    /// Resolve a dump-file label, case-insensitively.
    pub fn from_dump_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "MINI" => Some(TagType::Mini),
            "1K" => Some(TagType::Classic1k),
            "4K" => Some(TagType::Classic4k),
            _ => None,
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mifare Classic {}", self.dump_label())
    }
}

/// Structural precondition failures when addressing a dump.
///
/// These are caller contract violations and are reported separately from
/// "this tag is not of a known layout".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("block {index} out of range: dump has {blocks} blocks")]
    BlockOutOfRange { index: usize, blocks: usize },
    #[error("{tag_type} requires {expected} blocks, got {actual}")]
    BlockCount {
        tag_type: TagType,
        expected: usize,
        actual: usize,
    },
    #[error("field {start}..{end} exceeds block {block}")]
    FieldOutOfRange {
        block: usize,
        start: usize,
        end: usize,
    },
}

/// A fully populated tag dump.
///
/// # Examples
/// ```
/// use spooltag_core::{TagDump, TagType};
///
/// let mut dump = TagDump::new(TagType::Classic1k);
/// dump.set_block(2, *b"PLA\0\0\0\0\0\0\0\0\0\0\0\0\0")?;
/// assert_eq!(&dump.block(2)?[..3], b"PLA");
/// assert!(dump.block(64).is_err());
/// # Ok::<(), spooltag_core::TagError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDump {
    tag_type: TagType,
    blocks: Vec<Block>,
}

impl TagDump {
    /// Create a zero-filled dump sized for `tag_type`.
    pub fn new(tag_type: TagType) -> Self {
        Self {
            tag_type,
            blocks: vec![[0u8; BLOCK_SIZE]; tag_type.block_count()],
        }
    }

    /// Wrap existing blocks; the count must match the variant exactly.
    pub fn from_blocks(tag_type: TagType, blocks: Vec<Block>) -> Result<Self, TagError> {
        let expected = tag_type.block_count();
        if blocks.len() != expected {
            return Err(TagError::BlockCount {
                tag_type,
                expected,
                actual: blocks.len(),
            });
        }
        Ok(Self { tag_type, blocks })
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Result<&Block, TagError> {
        self.blocks.get(index).ok_or(TagError::BlockOutOfRange {
            index,
            blocks: self.blocks.len(),
        })
    }

    pub fn set_block(&mut self, index: usize, block: Block) -> Result<(), TagError> {
        let blocks = self.blocks.len();
        let slot = self
            .blocks
            .get_mut(index)
            .ok_or(TagError::BlockOutOfRange { index, blocks })?;
        *slot = block;
        Ok(())
    }
}
