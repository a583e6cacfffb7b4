pub const TAG_TYPE_PREFIX: &str = "Mifare Classic type:";
pub const BLOCK_PREFIX: &str = "Block ";
pub const BLOCK_INDEX_SEPARATOR: char = ':';
pub const COMMENT_PREFIX: char = '#';
/// Placeholder for a byte the reader could not read; decodes to zero.
pub const UNKNOWN_BYTE: &str = "??";
pub const HEX_BYTE_LEN: usize = 2;
