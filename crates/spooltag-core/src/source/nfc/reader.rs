use super::error::NfcDumpError;
use super::layout;
use crate::tag::{BLOCK_SIZE, Block, TagType};

/// Parse the value of a `Mifare Classic type:` line.
pub fn parse_tag_type(line: usize, label: &str) -> Result<TagType, NfcDumpError> {
    TagType::from_dump_label(label).ok_or_else(|| NfcDumpError::UnsupportedTagType {
        line,
        label: label.trim().to_string(),
    })
}

/// Decode one hex byte pair; `??` decodes to zero.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use spooltag_core::source::nfc::reader::parse_hex_byte;
///
/// assert_eq!(parse_hex_byte(1, "e8").unwrap(), 0xE8);
/// assert_eq!(parse_hex_byte(1, "??").unwrap(), 0);
/// ```
pub fn parse_hex_byte(line: usize, token: &str) -> Result<u8, NfcDumpError> {
    if token == layout::UNKNOWN_BYTE {
        return Ok(0);
    }
    let invalid = || NfcDumpError::InvalidHexByte {
        line,
        token: token.to_string(),
    };
    if token.len() != layout::HEX_BYTE_LEN || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(token, 16).map_err(|_| invalid())
}

/// Parse the remainder of a `Block N: XX XX ...` line (after `Block `).
///
/// Fewer than 16 bytes leaves the tail zeroed; more is an error.
pub fn parse_block_line(line: usize, rest: &str) -> Result<(usize, Block), NfcDumpError> {
    let (index, data) = rest
        .split_once(layout::BLOCK_INDEX_SEPARATOR)
        .ok_or_else(|| NfcDumpError::InvalidBlockLine {
            line,
            message: "missing ':' after block index".to_string(),
        })?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|err| NfcDumpError::InvalidBlockLine {
            line,
            message: format!("invalid block index '{}': {}", index.trim(), err),
        })?;

    let mut block = [0u8; BLOCK_SIZE];
    for (position, token) in data.split_whitespace().enumerate() {
        let slot = block
            .get_mut(position)
            .ok_or_else(|| NfcDumpError::InvalidBlockLine {
                line,
                message: format!("more than {BLOCK_SIZE} bytes in block {index}"),
            })?;
        *slot = parse_hex_byte(line, token)?;
    }
    Ok((index, block))
}
