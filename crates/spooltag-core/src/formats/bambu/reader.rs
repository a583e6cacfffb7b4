use crate::formats::common;
use crate::tag::{TagDump, TagError};

use super::layout::{self, Field};

pub struct SpoolReader<'a> {
    dump: &'a TagDump,
}

impl<'a> SpoolReader<'a> {
    pub fn new(dump: &'a TagDump) -> Self {
        Self { dump }
    }

    pub fn read_slice(&self, field: &Field) -> Result<&'a [u8], TagError> {
        let block = self.dump.block(field.block)?;
        block
            .get(field.range.clone())
            .ok_or(TagError::FieldOutOfRange {
                block: field.block,
                start: field.range.start,
                end: field.range.end,
            })
    }

    fn read_array<const N: usize>(&self, field: &Field) -> Result<[u8; N], TagError> {
        let bytes = self.read_slice(field)?;
        bytes.try_into().map_err(|_| TagError::FieldOutOfRange {
            block: field.block,
            start: field.range.start,
            end: field.range.start + N,
        })
    }

    pub fn read_u8(&self, field: &Field) -> Result<u8, TagError> {
        let [byte] = self.read_array::<1>(field)?;
        Ok(byte)
    }

    pub fn read_u16_le(&self, field: &Field) -> Result<u16, TagError> {
        Ok(common::read_u16_le(self.read_array(field)?))
    }

    pub fn read_f32_le(&self, field: &Field) -> Result<f32, TagError> {
        Ok(common::read_f32_le(self.read_array(field)?))
    }

    pub fn read_ascii(&self, field: &Field) -> Result<String, TagError> {
        let bytes = self.read_slice(field)?;
        Ok(common::extract_ascii(bytes, bytes.len()))
    }

    pub fn is_printable_ascii(&self, field: &Field) -> Result<bool, TagError> {
        let bytes = self.read_slice(field)?;
        Ok(common::is_printable_ascii_run(bytes, bytes.len()))
    }

    /// Case-sensitive raw prefix match against any of `tokens`.
    pub fn starts_with_any(&self, field: &Field, tokens: &[&[u8]]) -> Result<bool, TagError> {
        let bytes = self.read_slice(field)?;
        Ok(tokens.iter().any(|token| bytes.starts_with(token)))
    }

    /// Read the production text and normalise it to `YYYY-MM-DD HH:MM`.
    pub fn read_production_timestamp(&self, field: &Field) -> Result<String, TagError> {
        let raw = self.read_ascii(field)?;
        Ok(normalize_production_timestamp(raw))
    }
}

/// Rewrite `YYYY_MM_DD_HH_MM` to `YYYY-MM-DD HH:MM`.
///
/// The rewrite happens only when all four separator positions hold `_`;
/// anything else (including short strings) is returned unchanged.
///
/// # Examples
/// ```
/// use spooltag_core::formats::bambu::reader::normalize_production_timestamp;
///
/// assert_eq!(
///     normalize_production_timestamp("2025_07_21_14_17".to_string()),
///     "2025-07-21 14:17"
/// );
/// assert_eq!(
///     normalize_production_timestamp("2025/07/21/14/17".to_string()),
///     "2025/07/21/14/17"
/// );
/// ```
pub fn normalize_production_timestamp(raw: String) -> String {
    let all_separators = layout::TIMESTAMP_SEPARATORS
        .iter()
        .all(|&(pos, _)| raw.as_bytes().get(pos) == Some(&layout::TIMESTAMP_RAW_SEPARATOR));
    if !all_separators {
        return raw;
    }

    let mut bytes = raw.into_bytes();
    for &(pos, replacement) in &layout::TIMESTAMP_SEPARATORS {
        bytes[pos] = replacement;
    }
    // Only ASCII bytes were swapped for ASCII bytes.
    String::from_utf8(bytes).unwrap_or_default()
}
