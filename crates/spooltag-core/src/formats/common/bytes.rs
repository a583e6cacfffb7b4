/// Lowest printable ASCII byte (space).
pub const PRINTABLE_MIN: u8 = 0x20;
/// Highest printable ASCII byte (`~`).
pub const PRINTABLE_MAX: u8 = 0x7E;

fn is_printable(byte: u8) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&byte)
}

/// Decode a little-endian `u16`.
///
/// # Examples
/// ```
/// use spooltag_core::formats::common::read_u16_le;
///
/// assert_eq!(read_u16_le([0xE8, 0x03]), 1000);
/// ```
pub fn read_u16_le(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Decode a little-endian IEEE-754 `f32` by reinterpreting its bit pattern.
///
/// NaN payloads and subnormals pass through untouched.
///
/// # Examples
/// ```
/// use spooltag_core::formats::common::read_f32_le;
///
/// assert!((read_f32_le([0x00, 0x00, 0xE0, 0x3F]) - 1.75).abs() < 0.001);
/// ```
pub fn read_f32_le(bytes: [u8; 4]) -> f32 {
    f32::from_bits(u32::from_le_bytes(bytes))
}

/// Check whether the first `len` bytes form a printable ASCII run.
///
/// Zero bytes are padding and skipped. Any other byte outside `0x20..=0x7E`
/// disqualifies the run. At least one printable byte is required, so an
/// all-padding run is not printable.
pub fn is_printable_ascii_run(bytes: &[u8], len: usize) -> bool {
    let mut found_printable = false;
    for &byte in bytes.iter().take(len) {
        if byte == 0 {
            continue;
        }
        if !is_printable(byte) {
            return false;
        }
        found_printable = true;
    }
    found_printable
}

/// Copy the leading printable ASCII prefix, up to `max_len` bytes.
///
/// Stops silently at the first zero or non-printable byte. Never fails.
///
/// # Examples
/// ```
/// use spooltag_core::formats::common::extract_ascii;
///
/// assert_eq!(extract_ascii(b"PLA Basic\0\0\0\0\0\0\0", 16), "PLA Basic");
/// assert_eq!(extract_ascii(b"GFA00\0", 3), "GFA");
/// ```
pub fn extract_ascii(bytes: &[u8], max_len: usize) -> String {
    bytes
        .iter()
        .take(max_len)
        .take_while(|&&byte| byte != 0 && is_printable(byte))
        .map(|&byte| char::from(byte))
        .collect()
}
