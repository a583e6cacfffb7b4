//! Bambu Lab filament spool tags (Mifare Classic 1K).
//!
//! The layout stores ASCII identifiers in blocks 1, 2 and 4, colour, weight
//! and diameter in block 5, temperatures in block 6, and scalar specs in
//! blocks 8, 10, 12 and 14. Sector trailers are never read.
//!
//! Decoding is gated by `validate`: the tag type must be 1K, the material id
//! must start with `GF`, block 2 must begin with a known filament family,
//! block 4 must be printable ASCII, and the diameter must be 1.6–2.0 mm or
//! 2.7–3.0 mm. Only then does `parser` read the remaining fields. Positions
//! live in `layout`; bounds-checked access lives in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod validate;

pub use error::{Rejection, SpoolError};
pub use parser::{Color, SpoolRecord, decode_spool};
pub use validate::{check_spool_tag, is_plausible_spool_tag};
