//! Field-access primitives shared by every tag layout.
//!
//! These are pure functions over byte slices with no error conditions; bounds
//! are checked by the layout readers before bytes reach them.

mod bytes;

pub use bytes::{
    PRINTABLE_MAX, PRINTABLE_MIN, extract_ascii, is_printable_ascii_run, read_f32_le, read_u16_le,
};
