//! NFC dump file source.
//!
//! Reads the plain-text dump format written by handheld NFC readers: a
//! `Mifare Classic type:` declaration followed by `Block N:` lines of hex
//! byte pairs, where `??` marks bytes the reader could not authenticate.
//! File I/O happens here; line-level conventions live in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::NfcFileSource;
