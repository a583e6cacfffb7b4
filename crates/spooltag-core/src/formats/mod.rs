//! Tag layout decoders.
//!
//! Each layout follows the same layered structure:
//! - `layout`: block indices and byte ranges (source of truth)
//! - `reader`: bounds-checked field access over a dump
//! - `validate`: cheap admission checks gating the decoder
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Decoders are pure and contain no I/O; `source` handles dump files.

pub mod bambu;
pub mod common;
