//! spooltag core library for decoding filament spool NFC tags.
//!
//! This crate turns a raw tag dump (64 blocks of 16 bytes read from a
//! Mifare Classic 1K tag) into a typed description of a 3D-printing filament
//! spool. Tag sources feed the analysis layer, which runs layout decoders
//! (layout/reader/validate/parser) and enriches the result from a reference
//! catalog into a deterministic report. Decoding is byte-oriented and side
//! effect free; all I/O is isolated in `source` modules.
//!
//! Invariants:
//! - The admission check always runs before any field is decoded.
//! - An unrecognised tag is a normal outcome, distinct from a malformed dump.
//! - Catalog lookups are exact matches over a duplicate-free table.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use spooltag_core::{FilamentCatalog, analyze_dump_file};
//!
//! let catalog = FilamentCatalog::builtin()?;
//! let report = analyze_dump_file(Path::new("spool.nfc"), &catalog)?;
//! if let Some(spool) = &report.spool {
//!     println!("{} {}", spool.detailed_type, spool.color.hex());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
mod catalog;
pub mod formats;
mod source;
mod tag;

pub use analysis::{AnalysisError, analyze_dump, analyze_dump_file, analyze_source};
pub use catalog::{CatalogEntry, CatalogError, FilamentCatalog};
pub use formats::bambu::{
    Color, Rejection, SpoolError, SpoolRecord, check_spool_tag, decode_spool,
    is_plausible_spool_tag,
};
pub use source::{NfcDumpError, NfcFileSource, SourceError, TagSource, parse_nfc_dump};
pub use tag::{BLOCK_SIZE, Block, TagDump, TagError, TagType};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Decode report for a single tag dump.
///
/// # Examples
/// ```
/// use spooltag_core::{TagDump, TagType, make_stub_report};
///
/// let report = make_stub_report("spool.nfc", 123, &TagDump::new(TagType::Classic1k));
/// assert_eq!(report.report_version, spooltag_core::REPORT_VERSION);
/// assert!(!report.recognized);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input dump metadata.
    pub input: InputInfo,
    /// Shape of the tag that was read.
    pub tag: TagSummary,
    /// Whether the dump passed the spool admission checks.
    pub recognized: bool,
    /// Failed admission check, when not recognised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
    /// Decoded spool fields, when recognised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spool: Option<SpoolRecord>,
    /// Catalog entry for the spool's variant id, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<CatalogEntry>,
    /// Production time as `YYYY-MM-DDTHH:MM:SS`, when the tag text parses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produced_at: Option<String>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "spooltag").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input dump metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Tag variant and block count.
///
/// # Examples
/// ```
/// use spooltag_core::{TagSummary, TagType};
///
/// let tag = TagSummary { tag_type: TagType::Classic1k, blocks: 64 };
/// assert_eq!(tag.blocks, TagType::Classic1k.block_count());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSummary {
    pub tag_type: TagType,
    pub blocks: usize,
}

/// Build a report with base fields filled and nothing decoded yet.
pub fn make_stub_report(input_path: &str, input_bytes: u64, dump: &TagDump) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "spooltag".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        tag: TagSummary {
            tag_type: dump.tag_type(),
            blocks: dump.block_count(),
        },
        recognized: false,
        rejection: None,
        spool: None,
        product: None,
        produced_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let mut report = make_stub_report("spool.nfc", 1, &TagDump::new(TagType::Classic1k));
        report.recognized = false;
        report.rejection = Some(Rejection::UnknownFilamentType.to_string());

        let json = serde_json::to_string(&report).expect("report json");
        let parsed: Report = serde_json::from_str(&json).expect("parse report");
        assert_eq!(parsed.tag.tag_type, TagType::Classic1k);
        assert_eq!(parsed.rejection.as_deref(), Some("unknown filament type"));
        assert!(parsed.spool.is_none());
    }
}
