use std::fs;
use std::path::Path;

use thiserror::Error;
use time::macros::format_description;
use tracing::debug;

use crate::catalog::FilamentCatalog;
use crate::formats::bambu::{SpoolError, SpoolRecord, decode_spool};
use crate::source::{NfcFileSource, SourceError, TagSource};
use crate::tag::{TagDump, TagError};
use crate::{Report, make_stub_report};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Tag error: {0}")]
    Tag(#[from] TagError),
}

/// Read an NFC dump file and build a report.
///
/// # Errors
/// Fails on I/O or dump syntax errors. An unrecognised tag is not an error;
/// it produces a report with `recognized == false`.
pub fn analyze_dump_file(path: &Path, catalog: &FilamentCatalog) -> Result<Report, AnalysisError> {
    let bytes = fs::metadata(path)?.len();
    let source = NfcFileSource::open(path)?;
    analyze_source(path, bytes, source, catalog)
}

pub fn analyze_source<S: TagSource>(
    path: &Path,
    input_bytes: u64,
    mut source: S,
    catalog: &FilamentCatalog,
) -> Result<Report, AnalysisError> {
    let dump = source.read_tag()?;
    analyze_dump(&path.display().to_string(), input_bytes, &dump, catalog)
}

/// Build a report for an in-memory dump.
pub fn analyze_dump(
    input_path: &str,
    input_bytes: u64,
    dump: &TagDump,
    catalog: &FilamentCatalog,
) -> Result<Report, AnalysisError> {
    let mut report = make_stub_report(input_path, input_bytes, dump);

    match decode_spool(dump) {
        Ok(record) => {
            report.recognized = true;
            report.product = catalog.lookup(&record.variant_id).cloned();
            if report.product.is_none() {
                debug!(variant_id = %record.variant_id, "variant not in catalog");
            }
            report.produced_at = produced_at(&record);
            report.spool = Some(record);
        }
        Err(SpoolError::NotRecognized(rejection)) => {
            report.rejection = Some(rejection.to_string());
        }
        Err(SpoolError::Tag(err)) => return Err(err.into()),
    }

    Ok(report)
}

fn produced_at(record: &SpoolRecord) -> Option<String> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:00");
    record.production_datetime()?.format(&format).ok()
}
