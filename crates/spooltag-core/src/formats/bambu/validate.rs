use tracing::debug;

use crate::tag::TagDump;

use super::error::{Rejection, SpoolError};
use super::layout;
use super::reader::SpoolReader;

/// Run the admission checks in order, stopping at the first failure.
///
/// The checks are a cheap heuristic against foreign layouts, not
/// authentication. A `TagError` is returned when the dump cannot be addressed
/// at the required blocks.
///
/// # Errors
/// `SpoolError::NotRecognized` names the failed check; `SpoolError::Tag`
/// reports a structurally invalid dump.
pub fn check_spool_tag(dump: &TagDump) -> Result<(), SpoolError> {
    let result = run_checks(dump);
    if let Err(SpoolError::NotRecognized(rejection)) = &result {
        debug!(%rejection, "spool tag rejected");
    }
    result
}

/// Boolean form of [`check_spool_tag`].
///
/// A dump that cannot be inspected is not plausible either; use
/// `check_spool_tag` to tell the two apart.
///
/// # Examples
/// ```
/// use spooltag_core::{TagDump, TagType, is_plausible_spool_tag};
///
/// assert!(!is_plausible_spool_tag(&TagDump::new(TagType::Classic1k)));
/// ```
pub fn is_plausible_spool_tag(dump: &TagDump) -> bool {
    check_spool_tag(dump).is_ok()
}

fn run_checks(dump: &TagDump) -> Result<(), SpoolError> {
    let found = dump.tag_type();
    if found != layout::REQUIRED_TAG_TYPE {
        return Err(Rejection::WrongTagType { found }.into());
    }

    let reader = SpoolReader::new(dump);

    let prefix = reader.read_slice(&layout::MATERIAL_PREFIX)?;
    if prefix != layout::MATERIAL_PREFIX_MARKER {
        return Err(Rejection::MissingMaterialPrefix.into());
    }

    if !reader.starts_with_any(&layout::FILAMENT_TYPE, layout::KNOWN_FILAMENT_TYPES)? {
        return Err(Rejection::UnknownFilamentType.into());
    }

    if !reader.is_printable_ascii(&layout::DETAILED_TYPE)? {
        return Err(Rejection::DetailedTypeNotPrintable.into());
    }

    let diameter = reader.read_f32_le(&layout::DIAMETER_MM)?;
    if !is_plausible_diameter(diameter) {
        return Err(Rejection::ImplausibleDiameter { diameter }.into());
    }

    Ok(())
}

fn is_plausible_diameter(diameter: f32) -> bool {
    layout::DIAMETER_RANGES_MM
        .iter()
        .any(|&(min, max)| (min..=max).contains(&diameter))
}
