use std::ops::Range;

use crate::tag::TagType;

/// A field's position: block index plus byte range inside that block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub block: usize,
    pub range: Range<usize>,
}

impl Field {
    pub const fn new(block: usize, start: usize, end: usize) -> Self {
        Self {
            block,
            range: start..end,
        }
    }
}

// Blocks 3, 7, 11, 15, ... are sector trailers (keys + access bits) and carry
// no spool data.
pub const BLOCK_MATERIAL_IDS: usize = 1;
pub const BLOCK_FILAMENT_TYPE: usize = 2;
pub const BLOCK_DETAILED_TYPE: usize = 4;
pub const BLOCK_COLOR_WEIGHT: usize = 5;
pub const BLOCK_TEMPERATURES: usize = 6;
pub const BLOCK_NOZZLE: usize = 8;
pub const BLOCK_SPOOL_WIDTH: usize = 10;
pub const BLOCK_PRODUCTION_DATE: usize = 12;
pub const BLOCK_FILAMENT_LENGTH: usize = 14;

pub const VARIANT_ID: Field = Field::new(BLOCK_MATERIAL_IDS, 0, 7);
pub const MATERIAL_ID: Field = Field::new(BLOCK_MATERIAL_IDS, 8, 14);
pub const MATERIAL_PREFIX: Field = Field::new(BLOCK_MATERIAL_IDS, 8, 10);

pub const FILAMENT_TYPE: Field = Field::new(BLOCK_FILAMENT_TYPE, 0, 16);
pub const DETAILED_TYPE: Field = Field::new(BLOCK_DETAILED_TYPE, 0, 16);

pub const COLOR_RED: Field = Field::new(BLOCK_COLOR_WEIGHT, 0, 1);
pub const COLOR_GREEN: Field = Field::new(BLOCK_COLOR_WEIGHT, 1, 2);
pub const COLOR_BLUE: Field = Field::new(BLOCK_COLOR_WEIGHT, 2, 3);
pub const COLOR_ALPHA: Field = Field::new(BLOCK_COLOR_WEIGHT, 3, 4);
pub const WEIGHT_GRAMS: Field = Field::new(BLOCK_COLOR_WEIGHT, 4, 6);
pub const DIAMETER_MM: Field = Field::new(BLOCK_COLOR_WEIGHT, 8, 12);

pub const DRYING_TEMPERATURE_C: Field = Field::new(BLOCK_TEMPERATURES, 0, 2);
pub const DRYING_HOURS: Field = Field::new(BLOCK_TEMPERATURES, 2, 4);
// Max is stored before min.
pub const HOTEND_MAX_C: Field = Field::new(BLOCK_TEMPERATURES, 8, 10);
pub const HOTEND_MIN_C: Field = Field::new(BLOCK_TEMPERATURES, 10, 12);

pub const NOZZLE_DIAMETER_MM: Field = Field::new(BLOCK_NOZZLE, 12, 16);
pub const SPOOL_WIDTH_RAW: Field = Field::new(BLOCK_SPOOL_WIDTH, 4, 6);
pub const PRODUCTION_TIMESTAMP: Field = Field::new(BLOCK_PRODUCTION_DATE, 0, 16);
pub const FILAMENT_LENGTH_M: Field = Field::new(BLOCK_FILAMENT_LENGTH, 4, 6);

/// Spool width is stored in hundredths of a millimetre.
pub const SPOOL_WIDTH_SCALE: f32 = 100.0;

/// Only 1K tags carry this layout.
pub const REQUIRED_TAG_TYPE: TagType = TagType::Classic1k;

/// Material ids all start with this marker.
pub const MATERIAL_PREFIX_MARKER: &[u8; 2] = b"GF";

/// Filament family tokens accepted as a prefix of block 2.
pub const KNOWN_FILAMENT_TYPES: &[&[u8]] = &[
    b"PLA", b"PETG", b"ABS", b"TPU", b"PA", b"PC", b"ASA", b"PVA", b"HIPS", b"PET",
];

/// Plausible filament diameters in millimetres, inclusive.
pub const DIAMETER_RANGES_MM: [(f32, f32); 2] = [(1.6, 2.0), (2.7, 3.0)];

/// Underscore positions in `YYYY_MM_DD_HH_MM` and their replacements.
pub const TIMESTAMP_SEPARATORS: [(usize, u8); 4] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':')];
pub const TIMESTAMP_RAW_SEPARATOR: u8 = b'_';
