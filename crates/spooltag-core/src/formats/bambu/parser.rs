use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::macros::format_description;
use tracing::debug;

use crate::tag::TagDump;

use super::error::SpoolError;
use super::layout;
use super::reader::SpoolReader;
use super::validate::check_spool_tag;

/// RGBA colour exactly as stored on the tag.
///
/// # Examples
/// ```
/// use spooltag_core::Color;
///
/// let color = Color { red: 0x61, green: 0xB0, blue: 0xFF, alpha: 0x80 };
/// assert_eq!(color.hex(), "#61B0FF");
/// assert!(!color.is_opaque());
/// assert_eq!(color.alpha_percent(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// `#RRGGBB`, alpha excluded.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }

    /// Alpha as an integer percentage, rounded down.
    pub fn alpha_percent(&self) -> u8 {
        // At most 100, fits in u8.
        (u16::from(self.alpha) * 100 / 255) as u8
    }
}

/// Decoded contents of a filament spool tag.
///
/// Values are returned exactly as stored; no range checks beyond admission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpoolRecord {
    /// Product family code, e.g. `GFA00`.
    pub material_id: String,
    /// Variant code, e.g. `A00-R3`; key into the filament catalog.
    pub variant_id: String,
    /// Coarse material family, e.g. `PLA`.
    pub filament_type: String,
    /// Human-readable sub-type, e.g. `PLA Basic`.
    pub detailed_type: String,
    pub color: Color,
    pub weight_grams: u16,
    pub diameter_mm: f32,
    pub drying_temperature_c: u16,
    pub drying_hours: u16,
    pub hotend_min_c: u16,
    pub hotend_max_c: u16,
    pub nozzle_diameter_mm: f32,
    pub spool_width_mm: f32,
    /// `YYYY-MM-DD HH:MM` when the stored text matched the expected pattern,
    /// otherwise the stored text verbatim.
    pub production_timestamp: String,
    /// Zero means the length was not recorded.
    pub filament_length_m: u16,
}

impl SpoolRecord {
    /// Production time as a typed value, when the timestamp is well formed.
    pub fn production_datetime(&self) -> Option<PrimitiveDateTime> {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
        PrimitiveDateTime::parse(&self.production_timestamp, &format).ok()
    }
}

/// Decode a spool tag.
///
/// Admission runs first; on rejection no field is read. Once admitted, every
/// field is an unconditional fixed-offset read.
///
/// # Errors
/// `SpoolError::NotRecognized` when the dump is not a spool tag,
/// `SpoolError::Tag` when the dump cannot be addressed.
pub fn decode_spool(dump: &TagDump) -> Result<SpoolRecord, SpoolError> {
    check_spool_tag(dump)?;

    let reader = SpoolReader::new(dump);
    let spool_width_raw = reader.read_u16_le(&layout::SPOOL_WIDTH_RAW)?;

    let record = SpoolRecord {
        material_id: reader.read_ascii(&layout::MATERIAL_ID)?,
        variant_id: reader.read_ascii(&layout::VARIANT_ID)?,
        filament_type: reader.read_ascii(&layout::FILAMENT_TYPE)?,
        detailed_type: reader.read_ascii(&layout::DETAILED_TYPE)?,
        color: Color {
            red: reader.read_u8(&layout::COLOR_RED)?,
            green: reader.read_u8(&layout::COLOR_GREEN)?,
            blue: reader.read_u8(&layout::COLOR_BLUE)?,
            alpha: reader.read_u8(&layout::COLOR_ALPHA)?,
        },
        weight_grams: reader.read_u16_le(&layout::WEIGHT_GRAMS)?,
        diameter_mm: reader.read_f32_le(&layout::DIAMETER_MM)?,
        drying_temperature_c: reader.read_u16_le(&layout::DRYING_TEMPERATURE_C)?,
        drying_hours: reader.read_u16_le(&layout::DRYING_HOURS)?,
        hotend_min_c: reader.read_u16_le(&layout::HOTEND_MIN_C)?,
        hotend_max_c: reader.read_u16_le(&layout::HOTEND_MAX_C)?,
        nozzle_diameter_mm: reader.read_f32_le(&layout::NOZZLE_DIAMETER_MM)?,
        spool_width_mm: f32::from(spool_width_raw) / layout::SPOOL_WIDTH_SCALE,
        production_timestamp: reader.read_production_timestamp(&layout::PRODUCTION_TIMESTAMP)?,
        filament_length_m: reader.read_u16_le(&layout::FILAMENT_LENGTH_M)?,
    };

    debug!(
        variant_id = %record.variant_id,
        material_id = %record.material_id,
        "spool tag decoded"
    );
    Ok(record)
}
