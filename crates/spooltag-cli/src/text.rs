use std::fmt::Write;

use spooltag_core::{CatalogEntry, Color, Report, SpoolRecord};

const TITLE: &str = "Bambu Lab Filament";

/// Render a report as the human-readable spool card.
pub fn render_report(report: &Report) -> String {
    match &report.spool {
        Some(spool) => render_spool(spool, report.product.as_ref()),
        None => format!(
            "Not a Bambu Lab spool tag: {}\n",
            report.rejection.as_deref().unwrap_or("unknown reason")
        ),
    }
}

fn render_spool(spool: &SpoolRecord, product: Option<&CatalogEntry>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_spool(&mut out, spool, product);
    out
}

fn write_spool(
    out: &mut String,
    spool: &SpoolRecord,
    product: Option<&CatalogEntry>,
) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "Type: {}", spool.detailed_type)?;
    writeln!(out, "Color: {}", color_line(&spool.color, product))?;
    match product {
        Some(entry) => writeln!(out, "Filament Code: {}", entry.product_code)?,
        None => writeln!(out, "Material ID: {}", spool.material_id)?,
    }
    writeln!(out, "Prod: {}", spool.production_timestamp)?;

    writeln!(out)?;
    writeln!(out, "Configurations")?;
    writeln!(out, "Hotend: {}-{} C", spool.hotend_min_c, spool.hotend_max_c)?;
    writeln!(
        out,
        "Drying: {} C for {}h",
        spool.drying_temperature_c, spool.drying_hours
    )?;
    writeln!(out, "Nozzle: >= {:.2}mm", spool.nozzle_diameter_mm)?;

    writeln!(out)?;
    writeln!(out, "Specifications")?;
    writeln!(out, "Weight: {}g", spool.weight_grams)?;
    writeln!(out, "Diameter: {:.2}mm", spool.diameter_mm)?;
    writeln!(out, "Spool Width: {:.2}mm", spool.spool_width_mm)?;
    if spool.filament_length_m > 0 {
        writeln!(out, "Length: {}m", spool.filament_length_m)?;
    }
    Ok(())
}

fn color_line(color: &Color, product: Option<&CatalogEntry>) -> String {
    let hex = color.hex();
    let value = if color.is_opaque() {
        hex
    } else {
        format!("{hex} @ {}%", color.alpha_percent())
    };
    match product {
        Some(entry) => format!("{} ({value})", entry.color_name),
        None => value,
    }
}
