//! # Report Rendering
//!
//! Turns a [`CoilInput`] / [`CoilResult`] pair into a printable report.
//! No computation happens here beyond converting SI values to the display
//! units engineers expect (cm², mm², mm, %).
//!
//! ## Output Modes
//!
//! - [`render_text`] - One labelled line per quantity, grouped by stage
//! - [`render_json`] - Input and result as pretty-printed JSON, SI units
//!
//! ## Example
//!
//! ```rust
//! use coil_core::calculations::{calculate, CoilInput};
//! use coil_core::report::render_text;
//!
//! let input = CoilInput::default();
//! let result = calculate(&input);
//! let text = render_text(&input, &result);
//! assert!(text.contains("Overall power efficiency"));
//! ```

use serde::Serialize;

use crate::calculations::{CoilInput, CoilResult};
use crate::errors::CalcResult;

const M2_TO_CM2: f64 = 1e4;
const M2_TO_MM2: f64 = 1e6;
const M_TO_MM: f64 = 1e3;

/// One line of the text report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    /// Heading of the group the line belongs to
    pub section: &'static str,
    pub label: &'static str,
    /// Value already converted to `unit`
    pub value: f64,
    pub unit: &'static str,
    /// Digits after the decimal point
    pub precision: usize,
}

impl ReportLine {
    fn new(section: &'static str, label: &'static str, value: f64, unit: &'static str, precision: usize) -> Self {
        ReportLine {
            section,
            label,
            value,
            unit,
            precision,
        }
    }

    /// Format as `label  value unit`
    pub fn format(&self) -> String {
        let value = format!("{:.*}", self.precision, self.value);
        if self.unit.is_empty() {
            format!("{:<40} {:>14}", self.label, value)
        } else {
            format!("{:<40} {:>14} {}", self.label, value, self.unit)
        }
    }
}

/// All report lines in their fixed order: echoed inputs first, then the
/// derived quantities in derivation order.
pub fn report_lines(input: &CoilInput, result: &CoilResult) -> Vec<ReportLine> {
    const INPUTS: &str = "Inputs";
    const MECHANICAL: &str = "Mechanical";
    const GEOMETRY: &str = "Geometry";
    const ELECTROMAGNETIC: &str = "Electromagnetic";
    const ELECTRICAL: &str = "Electrical";
    const LOSSES: &str = "Losses";

    vec![
        ReportLine::new(INPUTS, "Magnetic flux density", input.flux_density_t, "T", 2),
        ReportLine::new(INPUTS, "Number of circuits in series", f64::from(input.circuits_series), "", 0),
        ReportLine::new(INPUTS, "Number of circuits in parallel", f64::from(input.circuits_parallel), "", 0),
        ReportLine::new(INPUTS, "Number of total circuits", f64::from(input.circuit_count), "", 0),
        ReportLine::new(INPUTS, "Number of turns per tooth", f64::from(input.turns_per_tooth), "", 0),
        ReportLine::new(MECHANICAL, "Mechanical power", result.mechanical_power_w, "W", 1),
        ReportLine::new(MECHANICAL, "Angular speed", result.angular_speed_rad_s, "rad/s", 3),
        ReportLine::new(GEOMETRY, "External radius", result.external_radius_m, "m", 4),
        ReportLine::new(GEOMETRY, "Average radius", result.average_radius_m, "m", 4),
        ReportLine::new(GEOMETRY, "Total average circumference length", result.circumference_m, "m", 4),
        ReportLine::new(GEOMETRY, "Circuit linear length", result.circuit_length_m, "m", 4),
        ReportLine::new(GEOMETRY, "Distance between consecutive slots", result.slot_pitch_m, "m", 5),
        ReportLine::new(GEOMETRY, "Tooth length", result.tooth_length_m, "m", 5),
        ReportLine::new(GEOMETRY, "Tooth area", result.tooth_area_m2 * M2_TO_CM2, "cm2", 2),
        ReportLine::new(ELECTROMAGNETIC, "Flux per turn", result.flux_per_turn_wb, "Wb", 6),
        ReportLine::new(ELECTROMAGNETIC, "Tangential speed", result.tangential_speed_m_s, "m/s", 2),
        ReportLine::new(ELECTROMAGNETIC, "Steel magnetic operational frequency", result.operating_frequency_hz, "Hz", 1),
        ReportLine::new(ELECTROMAGNETIC, "Estimated turn BEMF amplitude", result.emf_per_turn_v, "V", 3),
        ReportLine::new(ELECTROMAGNETIC, "Estimated phase BEMF amplitude", result.total_emf_v, "V", 2),
        ReportLine::new(ELECTRICAL, "Current amplitude in one phase", result.current_amplitude_a, "A", 2),
        ReportLine::new(ELECTRICAL, "Current RMS in one phase", result.current_rms_a, "A", 2),
        ReportLine::new(ELECTRICAL, "Current in one coil wire", result.coil_current_a, "A", 2),
        ReportLine::new(ELECTRICAL, "Wire area", result.wire_area_m2 * M2_TO_MM2, "mm2", 3),
        ReportLine::new(ELECTRICAL, "Wire diameter", result.wire_diameter_m() * M_TO_MM, "mm", 3),
        ReportLine::new(ELECTRICAL, "Coil wire length", result.wire_length_m * M_TO_MM, "mm", 1),
        ReportLine::new(ELECTRICAL, "Coil resistance", result.coil_resistance_ohm, "Ohm", 6),
        ReportLine::new(ELECTRICAL, "Phase resistance", result.phase_resistance_ohm, "Ohm", 6),
        ReportLine::new(LOSSES, "Resistive power loss in one phase", result.loss_per_phase_w, "W", 1),
        ReportLine::new(LOSSES, "Resistive power loss in all phases", result.total_loss_w, "W", 1),
        ReportLine::new(LOSSES, "Overall power efficiency", result.efficiency * 100.0, "% (friction excluded)", 2),
    ]
}

/// Render the plain-text report.
pub fn render_text(input: &CoilInput, result: &CoilResult) -> String {
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════════════════════════\n");
    out.push_str(&format!("  COIL DESIGN: {}\n", input.label));
    out.push_str(&format!("  Conductor:   {}\n", input.conductor));
    out.push_str("═══════════════════════════════════════════════════════════\n");

    for warning in &result.warnings {
        out.push_str(&format!("Warning: {}\n", warning));
    }

    let mut current_section = "";
    for line in report_lines(input, result) {
        if line.section != current_section {
            out.push('\n');
            out.push_str(&format!("{}:\n", line.section));
            current_section = line.section;
        }
        out.push_str("  ");
        out.push_str(&line.format());
        out.push('\n');
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a CoilInput,
    result: &'a CoilResult,
}

/// Render input and result as pretty-printed JSON.
pub fn render_json(input: &CoilInput, result: &CoilResult) -> CalcResult<String> {
    let json = serde_json::to_string_pretty(&JsonReport { input, result })?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;

    #[test]
    fn test_line_order_follows_stages() {
        let input = CoilInput::default();
        let lines = report_lines(&input, &calculate(&input));

        let sections: Vec<&str> = lines.iter().map(|l| l.section).fold(Vec::new(), |mut acc, s| {
            if acc.last() != Some(&s) {
                acc.push(s);
            }
            acc
        });
        assert_eq!(
            sections,
            vec!["Inputs", "Mechanical", "Geometry", "Electromagnetic", "Electrical", "Losses"]
        );
        assert_eq!(lines.last().map(|l| l.label), Some("Overall power efficiency"));
    }

    #[test]
    fn test_display_unit_conversions() {
        let input = CoilInput::default();
        let result = calculate(&input);
        let lines = report_lines(&input, &result);
        let find = |label: &str| lines.iter().find(|l| l.label == label).map(|l| l.value).unwrap();

        assert_eq!(find("Tooth area"), result.tooth_area_m2 * 1e4);
        assert_eq!(find("Wire area"), result.wire_area_m2 * 1e6);
        assert_eq!(find("Wire diameter"), 2.0 * result.wire_radius_m * 1e3);
        assert_eq!(find("Coil wire length"), result.wire_length_m * 1e3);
        assert_eq!(find("Overall power efficiency"), result.efficiency * 100.0);
    }

    #[test]
    fn test_line_format() {
        let line = ReportLine::new("Losses", "Total", 2595.04, "W", 1);
        let text = line.format();
        assert!(text.starts_with("Total"));
        assert!(text.ends_with("2595.0 W"));

        let count = ReportLine::new("Inputs", "Slots", 48.0, "", 0);
        assert!(count.format().ends_with("48"));
    }

    #[test]
    fn test_text_report() {
        let input = CoilInput::default();
        let text = render_text(&input, &calculate(&input));

        assert!(text.contains("COIL DESIGN: Reference coil"));
        assert!(text.contains("Conductor:   Aluminum"));
        assert!(text.contains("Wire area"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_text_report_shows_warning() {
        let input = CoilInput::default().with_circuits(3, 8, 8);
        let text = render_text(&input, &calculate(&input));
        assert!(text.contains("Warning: number of circuits in parallel (3)"));
    }

    #[test]
    fn test_json_report() {
        let input = CoilInput::default();
        let result = calculate(&input);
        let json = render_json(&input, &result).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"]["slot_count"], 48);
        assert_eq!(value["input"]["conductor"], "aluminum");
        let efficiency = value["result"]["efficiency"].as_f64().unwrap();
        assert!((efficiency - result.efficiency).abs() < 1e-12);
    }
}
