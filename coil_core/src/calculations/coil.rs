//! # Axial-Flux Coil Calculation
//!
//! Evaluates one stator coil of an axial-flux permanent-magnet motor: from
//! the required shaft power and the stator geometry down to wire size,
//! Joule losses and efficiency.
//!
//! ## Assumptions
//!
//! - Six-step (trapezoidal) drive, two phases conducting at a time
//! - Three phases
//! - Flux per tooth taken as the full tooth area times the magnet flux density
//! - Friction is excluded from the efficiency figure
//!
//! ## Example
//!
//! ```rust
//! use coil_core::calculations::coil::{calculate, CoilInput};
//! use coil_core::materials::Conductor;
//!
//! let input = CoilInput::default().with_conductor(Conductor::Copper);
//! let result = calculate(&input);
//!
//! assert!(result.efficiency > 0.9 && result.efficiency < 1.0);
//! assert!(result.warnings.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{electromagnetic, geometry, winding};
use crate::errors::{CalcError, CalcResult};
use crate::materials::Conductor;

/// One mechanical horsepower in watts, as used for the shaft power rating
pub const HORSEPOWER_W: f64 = 745.0;

/// Input parameters for one coil.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "65 hp hub motor",
///   "conductor": "aluminum",
///   "insulation_thickness_m": 0.0002,
///   "shaft_power_w": 48425.0,
///   "friction_fraction": 0.05,
///   "internal_radius_m": 0.9,
///   "tooth_width_m": 0.036,
///   "tooth_tip_width_m": 0.003,
///   "slot_opening_m": 0.004,
///   "speed_rpm": 1600.0,
///   "flux_density_t": 0.9,
///   "slot_count": 48,
///   "circuits_parallel": 1,
///   "circuits_series": 8,
///   "turns_per_tooth": 2,
///   "circuit_count": 8,
///   "pole_count": 40,
///   "current_density_a_m2": 30000000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoilInput {
    /// User label for this design (e.g., "65 hp hub motor")
    pub label: String,

    /// Winding conductor material
    pub conductor: Conductor,

    /// Dielectric insulation thickness around the conductor (m)
    pub insulation_thickness_m: f64,

    /// Power available at the shaft, after friction losses (W)
    pub shaft_power_w: f64,

    /// Friction losses as a fraction of the mechanical power (0 to 1)
    pub friction_fraction: f64,

    /// Internal radius of the active area (m)
    pub internal_radius_m: f64,

    /// Radial tooth width (m)
    pub tooth_width_m: f64,

    /// Tooth tip overhang at the slot entrance (m)
    pub tooth_tip_width_m: f64,

    /// Gap between consecutive teeth, i.e. the slot opening (m)
    pub slot_opening_m: f64,

    /// Rotor speed (rpm)
    pub speed_rpm: f64,

    /// Magnet flux density in the airgap (T)
    pub flux_density_t: f64,

    /// Number of stator slots
    pub slot_count: u32,

    /// Number of circuits in parallel per phase
    pub circuits_parallel: u32,

    /// Number of circuits in series per phase
    pub circuits_series: u32,

    /// Number of turns wound on each tooth
    pub turns_per_tooth: u32,

    /// Total number of circuits; should equal parallel × series
    pub circuit_count: u32,

    /// Number of magnet poles
    pub pole_count: u32,

    /// Design current density in the conductor (A/m²)
    pub current_density_a_m2: f64,
}

impl Default for CoilInput {
    /// The reference design: 65 hp at 1600 rpm, 48 slots, 40 poles,
    /// aluminum winding.
    fn default() -> Self {
        CoilInput {
            label: "Reference coil".to_string(),
            conductor: Conductor::Aluminum,
            insulation_thickness_m: 0.2e-3,
            shaft_power_w: 65.0 * HORSEPOWER_W,
            friction_fraction: 0.05,
            internal_radius_m: 0.9,
            tooth_width_m: 36.0e-3,
            tooth_tip_width_m: 3.0e-3,
            slot_opening_m: 4.0e-3,
            speed_rpm: 1600.0,
            flux_density_t: 0.9,
            slot_count: 48,
            circuits_parallel: 1,
            circuits_series: 8,
            turns_per_tooth: 2,
            circuit_count: 8,
            pole_count: 40,
            current_density_a_m2: 30e6,
        }
    }
}

impl CoilInput {
    /// Replace the winding conductor
    pub fn with_conductor(mut self, conductor: Conductor) -> Self {
        self.conductor = conductor;
        self
    }

    /// Replace the circuit arrangement (parallel, series, total)
    pub fn with_circuits(mut self, parallel: u32, series: u32, total: u32) -> Self {
        self.circuits_parallel = parallel;
        self.circuits_series = series;
        self.circuit_count = total;
        self
    }

    /// Check that parallel × series circuits matches the total circuit count.
    ///
    /// A mismatch is not fatal: [`calculate`] reports it and evaluates the
    /// design with the counts as given.
    pub fn check_circuits(&self) -> CalcResult<()> {
        let product = u64::from(self.circuits_parallel) * u64::from(self.circuits_series);
        if product != u64::from(self.circuit_count) {
            return Err(CalcError::circuit_mismatch(
                self.circuits_parallel,
                self.circuits_series,
                self.circuit_count,
            ));
        }
        Ok(())
    }
}

/// Results from the coil calculation.
///
/// All values are SI base units. Fields appear in derivation order.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mechanical_power_w": 50973.7,
///   "angular_speed_rad_s": 167.55,
///   "operating_frequency_hz": 533.3,
///   "total_emf_v": 154.2,
///   "current_rms_a": 135.0,
///   "total_loss_w": 2595.0,
///   "efficiency": 0.9516,
///   "warnings": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoilResult {
    // Mechanical
    /// Mechanical power including friction losses (W)
    pub mechanical_power_w: f64,
    /// Rotor angular speed (rad/s)
    pub angular_speed_rad_s: f64,

    // Geometry
    /// External radius of the active area (m)
    pub external_radius_m: f64,
    /// Average radius (m)
    pub average_radius_m: f64,
    /// Circumference at the average radius (m)
    pub circumference_m: f64,
    /// Average circumference divided by the circuit count (m)
    pub circuit_length_m: f64,
    /// Distance between consecutive slots (m)
    pub slot_pitch_m: f64,
    /// Average tooth length along the circumference (m)
    pub tooth_length_m: f64,
    /// Airgap-facing tooth area (m²)
    pub tooth_area_m2: f64,

    // Electromagnetic
    /// Flux linked by one turn (Wb)
    pub flux_per_turn_wb: f64,
    /// Magnet speed at the average radius (m/s)
    pub tangential_speed_m_s: f64,
    /// Stator steel operating frequency (Hz)
    pub operating_frequency_hz: f64,
    /// Back-EMF amplitude per turn (V)
    pub emf_per_turn_v: f64,
    /// Back-EMF amplitude per phase (V)
    pub total_emf_v: f64,

    // Electrical
    /// Six-step phase current amplitude (A)
    pub current_amplitude_a: f64,
    /// RMS phase current (A)
    pub current_rms_a: f64,
    /// Current in one coil wire (A)
    pub coil_current_a: f64,
    /// Conductor cross-section (m²)
    pub wire_area_m2: f64,
    /// Bare conductor radius (m)
    pub wire_radius_m: f64,
    /// Conductor length of one coil (m)
    pub wire_length_m: f64,
    /// Resistance of one coil (Ω)
    pub coil_resistance_ohm: f64,
    /// Resistance of one phase (Ω)
    pub phase_resistance_ohm: f64,

    // Losses
    /// Joule loss in one phase (W)
    pub loss_per_phase_w: f64,
    /// Joule loss in all three phases (W)
    pub total_loss_w: f64,
    /// P_mec / (P_mec + losses), friction excluded (0 to 1)
    pub efficiency: f64,

    /// Consistency problems found in the input; the values above were still
    /// computed from the input as given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CalcError>,
}

impl CoilResult {
    /// True when the input passed every consistency check
    pub fn is_consistent(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Bare wire diameter (m)
    pub fn wire_diameter_m(&self) -> f64 {
        2.0 * self.wire_radius_m
    }
}

/// Calculate the coil design.
///
/// Never fails. A circuit count mismatch is logged at `warn` level, stored in
/// [`CoilResult::warnings`], and the calculation proceeds with the counts as
/// given. Out-of-range inputs (negative radius, zero counts) are not
/// rejected and yield NaN or meaningless values.
///
/// # Arguments
///
/// * `input` - Coil parameters
pub fn calculate(input: &CoilInput) -> CoilResult {
    let mut warnings = Vec::new();
    if let Err(e) = input.check_circuits() {
        log::warn!("{}: {}", input.label, e);
        warnings.push(e);
    }

    // Mechanical
    let mechanical_power_w = electromagnetic::mechanical_power(input.shaft_power_w, input.friction_fraction);
    let angular_speed_rad_s = electromagnetic::angular_speed(input.speed_rpm);

    // Geometry
    let external_radius_m = geometry::external_radius(input.internal_radius_m, input.tooth_width_m);
    let average_radius_m = geometry::average_radius(input.internal_radius_m, external_radius_m);
    let circumference_m = geometry::circumference(average_radius_m);
    let circuit_length_m = geometry::circuit_length(circumference_m, input.circuit_count);
    let slot_pitch_m = geometry::slot_pitch(average_radius_m, input.slot_count);
    let tooth_length_m = geometry::tooth_length(slot_pitch_m, input.slot_opening_m);
    let tooth_area_m2 = geometry::tooth_area(input.tooth_width_m, tooth_length_m);

    // Electromagnetic
    let flux_per_turn_wb = electromagnetic::flux_per_turn(tooth_area_m2, input.flux_density_t);
    let tangential_speed_m_s = electromagnetic::tangential_speed(angular_speed_rad_s, average_radius_m);
    let operating_frequency_hz = electromagnetic::operating_frequency(angular_speed_rad_s, input.pole_count);
    let emf_per_turn_v = electromagnetic::emf_per_turn(tangential_speed_m_s, flux_per_turn_wb, slot_pitch_m);
    let total_emf_v = electromagnetic::total_emf(input.circuits_series, input.turns_per_tooth, emf_per_turn_v);

    // Electrical
    let current_amplitude_a = winding::current_amplitude(mechanical_power_w, total_emf_v, input.circuits_parallel);
    let current_rms_a = winding::current_rms(current_amplitude_a);
    let coil_current_a = winding::coil_current(current_amplitude_a, input.circuits_parallel);
    let wire_area_m2 = winding::wire_area(coil_current_a, input.current_density_a_m2);
    let wire_radius_m = winding::wire_radius(wire_area_m2);
    let wire_length_m = winding::wire_length(
        input.turns_per_tooth,
        tooth_length_m,
        input.tooth_width_m,
        input.tooth_tip_width_m,
        wire_radius_m,
        input.insulation_thickness_m,
    );
    let coil_resistance_ohm = winding::coil_resistance(
        input.turns_per_tooth,
        input.conductor.resistivity_ohm_m(),
        wire_length_m,
        wire_area_m2,
    );
    let phase_resistance_ohm =
        winding::phase_resistance(input.circuits_series, coil_resistance_ohm, input.circuits_parallel);

    // Losses
    let loss_per_phase_w = winding::loss_per_phase(current_rms_a, phase_resistance_ohm);
    let total_loss_w = winding::total_loss(loss_per_phase_w);
    let efficiency = winding::efficiency(mechanical_power_w, total_loss_w);

    log::debug!(
        "{}: E = {:.2} V, I_rms = {:.2} A, losses = {:.1} W, efficiency = {:.4}",
        input.label,
        total_emf_v,
        current_rms_a,
        total_loss_w,
        efficiency
    );

    CoilResult {
        mechanical_power_w,
        angular_speed_rad_s,
        external_radius_m,
        average_radius_m,
        circumference_m,
        circuit_length_m,
        slot_pitch_m,
        tooth_length_m,
        tooth_area_m2,
        flux_per_turn_wb,
        tangential_speed_m_s,
        operating_frequency_hz,
        emf_per_turn_v,
        total_emf_v,
        current_amplitude_a,
        current_rms_a,
        coil_current_a,
        wire_area_m2,
        wire_radius_m,
        wire_length_m,
        coil_resistance_ohm,
        phase_resistance_ohm,
        loss_per_phase_w,
        total_loss_w,
        efficiency,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shaft_power() {
        let input = CoilInput::default();
        assert!((input.shaft_power_w - 48_425.0).abs() < 1e-9);
        assert!(input.check_circuits().is_ok());
    }

    #[test]
    fn test_reference_design() {
        let result = calculate(&CoilInput::default());

        // P_mec = 48425 / 0.95 = 50973.68 W
        assert!((result.mechanical_power_w - 50_973.68).abs() < 0.01);
        // τ = 2π × 0.918 / 48 = 0.12017 m
        assert!((result.slot_pitch_m - 0.12017).abs() < 1e-4);
        // E = 8 × 2 × 9.635 = 154.2 V
        assert!((result.total_emf_v - 154.2).abs() < 0.1);
        // I_m = 50973.68 / (2 × 154.2) = 165.3 A
        assert!((result.current_amplitude_a - 165.3).abs() < 0.1);
        // A = 165.3 / 30e6 = 5.51 mm²
        assert!((result.wire_area_m2 * 1e6 - 5.51).abs() < 0.01);
        // R_coil ≈ 5.93 mΩ, R_phase ≈ 47.5 mΩ
        assert!((result.coil_resistance_ohm * 1e3 - 5.93).abs() < 0.01);
        assert!((result.phase_resistance_ohm * 1e3 - 47.5).abs() < 0.1);
        // P_loss ≈ 3 × 134.99² × 0.04747 ≈ 2595 W
        assert!((result.total_loss_w - 2595.0).abs() < 5.0);
        assert!((result.efficiency - 0.9516).abs() < 1e-3);
    }

    #[test]
    fn test_loss_breakdown() {
        let result = calculate(&CoilInput::default());
        assert!((result.total_loss_w - 3.0 * result.loss_per_phase_w).abs() < 1e-9);
        assert!(
            (result.loss_per_phase_w - result.current_rms_a.powi(2) * result.phase_resistance_ohm).abs() < 1e-9
        );
    }

    #[test]
    fn test_circuit_mismatch_is_recorded() {
        let input = CoilInput::default().with_circuits(3, 8, 8);
        assert!(input.check_circuits().is_err());

        let result = calculate(&input);
        assert!(!result.is_consistent());
        assert_eq!(result.warnings, vec![CalcError::circuit_mismatch(3, 8, 8)]);
        // Still computed with the counts as given
        assert!(result.efficiency.is_finite());
        assert!((result.coil_current_a - result.current_amplitude_a / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_circuits_split_current() {
        let single = calculate(&CoilInput::default());
        let double = calculate(&CoilInput::default().with_circuits(2, 4, 8));

        assert!(double.is_consistent());
        // Half the series turns halves the EMF, the extra parallel path
        // brings the current amplitude back to the same value
        assert!((double.total_emf_v - single.total_emf_v / 2.0).abs() < 1e-9);
        assert!((double.current_amplitude_a - single.current_amplitude_a).abs() < 1e-9);
        assert!((double.coil_current_a - single.coil_current_a / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_wire_diameter() {
        let result = calculate(&CoilInput::default());
        assert_eq!(result.wire_diameter_m(), 2.0 * result.wire_radius_m);
        // d = 2 × √(5.511e-6 / π) = 2.649 mm
        assert!((result.wire_diameter_m() * 1e3 - 2.649).abs() < 0.01);
    }

    #[test]
    fn test_serialization() {
        let input = CoilInput::default();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CoilInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("warnings"));
    }
}
