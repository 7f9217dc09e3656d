//! # Winding, Resistance and Loss Formulas
//!
//! Current sizing for a six-step drive, conductor sizing at a fixed current
//! density, coil resistance and the resulting Joule losses.
//!
//! ## Notation
//!
//! - `I_m` = Six-step phase current amplitude
//! - `I_rms` = RMS phase current
//! - `J` = Design current density in the conductor
//! - `ρ` = Conductor resistivity

use std::f64::consts::PI;

// =============================================================================
// CURRENTS
// =============================================================================

/// Six-step current amplitude per phase.
///
/// Two phases conduct at any instant, so the mechanical power is carried by
/// `2 · E · I_m` split over the parallel circuits.
///
/// # Formula
/// I_m = P_mec / (2 · E · N_par)
#[inline]
pub fn current_amplitude(mechanical_power: f64, total_emf: f64, circuits_parallel: u32) -> f64 {
    mechanical_power / (2.0 * total_emf * f64::from(circuits_parallel))
}

/// RMS value of a six-step current: I_rms = √(2/3) · I_m
#[inline]
pub fn current_rms(current_amplitude: f64) -> f64 {
    (2.0_f64 / 3.0).sqrt() * current_amplitude
}

/// Current carried by one coil wire: I_m / N_par
#[inline]
pub fn coil_current(current_amplitude: f64, circuits_parallel: u32) -> f64 {
    current_amplitude / f64::from(circuits_parallel)
}

// =============================================================================
// CONDUCTOR SIZING
// =============================================================================

/// Conductor cross-section for the design current density: A = I / J
#[inline]
pub fn wire_area(coil_current: f64, current_density: f64) -> f64 {
    coil_current / current_density
}

/// Radius of a round wire with cross-section `wire_area`: r = √(A/π)
#[inline]
pub fn wire_radius(wire_area: f64) -> f64 {
    (wire_area / PI).sqrt()
}

/// Total conductor length of one coil.
///
/// Each turn runs along both long sides of the tooth (less the tip
/// overhangs) and around two rounded end bends whose radius is the
/// insulated wire radius.
///
/// # Formula
/// l = N_turns · (2·(l_tooth + w - 4·w_tip) + 2π·(r_wire + t_insul))
///
/// # Arguments
/// * `turns_per_tooth` - N_turns
/// * `tooth_length` - l_tooth (m)
/// * `tooth_width` - w (m)
/// * `tooth_tip_width` - w_tip (m)
/// * `wire_radius` - r_wire (m)
/// * `insulation_thickness` - t_insul (m)
#[inline]
pub fn wire_length(
    turns_per_tooth: u32,
    tooth_length: f64,
    tooth_width: f64,
    tooth_tip_width: f64,
    wire_radius: f64,
    insulation_thickness: f64,
) -> f64 {
    let straight = 2.0 * (tooth_length + tooth_width - 4.0 * tooth_tip_width);
    let bends = 2.0 * PI * (wire_radius + insulation_thickness);
    f64::from(turns_per_tooth) * (straight + bends)
}

// =============================================================================
// RESISTANCE AND LOSSES
// =============================================================================

/// Resistance of one coil.
///
/// # Formula
/// R = N_turns · ρ · l / A
#[inline]
pub fn coil_resistance(turns_per_tooth: u32, resistivity: f64, wire_length: f64, wire_area: f64) -> f64 {
    f64::from(turns_per_tooth) * resistivity * wire_length / wire_area
}

/// Phase resistance: N_series · R_coil / N_par
#[inline]
pub fn phase_resistance(circuits_series: u32, coil_resistance: f64, circuits_parallel: u32) -> f64 {
    f64::from(circuits_series) * coil_resistance / f64::from(circuits_parallel)
}

/// Joule loss in one phase: I_rms² · R_phase
#[inline]
pub fn loss_per_phase(current_rms: f64, phase_resistance: f64) -> f64 {
    current_rms.powi(2) * phase_resistance
}

/// Joule loss of the three phases
#[inline]
pub fn total_loss(loss_per_phase: f64) -> f64 {
    3.0 * loss_per_phase
}

/// Electrical efficiency, friction excluded.
///
/// # Formula
/// η = P_mec / (P_mec + P_loss)
///
/// # Example
/// ```rust
/// use coil_core::equations::winding::efficiency;
///
/// assert!((efficiency(950.0, 50.0) - 0.95).abs() < 1e-12);
/// ```
#[inline]
pub fn efficiency(mechanical_power: f64, total_loss: f64) -> f64 {
    mechanical_power / (mechanical_power + total_loss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_step_currents() {
        // I_m = 50973.68 / (2 × 154.16 × 1) = 165.33 A
        let i_m = current_amplitude(50973.68, 154.16, 1);
        assert!((i_m - 165.33).abs() < 0.01);

        // I_rms = 0.81650 × 165.33 = 134.99 A
        assert!((current_rms(i_m) - 134.99).abs() < 0.01);

        assert_eq!(coil_current(i_m, 1), i_m);
        assert!((coil_current(100.0, 4) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_wire_sizing() {
        // 165.33 A at 30 A/mm² needs 5.511 mm²
        let a = wire_area(165.33, 30e6);
        assert!((a - 5.511e-6).abs() < 1e-9);

        let r = wire_radius(a);
        assert!((PI * r * r - a).abs() < 1e-15);
    }

    #[test]
    fn test_wire_length() {
        // 2 × (2 × (0.116166 + 0.036 - 0.012) + 2π × (0.0013245 + 0.0002)) = 0.57982 m
        let l = wire_length(2, 0.116166, 0.036, 0.003, 0.0013245, 0.0002);
        assert!((l - 0.57982).abs() < 1e-4);
    }

    #[test]
    fn test_resistance_and_loss() {
        let r_coil = coil_resistance(2, 0.0282e-6, 0.57982, 5.511e-6);
        // R = 2 × 0.0282e-6 × 0.57982 / 5.511e-6 = 5.934 mΩ
        assert!((r_coil - 5.934e-3).abs() < 1e-5);

        let r_phase = phase_resistance(8, r_coil, 1);
        assert!((r_phase - 8.0 * r_coil).abs() < 1e-15);
        assert!((phase_resistance(8, 1.0, 2) - 4.0).abs() < 1e-12);

        let p1 = loss_per_phase(10.0, 0.5);
        assert!((p1 - 50.0).abs() < 1e-12);
        assert!((total_loss(p1) - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_efficiency_bounds() {
        let eta = efficiency(50_000.0, 2_600.0);
        assert!(eta > 0.0 && eta < 1.0);
        assert_eq!(efficiency(100.0, 0.0), 1.0);
    }
}
