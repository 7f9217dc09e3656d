//! # Mechanical and Electromagnetic Formulas
//!
//! Shaft power, rotor speed, and the back-EMF induced in a tooth coil as the
//! magnets sweep past it.
//!
//! ## Assumptions
//!
//! - The whole tooth area is covered by magnet when the flux linkage peaks
//! - The flux reverses once per slot pitch of rotor travel
//! - Frequencies are electrical, i.e. pole pairs × mechanical revolutions

use std::f64::consts::PI;

/// Mechanical power the rotor must produce so that `shaft_power` remains
/// after friction.
///
/// # Formula
/// P_mec = P_shaft / (1 - c_fric)
///
/// # Arguments
/// * `shaft_power` - Power available at the shaft (W)
/// * `friction_fraction` - Friction losses as a fraction of P_mec (0 to 1)
#[inline]
pub fn mechanical_power(shaft_power: f64, friction_fraction: f64) -> f64 {
    shaft_power / (1.0 - friction_fraction)
}

/// Convert rotor speed from rpm to rad/s: ω = n·π/30
///
/// # Example
/// ```rust
/// use coil_core::equations::electromagnetic::angular_speed;
///
/// let omega = angular_speed(1600.0);
/// assert!((omega - 167.5516).abs() < 1e-4);
/// ```
#[inline]
pub fn angular_speed(speed_rpm: f64) -> f64 {
    speed_rpm * PI / 30.0
}

/// Linear speed of the magnets at the average radius: v = ω·r_avg
#[inline]
pub fn tangential_speed(angular_speed: f64, average_radius: f64) -> f64 {
    angular_speed * average_radius
}

/// Operating frequency seen by the stator steel.
///
/// # Formula
/// f = ω / 2π × N_poles / 2
#[inline]
pub fn operating_frequency(angular_speed: f64, pole_count: u32) -> f64 {
    angular_speed / (2.0 * PI) * f64::from(pole_count) / 2.0
}

/// Flux linked by one turn: Φ = A_tooth · B
#[inline]
pub fn flux_per_turn(tooth_area: f64, flux_density: f64) -> f64 {
    tooth_area * flux_density
}

/// Back-EMF amplitude induced in one turn.
///
/// The flux swings from +Φ to -Φ while the rotor travels one slot pitch, so
/// the average rate of change is 2Φ over τ / v seconds.
///
/// # Formula
/// e = 2 · v · Φ / τ
///
/// # Arguments
/// * `tangential_speed` - v (m/s)
/// * `flux_per_turn` - Φ (Wb)
/// * `slot_pitch` - τ (m)
///
/// # Returns
/// EMF per turn in volts
#[inline]
pub fn emf_per_turn(tangential_speed: f64, flux_per_turn: f64, slot_pitch: f64) -> f64 {
    2.0 * tangential_speed * flux_per_turn / slot_pitch
}

/// Phase back-EMF: all series circuits, each with `turns_per_tooth` turns.
///
/// # Formula
/// E = N_series · N_turns · e
#[inline]
pub fn total_emf(circuits_series: u32, turns_per_tooth: u32, emf_per_turn: f64) -> f64 {
    f64::from(circuits_series) * f64::from(turns_per_tooth) * emf_per_turn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mechanical_power_exceeds_shaft_power() {
        let p = mechanical_power(1000.0, 0.05);
        assert!((p - 1052.6316).abs() < 1e-3);
        assert_eq!(mechanical_power(1000.0, 0.0), 1000.0);
    }

    #[test]
    fn test_operating_frequency() {
        // 1600 rpm, 40 poles: 1600/60 × 20 = 533.33 Hz
        let f = operating_frequency(angular_speed(1600.0), 40);
        assert!((f - 533.3333).abs() < 1e-3);
    }

    #[test]
    fn test_emf_chain() {
        // v = 167.5516 × 0.918 = 153.8124 m/s
        let v = tangential_speed(angular_speed(1600.0), 0.918);
        assert!((v - 153.8124).abs() < 1e-3);

        // e = 2 × 153.8124 × 3.76379e-3 / 0.120166 = 9.635 V
        let e = emf_per_turn(v, flux_per_turn(4.18199e-3, 0.9), 0.120166);
        assert!((e - 9.635).abs() < 1e-2);

        assert!((total_emf(8, 2, e) - 16.0 * e).abs() < 1e-12);
    }
}
