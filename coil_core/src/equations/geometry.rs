//! # Stator Geometry Formulas
//!
//! Flat-developed geometry of the axial-flux stator at its average radius.
//! The annulus between the internal and external radius is unrolled into a
//! strip whose length is the average circumference.
//!
//! ## Notation
//!
//! - `r_int` = Internal radius of the active area
//! - `r_ext` = External radius of the active area
//! - `r_avg` = Average radius
//! - `w` = Radial width of a tooth
//! - `τ` = Slot pitch (arc length between consecutive slots at `r_avg`)
//! - `x` = Slot opening between two teeth

use std::f64::consts::PI;

// =============================================================================
// RADII
// =============================================================================

/// External radius of the active area.
///
/// # Formula
/// r_ext = r_int + w
#[inline]
pub fn external_radius(internal_radius: f64, tooth_width: f64) -> f64 {
    internal_radius + tooth_width
}

/// Average radius, the arithmetic mean of the internal and external radius.
///
/// ```text
///          r_ext
///     ├──────────────┤
///     ├──────┤ r_avg
///     ├─┤ r_int
///     ●─┬────┼────┬───
///       └── w ────┘
/// ```
///
/// # Formula
/// r_avg = (r_int + r_ext) / 2
///
/// # Example
/// ```rust
/// use coil_core::equations::geometry::average_radius;
///
/// let r_avg = average_radius(0.9, 0.936);
/// assert!((r_avg - 0.918).abs() < 1e-12);
/// ```
#[inline]
pub fn average_radius(internal_radius: f64, external_radius: f64) -> f64 {
    (internal_radius + external_radius) / 2.0
}

/// Circumference at the average radius: 2π·r_avg
#[inline]
pub fn circumference(average_radius: f64) -> f64 {
    2.0 * PI * average_radius
}

// =============================================================================
// SLOTS AND TEETH
// =============================================================================

/// Arc length shared by each circuit when the average circumference is split
/// evenly between all circuits.
#[inline]
pub fn circuit_length(circumference: f64, circuit_count: u32) -> f64 {
    circumference / f64::from(circuit_count)
}

/// Slot pitch at the average radius.
///
/// # Formula
/// τ = 2π·r_avg / N_slots
///
/// # Arguments
/// * `average_radius` - r_avg (m)
/// * `slot_count` - Number of stator slots
///
/// # Returns
/// Circumferential distance between consecutive slots (m)
#[inline]
pub fn slot_pitch(average_radius: f64, slot_count: u32) -> f64 {
    circumference(average_radius) / f64::from(slot_count)
}

/// Average tooth length along the circumference: τ - x
#[inline]
pub fn tooth_length(slot_pitch: f64, slot_opening: f64) -> f64 {
    slot_pitch - slot_opening
}

/// Airgap-facing area of one tooth.
///
/// ```text
///     ┌───────────────┐
///     │               │
///   w │     tooth     │
///     │               │
///     └───────────────┘
///         tooth_length
/// ```
///
/// # Formula
/// A = w × l_tooth
#[inline]
pub fn tooth_area(tooth_width: f64, tooth_length: f64) -> f64 {
    tooth_width * tooth_length
}
