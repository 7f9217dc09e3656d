//! # Coil Design Equations
//!
//! All closed-form formulas used by the coil calculation, one pure function
//! per quantity. Keeping them here enables:
//! - Checking each formula in isolation against hand calculations
//! - Documentation of assumptions next to the formula
//! - A calculation pipeline that only wires results together
//!
//! ## Modules
//!
//! - [`geometry`] - Radii, slot pitch, tooth dimensions
//! - [`electromagnetic`] - Mechanical power, speeds, frequency, back-EMF
//! - [`winding`] - Currents, wire sizing, resistance, losses, efficiency
//!
//! ## Units
//!
//! Every argument and return value is in SI base units (m, m², W, V, A, Ω,
//! T, Wb, rad/s, Hz). Display units are applied by [`crate::report`] only.

pub mod electromagnetic;
pub mod geometry;
pub mod winding;

// Re-export commonly used items
pub use electromagnetic::{
    angular_speed,
    emf_per_turn,
    flux_per_turn,
    mechanical_power,
    operating_frequency,
    tangential_speed,
    total_emf,
};
pub use geometry::{
    average_radius,
    circuit_length,
    circumference,
    external_radius,
    slot_pitch,
    tooth_area,
    tooth_length,
};
pub use winding::{
    coil_current,
    coil_resistance,
    current_amplitude,
    current_rms,
    efficiency,
    loss_per_phase,
    phase_resistance,
    total_loss,
    wire_area,
    wire_length,
    wire_radius,
};
