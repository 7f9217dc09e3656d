//! # Materials Database
//!
//! Material definitions for the coil winding. The only material property the
//! design needs is the conductor's resistivity.
//!
//! ## Example
//!
//! ```rust
//! use coil_core::materials::Conductor;
//!
//! let wire = Conductor::Aluminum;
//! println!("{} rho = {} Ohm.m", wire, wire.resistivity_ohm_m());
//! ```

pub mod conductor;

pub use conductor::{Conductor, ALUMINUM_RESISTIVITY_OHM_M, COPPER_RESISTIVITY_OHM_M};
