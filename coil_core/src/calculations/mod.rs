//! # Coil Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`coil`] - Single stator coil of an axial-flux permanent-magnet motor

pub mod coil;

// Re-export commonly used types
pub use coil::{calculate, CoilInput, CoilResult, HORSEPOWER_W};
