//! # coil_core - Axial-Flux Coil Design Engine
//!
//! `coil_core` computes the electromagnetic and thermal design figures of one
//! stator coil of an axial-flux permanent-magnet motor: back-EMF, phase
//! current, wire size, resistance, Joule losses and efficiency. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **SI Internally**: Display units are applied only when rendering
//! - **Warn, Don't Abort**: Inconsistent circuit counts are reported, not rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use coil_core::calculations::{calculate, CoilInput};
//! use coil_core::report::render_text;
//!
//! let input = CoilInput::default();
//! let result = calculate(&input);
//! println!("{}", render_text(&input, &result));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Coil input, result and the calculation pipeline
//! - [`equations`] - The individual design formulas
//! - [`materials`] - Conductor materials
//! - [`report`] - Text and JSON report rendering
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CoilInput, CoilResult};
pub use errors::{CalcError, CalcResult};
pub use materials::Conductor;
