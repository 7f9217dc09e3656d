//! # Error Types
//!
//! Structured error types for coil_core. Only one of them is raised by the
//! calculation itself ([`CalcError::CircuitMismatch`]), and that one is a
//! warning: the calculation records it and keeps going.
//!
//! ## Example
//!
//! ```rust
//! use coil_core::errors::{CalcError, CalcResult};
//!
//! fn check_pair(parallel: u32, series: u32, total: u32) -> CalcResult<()> {
//!     if parallel * series != total {
//!         return Err(CalcError::circuit_mismatch(parallel, series, total));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_pair(1, 8, 8).is_ok());
//! assert_eq!(check_pair(3, 8, 8).unwrap_err().error_code(), "CIRCUIT_MISMATCH");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for coil_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for coil design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Conductor material name not recognized
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Parallel and series circuit counts do not multiply to the total
    #[error(
        "number of circuits in parallel ({parallel}) and series ({series}) must match number of circuits ({total})"
    )]
    CircuitMismatch { parallel: u32, series: u32, total: u32 },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a CircuitMismatch error
    pub fn circuit_mismatch(parallel: u32, series: u32, total: u32) -> Self {
        CalcError::CircuitMismatch { parallel, series, total }
    }

    /// Whether the calculation can proceed past this error.
    ///
    /// Circuit mismatches are reported but the design is still evaluated
    /// with the counts as given.
    pub fn is_warning(&self) -> bool {
        matches!(self, CalcError::CircuitMismatch { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::CircuitMismatch { .. } => "CIRCUIT_MISMATCH",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::circuit_mismatch(3, 8, 8);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
        assert!(json.contains("\"type\":\"CircuitMismatch\""));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::circuit_mismatch(1, 1, 2).error_code(), "CIRCUIT_MISMATCH");
        assert_eq!(CalcError::material_not_found("gold").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_mismatch_message_names_counts() {
        let msg = CalcError::circuit_mismatch(3, 8, 8).to_string();
        assert!(msg.contains("parallel (3)"));
        assert!(msg.contains("series (8)"));
        assert!(msg.contains("circuits (8)"));
    }

    #[test]
    fn test_only_mismatch_is_warning() {
        assert!(CalcError::circuit_mismatch(2, 2, 3).is_warning());
        assert!(!CalcError::material_not_found("gold").is_warning());
    }
}
