//! Winding Conductor Materials
//!
//! Electrical resistivity of the conductor used to wind the stator coils.
//! Values are room-temperature handbook figures in Ohm·meter.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Resistivity of aluminum (Ω·m)
pub const ALUMINUM_RESISTIVITY_OHM_M: f64 = 0.0282e-6;

/// Resistivity of annealed copper (Ω·m)
pub const COPPER_RESISTIVITY_OHM_M: f64 = 0.0172e-6;

/// Conductor material for the coil winding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conductor {
    /// Aluminum magnet wire
    #[default]
    Aluminum,
    /// Copper magnet wire
    Copper,
}

impl Conductor {
    /// All conductor variants
    pub const ALL: [Conductor; 2] = [Conductor::Aluminum, Conductor::Copper];

    /// Electrical resistivity in Ω·m
    pub fn resistivity_ohm_m(&self) -> f64 {
        match self {
            Conductor::Aluminum => ALUMINUM_RESISTIVITY_OHM_M,
            Conductor::Copper => COPPER_RESISTIVITY_OHM_M,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "al" | "aluminum" | "aluminium" => Ok(Conductor::Aluminum),
            "cu" | "copper" => Ok(Conductor::Copper),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Conductor::Aluminum => "Aluminum",
            Conductor::Copper => "Copper",
        }
    }
}

impl std::fmt::Display for Conductor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Conductor {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Conductor::from_str_flexible(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copper_conducts_better() {
        assert!(Conductor::Copper.resistivity_ohm_m() < Conductor::Aluminum.resistivity_ohm_m());
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(Conductor::from_str_flexible("Cu").unwrap(), Conductor::Copper);
        assert_eq!(Conductor::from_str_flexible(" aluminium ").unwrap(), Conductor::Aluminum);
        assert_eq!("AL".parse::<Conductor>().unwrap(), Conductor::Aluminum);
        assert!(Conductor::from_str_flexible("gold").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Conductor::Copper).unwrap();
        assert_eq!(json, "\"copper\"");

        let roundtrip: Conductor = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Conductor::Copper);
    }
}
