//! Landing pad design and its physical model

use crate::DivisionError;
use serde::{Deserialize, Serialize};

/// One landing pad engineering variant.
///
/// The coefficients are calibration values for a single design; all pads share
/// the same formulas and differ only in these numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PadDesign {
    pub name: String,
    /// Dust transport coefficient (kg/m² per kN, scaled by 1/d²)
    pub dust_coeff: f64,
    /// Erosion depth per landing per unit thrust (cm/kN)
    pub erosion_coeff: f64,
    /// Construction cost ($)
    pub construction_cost: f64,
    /// Months between maintenance cycles
    #[serde(rename = "maintenance_interval_months")]
    pub maintenance_interval: f64,
}

impl PadDesign {
    pub fn new(
        name: impl Into<String>,
        dust_coeff: f64,
        erosion_coeff: f64,
        construction_cost: f64,
        maintenance_interval: f64,
    ) -> Self {
        Self {
            name: name.into(),
            dust_coeff,
            erosion_coeff,
            construction_cost,
            maintenance_interval,
        }
    }

    /// Dust deposited per landing at `distance` metres from the pad (kg/m²).
    ///
    /// Inverse-square falloff with distance, linear in thrust. Fails when the
    /// squared distance is zero, including positive distances that underflow.
    pub fn dust_deposition(&self, thrust: f64, distance: f64) -> Result<f64, DivisionError> {
        let d2 = distance.powi(2);
        if d2 == 0.0 {
            return Err(DivisionError { quantity: "distance" });
        }
        Ok(self.dust_coeff * thrust / d2)
    }

    /// Erosion depth from a single landing (cm).
    pub fn erosion_per_landing(&self, thrust: f64) -> f64 {
        self.erosion_coeff * thrust
    }

    /// Amortized maintenance cost over `lifetime_months` ($).
    ///
    /// Fractional maintenance cycles count proportionally.
    pub fn maintenance_cost(&self, lifetime_months: f64) -> Result<f64, DivisionError> {
        Ok(self.construction_cost * self.maintenance_cycles(lifetime_months)?)
    }

    /// Number of maintenance cycles over `lifetime_months`, fractional.
    pub fn maintenance_cycles(&self, lifetime_months: f64) -> Result<f64, DivisionError> {
        if self.maintenance_interval == 0.0 {
            return Err(DivisionError { quantity: "maintenance_interval" });
        }
        Ok(lifetime_months / self.maintenance_interval)
    }

    /// Bare regolith pad: cheapest to build, monthly rework
    pub fn bare_regolith() -> Self {
        Self::new("Bare Regolith Pad (BRP)", 0.02, 0.1, 500_000.0, 1.0)
    }

    /// Sintered or paved surface
    pub fn hardened_surface() -> Self {
        Self::new("Hardened Surface Pad (HSP)", 0.01, 0.05, 2_000_000.0, 6.0)
    }

    /// Hardened pad with an ejecta berm
    pub fn bermed() -> Self {
        Self::new("Bermed Pad (BP)", 0.005, 0.05, 2_500_000.0, 12.0)
    }

    /// Layered surface with berm and blast fence
    pub fn hybrid_multi_layer() -> Self {
        Self::new("Hybrid Multi-Layer Pad (HMP)", 0.003, 0.02, 3_500_000.0, 18.0)
    }

    /// The four reference designs, cheapest first
    pub fn reference_designs() -> Vec<Self> {
        vec![
            Self::bare_regolith(),
            Self::hardened_surface(),
            Self::bermed(),
            Self::hybrid_multi_layer(),
        ]
    }
}
