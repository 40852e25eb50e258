use crate::pad::PadDesign;
use crate::sweep::TradeStudy;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the points a `{ min, max, n }` axis may expand to
pub const MAX_AXIS_POINTS: usize = 1_000_000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub study: StudyInfo,
    pub vehicle: Vehicle,
    pub sweep: Sweep,
    pub pads: Vec<PadDesign>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudyInfo {
    #[serde(default = "default_study_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_study_name() -> String {
    "landing pad trade study".to_string()
}

fn default_version() -> String {
    "1".to_string()
}

impl Default for StudyInfo {
    fn default() -> Self {
        Self {
            name: default_study_name(),
            version: default_version(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Vehicle {
    /// Vehicle thrust at touchdown (kN)
    pub thrust_kn: f64,
    /// Mission lifetime (months)
    #[serde(default = "default_lifetime")]
    pub lifetime_months: f64,
}

fn default_lifetime() -> f64 {
    120.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sweep {
    /// Distances from pad to equipment (m)
    pub distances_m: Axis,
    /// Landing frequencies (landings/month)
    pub frequencies: Axis,
}

/// A sweep axis: explicit values, or `n` evenly spaced points in [min, max]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Axis {
    Values(Vec<f64>),
    Range { min: f64, max: f64, n: usize },
}

impl Axis {
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Axis::Values(ref v) => v.clone(),
            Axis::Range { min, max, n } => (0..n)
                .map(|i| {
                    if n > 1 {
                        min + (max - min) * (i as f64) / ((n - 1) as f64)
                    } else {
                        min
                    }
                })
                .collect(),
        }
    }

    /// Shape checks for a range; point values are checked by [`TradeStudy::new`].
    fn validate(&self, name: &str) -> Result<()> {
        if let Axis::Range { min, max, n } = *self {
            if n == 0 || n > MAX_AXIS_POINTS {
                bail!("{}.n must be in [1, {}]", name, MAX_AXIS_POINTS);
            }
            if !(min.is_finite() && max.is_finite()) {
                bail!("{}.min and {}.max must be finite", name, name);
            }
            if min > max {
                bail!("{}.min must be <= {}.max", name, name);
            }
        }
        Ok(())
    }
}

impl StudyConfig {
    /// Configuration matching [`TradeStudy::baseline`]
    pub fn baseline() -> Self {
        Self {
            study: StudyInfo {
                name: "Baseline lunar landing pad trade".to_string(),
                version: default_version(),
            },
            vehicle: Vehicle {
                thrust_kn: 40.0,
                lifetime_months: 120.0,
            },
            sweep: Sweep {
                distances_m: Axis::Values(vec![30.0, 40.0, 50.0, 60.0, 70.0]),
                frequencies: Axis::Range { min: 5.0, max: 20.0, n: 4 },
            },
            pads: PadDesign::reference_designs(),
        }
    }

    /// Check the file; pad and axis values are checked by [`TradeStudy::new`].
    pub fn validate(&self) -> Result<()> {
        self.to_study().map(|_| ())
    }

    /// Validate and build the study this file describes.
    pub fn to_study(&self) -> Result<TradeStudy> {
        if self.study.name.trim().is_empty() {
            bail!("study.name must not be empty");
        }
        self.sweep.distances_m.validate("sweep.distances_m")?;
        self.sweep.frequencies.validate("sweep.frequencies")?;

        let study = TradeStudy::new(
            self.pads.clone(),
            self.vehicle.thrust_kn,
            self.vehicle.lifetime_months,
            self.sweep.distances_m.values(),
            self.sweep.frequencies.values(),
        )?;
        Ok(study)
    }
}
