//! Trade study sweep over pad designs, distances and landing frequencies

use crate::pad::PadDesign;
use crate::{Result, TradeError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One evaluation at a single (pad, distance, frequency) point.
///
/// Owns its values; later changes to the design do not reach it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResultRecord {
    pub pad: String,
    /// Distance from pad to equipment (m)
    pub distance: f64,
    /// Landings per month
    pub frequency: f64,
    /// Dust deposition rate (kg/m²/month)
    pub dust_rate: f64,
    /// Erosion rate (cm/month)
    pub erosion_rate: f64,
}

/// A single point of the sweep grid
#[derive(Debug, Clone, Copy)]
pub struct GridPoint<'a> {
    pub pad: &'a PadDesign,
    pub distance: f64,
    pub frequency: f64,
}

/// Cartesian product of pads x distances x frequencies, in nested input order.
///
/// Lazy and restartable: clone the iterator to walk the grid again.
pub fn grid<'a>(
    designs: &'a [PadDesign],
    distances: &'a [f64],
    frequencies: &'a [f64],
) -> impl Iterator<Item = GridPoint<'a>> + Clone + 'a {
    designs.iter().flat_map(move |pad| {
        distances.iter().flat_map(move |&distance| {
            frequencies.iter().map(move |&frequency| GridPoint {
                pad,
                distance,
                frequency,
            })
        })
    })
}

/// Evaluate the pad model at one grid point and scale to a monthly rate.
pub fn evaluate(point: GridPoint<'_>, thrust: f64) -> Result<ResultRecord> {
    let GridPoint { pad, distance, frequency } = point;
    let dust_per_landing = pad
        .dust_deposition(thrust, distance)
        .map_err(|source| TradeError::Evaluation {
            pad: pad.name.clone(),
            distance,
            frequency,
            source,
        })?;
    let erosion_per_landing = pad.erosion_per_landing(thrust);

    Ok(ResultRecord {
        pad: pad.name.clone(),
        distance,
        frequency,
        dust_rate: dust_per_landing * frequency,
        erosion_rate: erosion_per_landing * frequency,
    })
}

/// Run the full sweep.
///
/// Returns one record per (pad, distance, frequency) triple, ordered by pad,
/// then distance, then frequency. The first failing point aborts the run and
/// no records are returned.
pub fn run(
    designs: &[PadDesign],
    vehicle_thrust: f64,
    distances: &[f64],
    frequencies: &[f64],
) -> Result<Vec<ResultRecord>> {
    let records = grid(designs, distances, frequencies)
        .map(|point| evaluate(point, vehicle_thrust))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        pads = designs.len(),
        distances = distances.len(),
        frequencies = frequencies.len(),
        records = records.len(),
        "sweep complete"
    );
    Ok(records)
}

/// Lifetime cost figures for one pad design
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    pub pad: String,
    pub construction_cost: f64,
    pub maintenance_interval_months: f64,
    pub maintenance_cycles: f64,
    pub lifetime_maintenance_cost: f64,
}

/// A validated study: pads under comparison, shared vehicle parameters and
/// the sweep axes.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeStudy {
    pads: Vec<PadDesign>,
    vehicle_thrust: f64,
    lifetime_months: f64,
    distances: Vec<f64>,
    frequencies: Vec<f64>,
}

impl TradeStudy {
    pub fn new(
        pads: Vec<PadDesign>,
        vehicle_thrust: f64,
        lifetime_months: f64,
        distances: Vec<f64>,
        frequencies: Vec<f64>,
    ) -> Result<Self> {
        check_positive("vehicle thrust", vehicle_thrust)?;
        check_positive("mission lifetime", lifetime_months)?;
        validate_pads(&pads)?;
        validate_axis("distances", &distances)?;
        if let Some(d) = distances.iter().find(|d| d.powi(2) == 0.0) {
            return Err(TradeError::InvalidConfig(format!(
                "distance {:e} m is too small to square",
                d
            )));
        }
        validate_axis("frequencies", &frequencies)?;

        Ok(Self {
            pads,
            vehicle_thrust,
            lifetime_months,
            distances,
            frequencies,
        })
    }

    /// Reference study: four pad designs, 40 kN lander, ten year lifetime
    pub fn baseline() -> Self {
        Self {
            pads: PadDesign::reference_designs(),
            vehicle_thrust: 40.0,
            lifetime_months: 120.0,
            distances: vec![30.0, 40.0, 50.0, 60.0, 70.0],
            frequencies: vec![5.0, 10.0, 15.0, 20.0],
        }
    }

    pub fn pads(&self) -> &[PadDesign] {
        &self.pads
    }

    pub fn vehicle_thrust(&self) -> f64 {
        self.vehicle_thrust
    }

    pub fn lifetime_months(&self) -> f64 {
        self.lifetime_months
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Number of records a full sweep produces
    pub fn grid_size(&self) -> usize {
        self.pads.len() * self.distances.len() * self.frequencies.len()
    }

    /// Sweep the study's own axes.
    pub fn run(&self) -> Result<Vec<ResultRecord>> {
        self.run_full_study(&self.distances, &self.frequencies)
    }

    /// Sweep the study's pads over caller-supplied axes.
    ///
    /// The axes are not validated here; a zero distance fails the run.
    pub fn run_full_study(
        &self,
        distances: &[f64],
        frequencies: &[f64],
    ) -> Result<Vec<ResultRecord>> {
        run(&self.pads, self.vehicle_thrust, distances, frequencies)
    }

    /// Lifetime maintenance cost of every pad, in pad order.
    pub fn cost_summary(&self) -> Result<Vec<CostSummary>> {
        self.pads
            .iter()
            .map(|pad| -> Result<CostSummary> {
                let invalid = |e: crate::DivisionError| {
                    TradeError::InvalidConfig(format!("pad '{}': {}", pad.name, e))
                };
                let cycles = pad
                    .maintenance_cycles(self.lifetime_months)
                    .map_err(invalid)?;
                let cost = pad
                    .maintenance_cost(self.lifetime_months)
                    .map_err(invalid)?;
                Ok(CostSummary {
                    pad: pad.name.clone(),
                    construction_cost: pad.construction_cost,
                    maintenance_interval_months: pad.maintenance_interval,
                    maintenance_cycles: cycles,
                    lifetime_maintenance_cost: cost,
                })
            })
            .collect()
    }
}

fn check_positive(what: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(TradeError::InvalidConfig(format!(
            "{} must be positive and finite, got {}",
            what, value
        )));
    }
    Ok(())
}

fn check_non_negative(what: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(TradeError::InvalidConfig(format!(
            "{} must be non-negative and finite, got {}",
            what, value
        )));
    }
    Ok(())
}

fn validate_pads(pads: &[PadDesign]) -> Result<()> {
    if pads.is_empty() {
        return Err(TradeError::InvalidConfig("at least one pad design is required".into()));
    }

    let mut seen = HashSet::new();
    for pad in pads {
        if pad.name.trim().is_empty() {
            return Err(TradeError::InvalidConfig("pad name must not be empty".into()));
        }
        if !seen.insert(pad.name.as_str()) {
            return Err(TradeError::InvalidConfig(format!("duplicate pad name '{}'", pad.name)));
        }
        check_non_negative(&format!("{}: dust_coeff", pad.name), pad.dust_coeff)?;
        check_non_negative(&format!("{}: erosion_coeff", pad.name), pad.erosion_coeff)?;
        check_non_negative(&format!("{}: construction_cost", pad.name), pad.construction_cost)?;
        check_positive(&format!("{}: maintenance_interval", pad.name), pad.maintenance_interval)?;
    }
    Ok(())
}

fn validate_axis(name: &str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(TradeError::InvalidConfig(format!("{} must not be empty", name)));
    }
    for (i, &v) in values.iter().enumerate() {
        check_positive(&format!("{}[{}]", name, i), v)?;
    }
    Ok(())
}
