//! Per-pad views of a sweep result table
//!
//! A plotting front end draws one dust surface per pad over the
//! (distance, frequency) plane. These helpers split the flat record list into
//! those per-pad series without reordering anything.

use crate::sweep::ResultRecord;
use serde::Serialize;

/// Parallel columns for one pad, in record order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PadSeries {
    pub pad: String,
    pub distances: Vec<f64>,
    pub frequencies: Vec<f64>,
    pub dust: Vec<f64>,
    pub erosion: Vec<f64>,
}

impl PadSeries {
    fn new(pad: &str) -> Self {
        Self {
            pad: pad.to_string(),
            ..Default::default()
        }
    }

    fn push(&mut self, r: &ResultRecord) {
        self.distances.push(r.distance);
        self.frequencies.push(r.frequency);
        self.dust.push(r.dust_rate);
        self.erosion.push(r.erosion_rate);
    }

    pub fn len(&self) -> usize {
        self.dust.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dust.is_empty()
    }

    /// Highest dust deposition rate in the series
    pub fn peak_dust(&self) -> Option<f64> {
        self.dust.iter().copied().reduce(f64::max)
    }

    /// Highest erosion rate in the series
    pub fn peak_erosion(&self) -> Option<f64> {
        self.erosion.iter().copied().reduce(f64::max)
    }
}

/// Split records into one series per pad, pads in first-appearance order.
pub fn group_by_pad(records: &[ResultRecord]) -> Vec<PadSeries> {
    let mut groups: Vec<PadSeries> = Vec::new();
    for r in records {
        match groups.iter_mut().find(|g| g.pad == r.pad) {
            Some(g) => g.push(r),
            None => {
                let mut g = PadSeries::new(&r.pad);
                g.push(r);
                groups.push(g);
            }
        }
    }
    groups
}

/// Series for a single pad; empty if the pad never appears.
pub fn series_for(records: &[ResultRecord], pad: &str) -> PadSeries {
    let mut series = PadSeries::new(pad);
    for r in records.iter().filter(|r| r.pad == pad) {
        series.push(r);
    }
    series
}
