use crate::config::StudyConfig;
use crate::results::PadSeries;
use crate::sweep::{CostSummary, ResultRecord};
use crate::SCHEMA_VERSION;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct CsvWriter {
    w: BufWriter<File>,
}

impl CsvWriter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let f = File::create(path)?;
        Ok(Self { w: BufWriter::new(f) })
    }

    pub fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.w,
            "pad,distance_m,frequency_per_month,dust_kg_m2_month,erosion_cm_month"
        )?;
        Ok(())
    }

    pub fn write_row(&mut self, r: &ResultRecord) -> Result<()> {
        writeln!(
            self.w,
            "{},{:.4},{:.4},{:.6e},{:.6}",
            quote(&r.pad),
            r.distance,
            r.frequency,
            r.dust_rate,
            r.erosion_rate
        )?;
        Ok(())
    }

    pub fn write_records(&mut self, records: &[ResultRecord]) -> Result<()> {
        self.write_header()?;
        for r in records {
            self.write_row(r)?;
        }
        self.flush()
    }

    pub fn write_costs(&mut self, costs: &[CostSummary]) -> Result<()> {
        writeln!(
            self.w,
            "pad,construction_cost,maintenance_interval_months,maintenance_cycles,lifetime_maintenance_cost"
        )?;
        for c in costs {
            writeln!(
                self.w,
                "{},{:.2},{:.4},{:.4},{:.2}",
                quote(&c.pad),
                c.construction_cost,
                c.maintenance_interval_months,
                c.maintenance_cycles,
                c.lifetime_maintenance_cost
            )?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.w.flush()?;
        Ok(())
    }
}

/// Quote a field if it contains a separator or quote
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub schema_version: String,
    pub tool_version: String,
    pub platform: String,
    pub config_hash: String,
    pub config_snapshot: StudyConfig,
}

impl Manifest {
    pub fn new(cfg: &StudyConfig, cfg_text: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            platform: std::env::consts::OS.to_string(),
            config_hash: compute_hash(cfg_text),
            config_snapshot: cfg.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultBundle {
    pub manifest: Manifest,
    pub total_records: usize,
    pub records: Vec<ResultRecord>,
    pub costs: Vec<CostSummary>,
    pub series: Vec<PadSeries>,
}

impl ResultBundle {
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Path of the JSON bundle written next to the CSV at `out`.
///
/// Never equal to `out`: a `.json` output gets a `.bundle.json` sibling.
pub fn bundle_path(out: impl AsRef<Path>) -> PathBuf {
    let out = out.as_ref();
    if out.extension().map_or(false, |e| e.eq_ignore_ascii_case("json")) {
        out.with_extension("bundle.json")
    } else {
        out.with_extension("json")
    }
}

/// Fingerprint of the configuration text; stable within a build, not across Rust releases
pub fn compute_hash(data: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    data.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
