use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use padtrade::io::{bundle_path, CsvWriter, Manifest, ResultBundle};
use padtrade::{group_by_pad, StudyConfig, TradeStudy};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "padtrade")]
#[command(version)]
#[command(about = "Landing pad trade study - dust deposition and erosion sweeps")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to TOML study file (built-in baseline study if omitted)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output path
    #[arg(short, long, global = true)]
    out: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sweep every pad over all distances and frequencies
    Run {
        /// Also write a JSON result bundle next to the CSV
        #[arg(long)]
        json: bool,
    },
    /// Lifetime maintenance cost per pad
    Costs,
    /// Validate a study file
    Validate,
    /// Print the built-in baseline study as TOML
    Baseline,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "padtrade=debug" } else { "padtrade=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the study file, or fall back to the baseline study.
fn load_config(path: Option<&str>) -> Result<(StudyConfig, String)> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path))?;
            let cfg: StudyConfig = toml::from_str(&text)
                .with_context(|| format!("failed to parse config: {}", path))?;
            Ok((cfg, text))
        }
        None => {
            info!("no --config given, using built-in baseline study");
            let cfg = StudyConfig::baseline();
            let text = toml::to_string_pretty(&cfg)?;
            Ok((cfg, text))
        }
    }
}

fn ensure_parent(path: &str) -> Result<()> {
    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).with_context(|| {
                format!("failed to create output directory: {}", dir.display())
            })?;
        }
    }
    Ok(())
}

fn run_sweep(
    cfg: &StudyConfig,
    cfg_text: &str,
    study: &TradeStudy,
    out_path: &str,
    json_output: bool,
) -> Result<()> {
    info!(
        pads = study.pads().len(),
        distances = study.distances().len(),
        frequencies = study.frequencies().len(),
        thrust_kn = study.vehicle_thrust(),
        "running sweep of {} points",
        study.grid_size()
    );

    let start = Instant::now();
    let records = study.run().context("sweep aborted")?;
    let wall_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    ensure_parent(out_path)?;
    let mut w = CsvWriter::create(out_path)?;
    w.write_records(&records)?;
    info!(
        "sweep complete: {} records in {:.2} ms -> {}",
        records.len(),
        wall_time_ms,
        out_path
    );

    let series = group_by_pad(&records);
    for s in &series {
        debug!(
            pad = %s.pad,
            peak_dust = s.peak_dust().unwrap_or(0.0),
            peak_erosion = s.peak_erosion().unwrap_or(0.0),
            "pad series"
        );
    }

    if json_output {
        let json_path = bundle_path(out_path);
        let bundle = ResultBundle {
            manifest: Manifest::new(cfg, cfg_text),
            total_records: records.len(),
            records,
            costs: study.cost_summary()?,
            series,
        };
        bundle.write_json(&json_path)?;
        info!("JSON bundle: {}", json_path.display());
    }

    Ok(())
}

fn run_costs(study: &TradeStudy, out_path: &str) -> Result<()> {
    let costs = study.cost_summary()?;

    ensure_parent(out_path)?;
    let mut w = CsvWriter::create(out_path)?;
    w.write_costs(&costs)?;

    info!("lifetime costs over {} months:", study.lifetime_months());
    for c in &costs {
        info!(
            "  {:32} build=${:>12.0} cycles={:>7.2} maintenance=${:>14.0}",
            c.pad, c.construction_cost, c.maintenance_cycles, c.lifetime_maintenance_cost
        );
    }
    info!("cost table written to: {}", out_path);
    Ok(())
}

fn validate_config(cfg_path: &str) -> Result<()> {
    let (cfg, _) = load_config(Some(cfg_path))?;
    let study = cfg.to_study()?;

    info!("config valid: {}", cfg_path);
    info!("  study: {} v{}", cfg.study.name, cfg.study.version);
    info!(
        "  vehicle: thrust={} kN, lifetime={} months",
        cfg.vehicle.thrust_kn, cfg.vehicle.lifetime_months
    );
    info!("  distances (m): {:?}", study.distances());
    info!("  frequencies (/month): {:?}", study.frequencies());
    for pad in study.pads() {
        info!(
            "  pad: {} dust_coeff={} erosion_coeff={} cost={} interval={} months",
            pad.name,
            pad.dust_coeff,
            pad.erosion_coeff,
            pad.construction_cost,
            pad.maintenance_interval
        );
    }
    info!("  grid size: {} points", study.grid_size());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Baseline => {
            print!("{}", toml::to_string_pretty(&StudyConfig::baseline())?);
            Ok(())
        }
        Commands::Validate => {
            let cfg_path = args.config.context("--config required for validate")?;
            validate_config(&cfg_path)
        }
        Commands::Costs => {
            let out_path = args.out.unwrap_or_else(|| "results/pad_costs.csv".to_string());
            let (cfg, _) = load_config(args.config.as_deref())?;
            let study = cfg.to_study()?;
            run_costs(&study, &out_path)
        }
        Commands::Run { json } => {
            let out_path = args.out.unwrap_or_else(|| "results/trade_study.csv".to_string());
            let (cfg, cfg_text) = load_config(args.config.as_deref())?;
            let study = cfg.to_study()?;
            info!("{} v{}", cfg.study.name, cfg.study.version);
            run_sweep(&cfg, &cfg_text, &study, &out_path, json)
        }
    }
}
