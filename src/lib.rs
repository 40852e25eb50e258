//! PADTRADE - Landing pad trade study
//!
//! Compares landing pad designs against operating conditions (vehicle thrust,
//! landing frequency, distance to nearby equipment) and estimates two effects
//! over a mission lifetime: dust deposited on surrounding hardware and surface
//! erosion at the pad itself.
//!
//! # Model
//!
//! ```text
//! dust(d, f)  = k_dust * T / d² * f        [kg/m²/month]
//! erosion(f)  = k_eros * T * f             [cm/month]
//! cost(L)     = C_build * L / t_maint      [$]
//! ```
//!
//! | Symbol   | Units      | Description                          |
//! |----------|------------|--------------------------------------|
//! | T        | kN         | Vehicle thrust                       |
//! | d        | m          | Distance from pad to equipment       |
//! | f        | 1/month    | Landing frequency                    |
//! | L        | months     | Mission lifetime                     |
//! | t_maint  | months     | Maintenance interval of the pad      |
//!
//! The sweep evaluates every (pad, distance, frequency) combination in nested
//! input order and returns the full table or nothing at all.

use thiserror::Error;

pub mod config;
pub mod io;
pub mod pad;
pub mod results;
pub mod sweep;

pub use config::StudyConfig;
pub use pad::PadDesign;
pub use results::{group_by_pad, PadSeries};
pub use sweep::{CostSummary, ResultRecord, TradeStudy};

/// JSON bundle schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// A divisor in one of the pad formulas was zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("division by zero: {quantity} is 0")]
pub struct DivisionError {
    pub quantity: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("invalid study configuration: {0}")]
    InvalidConfig(String),
    #[error("evaluation failed at pad '{pad}', distance {distance} m, frequency {frequency}/month: {source}")]
    Evaluation {
        pad: String,
        distance: f64,
        frequency: f64,
        #[source]
        source: DivisionError,
    },
}

pub type Result<T> = std::result::Result<T, TradeError>;
