pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::SiteConfig;
pub use crate::core::{
    calculator::{CalculatorOutcome, Selection, SpeedCalculator},
    estimator::estimate_required_speed,
    leads::{LeadService, SimulatedSubmitter},
    recommender::recommend_plan,
};
pub use utils::error::{Result, SiteError};
