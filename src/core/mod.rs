pub mod calculator;
pub mod comparison;
pub mod coverage;
pub mod estimator;
pub mod leads;
pub mod links;
pub mod recommender;
pub mod render;

pub use crate::domain::model::{Activity, Plan};
pub use crate::domain::ports::{CatalogProvider, CoverageProvider, LeadSubmitter};
pub use crate::utils::error::Result;
