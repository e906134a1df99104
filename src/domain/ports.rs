use crate::domain::model::{
    Activity, City, ContactRequest, EstimatorSettings, Plan, SignupRequest, SubmissionReceipt,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the static catalogs behind the speed calculator.
pub trait CatalogProvider: Send + Sync {
    fn plans(&self) -> &[Plan];
    fn activities(&self) -> &[Activity];
    fn estimator_settings(&self) -> &EstimatorSettings;
}

pub trait CoverageProvider: Send + Sync {
    fn cities(&self) -> &[City];
    fn default_city(&self) -> &str;
}

/// Where validated leads go. The site has no backend yet, so the only
/// implementation waits and acknowledges.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    async fn submit_contact(&self, request: &ContactRequest) -> Result<SubmissionReceipt>;
    async fn submit_signup(&self, plan: &Plan, request: &SignupRequest) -> Result<SubmissionReceipt>;
}
