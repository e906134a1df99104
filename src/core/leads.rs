use crate::core::coverage::resolve_city;
use crate::domain::model::{
    ContactRequest, FormSettings, LeadKind, Plan, SignupRequest, SubmissionReceipt,
};
use crate::domain::ports::{CatalogProvider, CoverageProvider, LeadSubmitter};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{require_filled, validate_email, Validate};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

impl Validate for ContactRequest {
    fn validate(&self) -> Result<()> {
        require_filled("name", &self.name)?;
        validate_email("email", &self.email)?;
        require_filled("message", &self.message)?;
        Ok(())
    }
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<()> {
        require_filled("name", &self.name)?;
        validate_email("email", &self.email)?;
        require_filled("address", &self.address)?;
        require_filled("phone", &self.phone)?;
        Ok(())
    }
}

/// Stands in for a lead backend: waits like a network round trip would and
/// acknowledges every request.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    contact_delay: Duration,
    signup_delay: Duration,
    signup_redirect: String,
}

impl SimulatedSubmitter {
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            contact_delay: Duration::from_millis(settings.contact_delay_ms),
            signup_delay: Duration::from_millis(settings.signup_delay_ms),
            signup_redirect: settings.signup_redirect.clone(),
        }
    }

    fn receipt(
        kind: LeadKind,
        title: &str,
        description: &str,
        redirect: Option<String>,
    ) -> SubmissionReceipt {
        let received_at = Utc::now();
        SubmissionReceipt {
            kind,
            reference: format!(
                "{}-{}",
                kind.reference_prefix(),
                received_at.format("%Y%m%d%H%M%S%3f")
            ),
            received_at,
            title: title.to_string(),
            description: description.to_string(),
            redirect,
        }
    }
}

#[async_trait]
impl LeadSubmitter for SimulatedSubmitter {
    async fn submit_contact(&self, request: &ContactRequest) -> Result<SubmissionReceipt> {
        tracing::debug!("Simulating contact delivery for {}", request.email);
        tokio::time::sleep(self.contact_delay).await;

        Ok(Self::receipt(
            LeadKind::Contact,
            "Mensagem enviada!",
            "Entraremos em contato em breve. Obrigado!",
            None,
        ))
    }

    async fn submit_signup(&self, plan: &Plan, request: &SignupRequest) -> Result<SubmissionReceipt> {
        tracing::debug!(
            "Simulating signup delivery for {} ({} {} Mbps)",
            request.email,
            plan.name,
            plan.speed_mbps
        );
        tokio::time::sleep(self.signup_delay).await;

        Ok(Self::receipt(
            LeadKind::Signup,
            "Solicitação enviada!",
            "Entraremos em contato em breve para finalizar a contratação.",
            Some(self.signup_redirect.clone()),
        ))
    }
}

/// Validates visitor forms and hands them to a [`LeadSubmitter`].
pub struct LeadService<S: LeadSubmitter, C: CatalogProvider + CoverageProvider> {
    submitter: S,
    config: C,
}

impl<S: LeadSubmitter, C: CatalogProvider + CoverageProvider> LeadService<S, C> {
    pub fn new(submitter: S, config: C) -> Self {
        Self { submitter, config }
    }

    pub async fn submit_contact(&self, request: ContactRequest) -> Result<SubmissionReceipt> {
        let request = ContactRequest {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request
                .phone
                .map(|phone| phone.trim().to_string())
                .filter(|phone| !phone.is_empty()),
            message: request.message.trim().to_string(),
        };

        if let Err(e) = request.validate() {
            tracing::warn!("Contact form rejected: {}", e);
            return Err(e);
        }

        let receipt = self
            .submitter
            .submit_contact(&request)
            .await
            .inspect_err(|e| tracing::error!("Contact submission failed: {}", e))?;
        tracing::info!("Contact message accepted, reference {}", receipt.reference);
        Ok(receipt)
    }

    pub async fn submit_signup(&self, request: SignupRequest) -> Result<SubmissionReceipt> {
        let mut request = SignupRequest {
            plan: request.plan.trim().to_string(),
            city: request.city,
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            address: request.address.trim().to_string(),
            phone: request.phone.trim().to_string(),
        };

        if let Err(e) = request.validate() {
            tracing::warn!("Signup form rejected: {}", e);
            return Err(e);
        }

        let plan = self.resolve_plan(&request.plan)?;
        let city = resolve_city(&self.config, request.city.as_deref())?;
        request.plan = plan.name.clone();
        request.city = Some(city.name.clone());

        let receipt = self
            .submitter
            .submit_signup(plan, &request)
            .await
            .inspect_err(|e| tracing::error!("Signup submission failed: {}", e))?;
        tracing::info!(
            "Signup for plan '{}' in {} accepted, reference {}",
            plan.name,
            city.name,
            receipt.reference
        );
        Ok(receipt)
    }

    /// Plan named on the signup form; an empty name means the featured plan.
    pub fn resolve_plan(&self, name: &str) -> Result<&Plan> {
        let plans = self.config.plans();

        if name.is_empty() {
            return plans
                .iter()
                .find(|plan| plan.highlighted)
                .or_else(|| plans.first())
                .ok_or(SiteError::EmptyCatalogError);
        }

        plans
            .iter()
            .find(|plan| plan.name == name)
            .ok_or_else(|| SiteError::UnknownPlanError {
                name: name.to_string(),
            })
    }
}
