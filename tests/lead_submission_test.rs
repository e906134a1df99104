use anyhow::Result;
use mundialnet_site::core::leads::{LeadService, SimulatedSubmitter};
use mundialnet_site::domain::model::{
    ContactRequest, FormSettings, LeadKind, Plan, SignupRequest, SubmissionReceipt,
};
use mundialnet_site::domain::ports::LeadSubmitter;
use mundialnet_site::{SiteConfig, SiteError};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Records what reaches the submitter instead of acknowledging blindly.
#[derive(Clone, Default)]
struct RecordingSubmitter {
    signups: Arc<Mutex<Vec<(String, SignupRequest)>>>,
    contacts: Arc<Mutex<Vec<ContactRequest>>>,
}

#[async_trait::async_trait]
impl LeadSubmitter for RecordingSubmitter {
    async fn submit_contact(&self, request: &ContactRequest) -> mundialnet_site::Result<SubmissionReceipt> {
        self.contacts.lock().await.push(request.clone());
        SimulatedSubmitter::new(&instant()).submit_contact(request).await
    }

    async fn submit_signup(
        &self,
        plan: &Plan,
        request: &SignupRequest,
    ) -> mundialnet_site::Result<SubmissionReceipt> {
        self.signups
            .lock()
            .await
            .push((plan.name.clone(), request.clone()));
        SimulatedSubmitter::new(&instant()).submit_signup(plan, request).await
    }
}

/// Stands in for a lead backend that is down.
struct UnreachableSubmitter;

#[async_trait::async_trait]
impl LeadSubmitter for UnreachableSubmitter {
    async fn submit_contact(&self, _request: &ContactRequest) -> mundialnet_site::Result<SubmissionReceipt> {
        Err(SiteError::SubmissionError {
            message: "connection refused".to_string(),
        })
    }

    async fn submit_signup(
        &self,
        _plan: &Plan,
        _request: &SignupRequest,
    ) -> mundialnet_site::Result<SubmissionReceipt> {
        Err(SiteError::SubmissionError {
            message: "connection refused".to_string(),
        })
    }
}

fn instant() -> FormSettings {
    FormSettings {
        contact_delay_ms: 0,
        signup_delay_ms: 0,
        ..FormSettings::default()
    }
}

fn signup() -> SignupRequest {
    SignupRequest {
        plan: String::new(),
        city: None,
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        address: "Rua das Flores, 12, Centro".to_string(),
        phone: "(98) 98888-7777".to_string(),
    }
}

#[tokio::test]
async fn test_signup_without_plan_uses_featured_plan_and_default_city() -> Result<()> {
    let recorder = RecordingSubmitter::default();
    let service = LeadService::new(recorder.clone(), SiteConfig::builtin()?);

    let receipt = service.submit_signup(signup()).await?;
    assert_eq!(receipt.kind, LeadKind::Signup);
    assert_eq!(receipt.title, "Solicitação enviada!");

    let signups = recorder.signups.lock().await;
    assert_eq!(signups.len(), 1);
    assert_eq!(signups[0].0, "Básico");
    assert_eq!(signups[0].1.plan, "Básico");
    assert_eq!(signups[0].1.city.as_deref(), Some("Brejo - MA"));
    Ok(())
}

#[tokio::test]
async fn test_signup_keeps_served_city() -> Result<()> {
    let recorder = RecordingSubmitter::default();
    let service = LeadService::new(recorder.clone(), SiteConfig::builtin()?);

    let request = SignupRequest {
        plan: "Família".to_string(),
        city: Some("São Bernardo - MA".to_string()),
        ..signup()
    };
    service.submit_signup(request).await?;

    let signups = recorder.signups.lock().await;
    assert_eq!(signups[0].0, "Família");
    assert_eq!(signups[0].1.city.as_deref(), Some("São Bernardo - MA"));
    Ok(())
}

#[tokio::test]
async fn test_signup_for_unknown_plan_is_rejected() -> Result<()> {
    let recorder = RecordingSubmitter::default();
    let service = LeadService::new(recorder.clone(), SiteConfig::builtin()?);

    let request = SignupRequest {
        plan: "Master".to_string(),
        ..signup()
    };
    let err = service.submit_signup(request).await.unwrap_err();

    assert!(matches!(err, SiteError::UnknownPlanError { ref name } if name == "Master"));
    assert!(recorder.signups.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_blank_contact_fields_are_rejected_before_submission() -> Result<()> {
    let recorder = RecordingSubmitter::default();
    let service = LeadService::new(recorder.clone(), SiteConfig::builtin()?);

    let err = service
        .submit_contact(ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: "   ".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SiteError::FormValidationError { .. }));
    assert!(err.user_friendly_message().starts_with("Campos obrigatórios"));
    assert!(recorder.contacts.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_contact_is_trimmed_before_submission() -> Result<()> {
    let recorder = RecordingSubmitter::default();
    let service = LeadService::new(recorder.clone(), SiteConfig::builtin()?);

    let receipt = service
        .submit_contact(ContactRequest {
            name: "  Ana  ".to_string(),
            email: " ana@example.com ".to_string(),
            phone: Some("  ".to_string()),
            message: "Tem cobertura no Centro?".to_string(),
        })
        .await?;

    assert_eq!(receipt.kind, LeadKind::Contact);
    let contacts = recorder.contacts.lock().await;
    assert_eq!(contacts[0].name, "Ana");
    assert_eq!(contacts[0].email, "ana@example.com");
    assert_eq!(contacts[0].phone, None);
    Ok(())
}

#[tokio::test]
async fn test_simulated_submitter_waits_configured_delay() -> Result<()> {
    let settings = FormSettings {
        contact_delay_ms: 30,
        ..instant()
    };
    let submitter = SimulatedSubmitter::new(&settings);

    let started = std::time::Instant::now();
    let receipt = submitter
        .submit_contact(&ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: "Olá".to_string(),
        })
        .await?;

    assert!(started.elapsed() >= std::time::Duration::from_millis(30));
    assert!(receipt.received_at <= chrono::Utc::now());
    Ok(())
}

#[tokio::test]
async fn test_submitter_failure_reaches_the_caller() -> Result<()> {
    let service = LeadService::new(UnreachableSubmitter, SiteConfig::builtin()?);

    let err = service.submit_signup(signup()).await.unwrap_err();
    assert!(matches!(err, SiteError::SubmissionError { ref message } if message == "connection refused"));
    assert_eq!(err.severity().exit_code(), 2);
    assert_eq!(
        err.user_friendly_message(),
        "Não foi possível enviar sua solicitação. Tente novamente."
    );

    let err = service
        .submit_contact(ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: "Olá".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SiteError::SubmissionError { .. }));
    Ok(())
}
