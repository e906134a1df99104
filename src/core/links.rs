use crate::domain::model::CompanyInfo;
use crate::utils::error::{Result, SiteError};
use serde::Serialize;
use url::Url;

/// Every "talk to us" link the site renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    pub whatsapp: String,
    pub phone: String,
    pub phone_display: String,
    pub email: String,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

impl ContactLinks {
    pub fn from_company(company: &CompanyInfo) -> Result<Self> {
        Ok(Self {
            whatsapp: whatsapp_url(company)?.to_string(),
            phone: format!("tel:{}", company.phone),
            phone_display: company.phone_display.clone(),
            email: format!("mailto:{}", company.email),
            facebook: company.facebook.clone(),
            instagram: company.instagram.clone(),
        })
    }
}

/// `https://wa.me/<number>?text=<greeting>` for the floating WhatsApp button.
pub fn whatsapp_url(company: &CompanyInfo) -> Result<Url> {
    if company.whatsapp.is_empty() || !company.whatsapp.chars().all(|c| c.is_ascii_digit()) {
        return Err(SiteError::InvalidConfigValueError {
            field: "company.whatsapp".to_string(),
            value: company.whatsapp.clone(),
            reason: "Expected digits only, country code included".to_string(),
        });
    }

    let base = format!("https://wa.me/{}", company.whatsapp);
    Url::parse_with_params(&base, &[("text", company.whatsapp_message.as_str())]).map_err(|e| {
        SiteError::InvalidConfigValueError {
            field: "company.whatsapp".to_string(),
            value: base.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CompanyInfo {
        CompanyInfo {
            name: "MundialNet".to_string(),
            phone: "9821073531".to_string(),
            phone_display: "(98) 2107-3531".to_string(),
            whatsapp: "55989821073531".to_string(),
            whatsapp_message: "Olá! Gostaria de saber mais sobre os planos da MundialNet."
                .to_string(),
            email: "contato@mundialnetfibra.com.br".to_string(),
            facebook: None,
            instagram: Some("https://www.instagram.com/mundialnetfibra/".to_string()),
        }
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = whatsapp_url(&company()).unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/55989821073531");

        let (key, text) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(text, "Olá! Gostaria de saber mais sobre os planos da MundialNet.");
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_whatsapp_number_must_be_digits() {
        let mut company = company();
        company.whatsapp = "+55 98 2107-3531".to_string();
        assert!(whatsapp_url(&company).is_err());
    }

    #[test]
    fn test_contact_links() {
        let links = ContactLinks::from_company(&company()).unwrap();
        assert_eq!(links.phone, "tel:9821073531");
        assert_eq!(links.email, "mailto:contato@mundialnetfibra.com.br");
        assert!(links.facebook.is_none());
    }
}
