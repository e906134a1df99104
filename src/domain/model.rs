use crate::utils::error::SiteError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PER_DEVICE_MBPS: f64 = 25.0;
pub const DEFAULT_CAP_MBPS: u32 = 1000;
pub const DEFAULT_MIN_DEVICES: u32 = 1;
pub const DEFAULT_MAX_DEVICES: u32 = 20;

/// Monthly price in centavos. Written the Brazilian way, `110,00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    centavos: u64,
}

impl Price {
    pub fn from_centavos(centavos: u64) -> Self {
        Self { centavos }
    }

    pub fn centavos(&self) -> u64 {
        self.centavos
    }
}

impl FromStr for Price {
    type Err = SiteError;

    /// Accepts `110,00`, `1.234,56`, `129.90` and `200`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SiteError::InvalidConfigValueError {
            field: "price".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim().trim_start_matches("R$").trim();
        let (whole, fraction) = if trimmed.contains(',') {
            let (whole, fraction) = trimmed.split_once(',').unwrap_or((trimmed, ""));
            (whole.replace('.', ""), fraction.to_string())
        } else if let Some((whole, fraction)) = trimmed.split_once('.') {
            (whole.to_string(), fraction.to_string())
        } else {
            (trimmed.to_string(), String::new())
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("Expected an amount such as 110,00"));
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("At most two decimal places are allowed"));
        }

        let reais: u64 = whole.parse().map_err(|_| invalid("Amount is too large"))?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid("Bad decimals"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("Bad decimals"))?,
        };

        reais
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(Price::from_centavos)
            .ok_or_else(|| invalid("Amount is too large"))
    }
}

impl TryFrom<String> for Price {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reais = (self.centavos / 100).to_string();
        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, ch) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "{},{:02}", grouped, self.centavos % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub speed_mbps: u32,
    pub price: Price,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub label: String,
    /// Mbps this activity needs, whatever the number of devices.
    pub bandwidth_weight: f64,
}

/// Constants of the speed calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    #[serde(default = "default_per_device_mbps")]
    pub per_device_mbps: f64,
    #[serde(default = "default_cap_mbps")]
    pub cap_mbps: u32,
    #[serde(default = "default_min_devices")]
    pub min_devices: u32,
    #[serde(default = "default_max_devices")]
    pub max_devices: u32,
}

fn default_per_device_mbps() -> f64 {
    DEFAULT_PER_DEVICE_MBPS
}

fn default_cap_mbps() -> u32 {
    DEFAULT_CAP_MBPS
}

fn default_min_devices() -> u32 {
    DEFAULT_MIN_DEVICES
}

fn default_max_devices() -> u32 {
    DEFAULT_MAX_DEVICES
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            per_device_mbps: DEFAULT_PER_DEVICE_MBPS,
            cap_mbps: DEFAULT_CAP_MBPS,
            min_devices: DEFAULT_MIN_DEVICES,
            max_devices: DEFAULT_MAX_DEVICES,
        }
    }
}

/// One cell of the comparison table: a check mark or a short text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonCell {
    Included(bool),
    Text(String),
}

impl fmt::Display for ComparisonCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonCell::Included(true) => write!(f, "✓"),
            ComparisonCell::Included(false) => write!(f, "✗"),
            ComparisonCell::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A configured comparison row: one cell per plan name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonFeature {
    pub feature: String,
    pub values: BTreeMap<String, ComparisonCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub feature: String,
    pub cells: Vec<ComparisonCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    /// Plan names, in catalog order.
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub neighborhoods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    /// Digits only, as dialed locally.
    pub phone: String,
    pub phone_display: String,
    /// Digits only, with country code.
    pub whatsapp: String,
    pub whatsapp_message: String,
    pub email: String,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// Timing and messages of the simulated lead submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default = "default_contact_delay_ms")]
    pub contact_delay_ms: u64,
    #[serde(default = "default_signup_delay_ms")]
    pub signup_delay_ms: u64,
    #[serde(default = "default_signup_redirect")]
    pub signup_redirect: String,
}

fn default_contact_delay_ms() -> u64 {
    1500
}

fn default_signup_delay_ms() -> u64 {
    2000
}

fn default_signup_redirect() -> String {
    "/planos".to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            contact_delay_ms: default_contact_delay_ms(),
            signup_delay_ms: default_signup_delay_ms(),
            signup_redirect: default_signup_redirect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Institutional copy: the "Sobre" page plus the home page benefit cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub history: Vec<String>,
    /// Missão, Visão, Valores
    #[serde(default)]
    pub pillars: Vec<Highlight>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub benefits: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Empty means "the plan the site features".
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub city: Option<String>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadKind {
    Contact,
    Signup,
}

impl LeadKind {
    pub fn reference_prefix(&self) -> &'static str {
        match self {
            LeadKind::Contact => "CT",
            LeadKind::Signup => "AS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub kind: LeadKind,
    pub reference: String,
    pub received_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    /// Page the visitor is sent back to, if any.
    pub redirect: Option<String>,
}
