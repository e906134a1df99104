use crate::core::comparison::build_comparison;
use crate::core::links::whatsapp_url;
use crate::domain::model::{
    AboutInfo, Activity, City, CompanyInfo, ComparisonFeature, EstimatorSettings, FaqEntry,
    FormSettings, Plan,
};
use crate::domain::ports::{CatalogProvider, CoverageProvider};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive, validate_range, validate_unique, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 內建的網站內容
const BUILTIN_SITE: &str = include_str!("../../config/site.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub company: CompanyInfo,
    #[serde(default)]
    pub calculator: EstimatorSettings,
    #[serde(default)]
    pub forms: FormSettings,
    pub plans: Vec<Plan>,
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub comparison: Vec<ComparisonFeature>,
    pub coverage: CoverageConfig,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub about: AboutInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageConfig {
    pub default_city: String,
    pub cities: Vec<City>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Site content shipped with the binary, already validated.
    pub fn builtin() -> Result<Self> {
        let config = Self::from_toml_str(BUILTIN_SITE)?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${WHATSAPP_NUMBER})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        // 未設定的變數保持原樣
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.validate_company()?;
        self.validate_calculator()?;

        // 方案目錄
        if self.plans.is_empty() {
            return Err(SiteError::EmptyCatalogError);
        }
        for plan in &self.plans {
            validate_non_empty_string("plans.name", &plan.name)?;
            validate_range("plans.speed_mbps", plan.speed_mbps, 1, u32::MAX)?;
        }
        validate_unique("plans.name", self.plans.iter().map(|p| p.name.as_str()))?;

        // 活動目錄
        for activity in &self.activities {
            validate_non_empty_string("activities.id", &activity.id)?;
            validate_positive(
                &format!("activities.{}.bandwidth_weight", activity.id),
                activity.bandwidth_weight,
            )?;
        }
        validate_unique("activities.id", self.activities.iter().map(|a| a.id.as_str()))?;

        build_comparison(&self.plans, &self.comparison)?;

        // 覆蓋範圍
        validate_unique(
            "coverage.cities.name",
            self.coverage.cities.iter().map(|c| c.name.as_str()),
        )?;
        if !self.coverage.cities.iter().any(|c| c.name == self.coverage.default_city) {
            return Err(SiteError::InvalidConfigValueError {
                field: "coverage.default_city".to_string(),
                value: self.coverage.default_city.clone(),
                reason: "Default city is not listed in coverage.cities".to_string(),
            });
        }

        for entry in &self.faq {
            validate_non_empty_string("faq.question", &entry.question)?;
        }

        // 關於我們
        for item in self.about.pillars.iter().chain(&self.about.benefits) {
            validate_non_empty_string("about.title", &item.title)?;
            validate_non_empty_string("about.description", &item.description)?;
        }
        for stat in &self.about.stats {
            validate_non_empty_string("about.stats.value", &stat.value)?;
            validate_non_empty_string("about.stats.label", &stat.label)?;
        }

        Ok(())
    }

    fn validate_company(&self) -> Result<()> {
        let company = &self.company;
        validate_non_empty_string("company.name", &company.name)?;
        validate_non_empty_string("company.email", &company.email)?;
        if company.phone.is_empty() || !company.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(SiteError::InvalidConfigValueError {
                field: "company.phone".to_string(),
                value: company.phone.clone(),
                reason: "Expected digits only".to_string(),
            });
        }
        whatsapp_url(company)?;
        if let Some(url) = &company.facebook {
            validate_url("company.facebook", url)?;
        }
        if let Some(url) = &company.instagram {
            validate_url("company.instagram", url)?;
        }
        Ok(())
    }

    fn validate_calculator(&self) -> Result<()> {
        let calculator = &self.calculator;
        if !calculator.per_device_mbps.is_finite() || calculator.per_device_mbps < 0.0 {
            return Err(SiteError::InvalidConfigValueError {
                field: "calculator.per_device_mbps".to_string(),
                value: calculator.per_device_mbps.to_string(),
                reason: "Value must be zero or positive".to_string(),
            });
        }
        validate_range("calculator.cap_mbps", calculator.cap_mbps, 1, u32::MAX)?;
        validate_range("calculator.min_devices", calculator.min_devices, 1, u32::MAX)?;
        validate_range(
            "calculator.max_devices",
            calculator.max_devices,
            calculator.min_devices,
            u32::MAX,
        )?;
        Ok(())
    }

    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.name == name)
    }
}

impl CatalogProvider for SiteConfig {
    fn plans(&self) -> &[Plan] {
        &self.plans
    }

    fn activities(&self) -> &[Activity] {
        &self.activities
    }

    fn estimator_settings(&self) -> &EstimatorSettings {
        &self.calculator
    }
}

impl CoverageProvider for SiteConfig {
    fn cities(&self) -> &[City] {
        &self.coverage.cities
    }

    fn default_city(&self) -> &str {
        &self.coverage.default_city
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
