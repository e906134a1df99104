use crate::domain::model::City;
use crate::domain::ports::CoverageProvider;
use crate::utils::error::{Result, SiteError};

/// City whose coverage is shown. Unknown or absent names fall back to the
/// default city, the same way a stale stored preference does on the site.
pub fn resolve_city<'a, P>(provider: &'a P, requested: Option<&str>) -> Result<&'a City>
where
    P: CoverageProvider + ?Sized,
{
    let cities = provider.cities();

    if let Some(name) = requested.map(str::trim).filter(|name| !name.is_empty()) {
        if let Some(city) = cities.iter().find(|city| city.name == name) {
            return Ok(city);
        }
        tracing::info!(
            "City '{}' is not served, using '{}'",
            name,
            provider.default_city()
        );
    }

    cities
        .iter()
        .find(|city| city.name == provider.default_city())
        .ok_or_else(|| SiteError::InvalidConfigValueError {
            field: "coverage.default_city".to_string(),
            value: provider.default_city().to_string(),
            reason: "Default city is not listed in coverage.cities".to_string(),
        })
}
