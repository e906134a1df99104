use crate::domain::model::{ComparisonFeature, ComparisonRow, ComparisonTable, Plan};
use crate::utils::error::{Result, SiteError};

/// Lays the configured features out as a table with one column per plan, in
/// catalog order.
pub fn build_comparison(plans: &[Plan], features: &[ComparisonFeature]) -> Result<ComparisonTable> {
    let columns: Vec<String> = plans.iter().map(|plan| plan.name.clone()).collect();
    let mut rows = Vec::with_capacity(features.len());

    for feature in features {
        if let Some(unknown) = feature
            .values
            .keys()
            .find(|name| !columns.iter().any(|column| column == *name))
        {
            return Err(SiteError::InvalidConfigValueError {
                field: format!("comparison.{}", feature.feature),
                value: unknown.clone(),
                reason: "Not a plan in the catalog".to_string(),
            });
        }

        let cells = columns
            .iter()
            .map(|column| {
                feature
                    .values
                    .get(column)
                    .cloned()
                    .ok_or_else(|| SiteError::MissingConfigError {
                        field: format!("comparison.{}.values.{}", feature.feature, column),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        rows.push(ComparisonRow {
            feature: feature.feature.clone(),
            cells,
        });
    }

    Ok(ComparisonTable { columns, rows })
}
