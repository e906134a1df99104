use crate::core::estimator::estimate_required_speed;
use crate::core::recommender::recommend_plan;
use crate::domain::model::{EstimatorSettings, Plan};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{Result, SiteError};
use serde::Serialize;
use std::collections::BTreeSet;

/// What the visitor has ticked on the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    activity_ids: BTreeSet<String>,
    device_count: u32,
}

impl Selection {
    /// Nothing selected, minimum number of devices.
    pub fn new(settings: &EstimatorSettings) -> Self {
        Self {
            activity_ids: BTreeSet::new(),
            device_count: settings.min_devices,
        }
    }

    pub fn activity_ids(&self) -> &BTreeSet<String> {
        &self.activity_ids
    }

    pub fn device_count(&self) -> u32 {
        self.device_count
    }

    /// Flips an activity and returns whether it is now selected.
    pub fn toggle(&mut self, activity_id: &str) -> bool {
        if self.activity_ids.remove(activity_id) {
            false
        } else {
            self.activity_ids.insert(activity_id.to_string());
            true
        }
    }

    pub fn select(&mut self, activity_id: &str) {
        self.activity_ids.insert(activity_id.to_string());
    }

    /// Stores `count` clamped into the configured device range and returns
    /// the stored value.
    pub fn set_device_count(&mut self, count: i64, settings: &EstimatorSettings) -> u32 {
        let clamped = count.clamp(i64::from(settings.min_devices), i64::from(settings.max_devices));
        if clamped != count {
            tracing::debug!(
                "Device count {} clamped to {} (range {}..={})",
                count,
                clamped,
                settings.min_devices,
                settings.max_devices
            );
        }
        // clamped lies within two u32 bounds
        self.device_count = u32::try_from(clamped).unwrap_or(settings.min_devices);
        self.device_count
    }
}

/// Result shown next to the calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculatorOutcome<'a> {
    /// Nothing selected: the page asks the visitor to pick activities.
    Placeholder,
    Recommended { required_mbps: u32, plan: &'a Plan },
}

impl CalculatorOutcome<'_> {
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            CalculatorOutcome::Placeholder => None,
            CalculatorOutcome::Recommended { plan, .. } => Some(*plan),
        }
    }

    pub fn required_mbps(&self) -> u32 {
        match self {
            CalculatorOutcome::Placeholder => 0,
            CalculatorOutcome::Recommended { required_mbps, .. } => *required_mbps,
        }
    }
}

/// The plans-page speed calculator: a selection plus the catalogs it is
/// evaluated against. Every query re-derives its answer from the current
/// selection.
pub struct SpeedCalculator<'a, C: CatalogProvider + ?Sized> {
    catalog: &'a C,
    selection: Selection,
}

impl<'a, C: CatalogProvider + ?Sized> SpeedCalculator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        let selection = Selection::new(catalog.estimator_settings());
        Self { catalog, selection }
    }

    /// Builds a calculator from already known inputs, e.g. CLI flags.
    pub fn with_selection<I, S>(catalog: &'a C, activity_ids: I, device_count: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut calculator = Self::new(catalog);
        for id in activity_ids {
            let id = id.as_ref();
            if !catalog.activities().iter().any(|a| a.id == id) {
                tracing::warn!("Unknown activity '{}' ignored", id);
            }
            calculator.selection.select(id);
        }
        calculator.set_device_count(device_count);
        calculator
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toggle_activity(&mut self, activity_id: &str) -> bool {
        self.selection.toggle(activity_id)
    }

    pub fn set_device_count(&mut self, count: i64) -> u32 {
        self.selection
            .set_device_count(count, self.catalog.estimator_settings())
    }

    pub fn required_speed(&self) -> u32 {
        estimate_required_speed(
            self.selection.activity_ids(),
            self.selection.device_count(),
            self.catalog.activities(),
            self.catalog.estimator_settings(),
        )
    }

    /// A required speed of `0` means no recommendation, not the cheapest plan.
    pub fn outcome(&self) -> Result<CalculatorOutcome<'a>> {
        let required_mbps = self.required_speed();
        if required_mbps == 0 {
            return Ok(CalculatorOutcome::Placeholder);
        }

        let catalog: &'a C = self.catalog;
        let plan = recommend_plan(required_mbps, catalog.plans()).ok_or(SiteError::EmptyCatalogError)?;

        tracing::debug!(
            "Selection {:?} x{} devices needs {} Mbps, recommending '{}'",
            self.selection.activity_ids(),
            self.selection.device_count(),
            required_mbps,
            plan.name
        );

        Ok(CalculatorOutcome::Recommended { required_mbps, plan })
    }
}
