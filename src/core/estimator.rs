use crate::domain::model::{Activity, EstimatorSettings};
use std::collections::BTreeSet;

/// Bandwidth, in Mbps, that a visitor's selection implies.
///
/// An empty selection always yields `0`, which callers read as "nothing
/// selected yet". Otherwise the weights of the selected activities are summed
/// (ids missing from `activities` are ignored), every device after the first
/// adds `settings.per_device_mbps`, and the total is capped at
/// `settings.cap_mbps` and rounded.
///
/// `device_count` must already be inside the configured device range; see
/// [`Selection::set_device_count`](crate::core::calculator::Selection::set_device_count).
pub fn estimate_required_speed(
    selected: &BTreeSet<String>,
    device_count: u32,
    activities: &[Activity],
    settings: &EstimatorSettings,
) -> u32 {
    if selected.is_empty() {
        return 0;
    }

    let activity_total: f64 = activities
        .iter()
        .filter(|activity| selected.contains(activity.id.as_str()))
        .map(|activity| activity.bandwidth_weight)
        .sum();

    let device_increment = f64::from(device_count.saturating_sub(1)) * settings.per_device_mbps;

    let total = (activity_total + device_increment).min(f64::from(settings.cap_mbps));

    total.max(0.0).round() as u32
}
