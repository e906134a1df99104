use mundialnet_site::core::CatalogProvider;
use mundialnet_site::{
    estimate_required_speed, recommend_plan, CalculatorOutcome, SiteConfig, SpeedCalculator,
};
use std::collections::BTreeSet;

fn outcome_for(config: &SiteConfig, activities: &[&str], devices: i64) -> (u32, Option<String>) {
    let calculator = SpeedCalculator::with_selection(config, activities, devices);
    let outcome = calculator.outcome().unwrap();
    (
        outcome.required_mbps(),
        outcome.plan().map(|plan| plan.name.clone()),
    )
}

#[test]
fn test_browsing_alone_gets_student_plan() {
    let config = SiteConfig::builtin().unwrap();
    let (required, plan) = outcome_for(&config, &["internet"], 1);
    assert_eq!(required, 100);
    assert_eq!(plan.as_deref(), Some("Universitário"));
}

#[test]
fn test_every_activity_one_device_gets_basic_plan() {
    let config = SiteConfig::builtin().unwrap();
    let (required, plan) = outcome_for(&config, &["internet", "streaming", "homeoffice", "gaming"], 1);
    assert_eq!(required, 700);
    assert_eq!(plan.as_deref(), Some("Básico"));
}

#[test]
fn test_gaming_on_twenty_devices() {
    let config = SiteConfig::builtin().unwrap();
    let (required, plan) = outcome_for(&config, &["gaming"], 20);
    assert_eq!(required, 725);
    assert_eq!(plan.as_deref(), Some("Básico"));
}

#[test]
fn test_everything_on_twenty_devices_is_capped() {
    let config = SiteConfig::builtin().unwrap();
    let (required, plan) = outcome_for(&config, &["internet", "streaming", "homeoffice", "gaming"], 20);
    assert_eq!(required, 1000);
    assert_eq!(plan.as_deref(), Some("Casa Conectada"));
}

#[test]
fn test_nothing_selected_shows_placeholder() {
    let config = SiteConfig::builtin().unwrap();
    for devices in 1..=20 {
        let calculator = SpeedCalculator::with_selection(&config, Vec::<&str>::new(), devices);
        assert_eq!(calculator.outcome().unwrap(), CalculatorOutcome::Placeholder);
    }
}

#[test]
fn test_out_of_range_devices_are_clamped_before_estimating() {
    let config = SiteConfig::builtin().unwrap();
    assert_eq!(outcome_for(&config, &["gaming"], 500), outcome_for(&config, &["gaming"], 20));
    assert_eq!(outcome_for(&config, &["gaming"], 0), outcome_for(&config, &["gaming"], 1));
}

#[test]
fn test_recommendation_never_leaves_catalog() {
    let config = SiteConfig::builtin().unwrap();
    let plans = config.plans();
    let fastest = plans.iter().map(|plan| plan.speed_mbps).max().unwrap();

    for required in [1, 499, 500, 750, 999, 1000, 1001, 50_000] {
        let plan = recommend_plan(required, plans).unwrap();
        assert!(plans.iter().any(|p| p.name == plan.name));
        if required > fastest {
            assert_eq!(plan.speed_mbps, fastest);
        } else {
            assert!(plan.speed_mbps >= required);
        }
    }
}

#[test]
fn test_estimate_uses_configured_constants() {
    let config = SiteConfig::from_toml_str(
        &include_str!("../config/site.toml")
            .replace("per_device_mbps = 25", "per_device_mbps = 50")
            .replace("cap_mbps = 1000", "cap_mbps = 800"),
    )
    .unwrap();

    let selected: BTreeSet<String> = ["internet".to_string()].into_iter().collect();
    let settings = config.estimator_settings();
    assert_eq!(estimate_required_speed(&selected, 3, config.activities(), settings), 200);
    assert_eq!(estimate_required_speed(&selected, 20, config.activities(), settings), 800);
}
