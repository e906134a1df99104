use crate::domain::model::Plan;

/// Slowest plan whose speed covers `required_mbps`, or the fastest plan when
/// none does. Storage order of `plans` does not matter; plans with the same
/// speed keep their catalog order.
///
/// Returns `None` only for an empty catalog.
pub fn recommend_plan(required_mbps: u32, plans: &[Plan]) -> Option<&Plan> {
    let mut ascending: Vec<&Plan> = plans.iter().collect();
    ascending.sort_by_key(|plan| plan.speed_mbps);

    ascending
        .iter()
        .copied()
        .find(|plan| plan.speed_mbps >= required_mbps)
        .or_else(|| ascending.last().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Price;

    fn plan(name: &str, speed_mbps: u32) -> Plan {
        Plan {
            name: name.to_string(),
            speed_mbps,
            price: Price::from_centavos(10000),
            features: vec![],
            highlighted: false,
        }
    }

    fn catalog() -> Vec<Plan> {
        vec![
            plan("Universitário", 500),
            plan("Básico", 750),
            plan("Família", 900),
            plan("Casa Conectada", 1000),
        ]
    }

    #[test]
    fn test_picks_first_plan_meeting_requirement() {
        let plans = catalog();
        assert_eq!(recommend_plan(100, &plans).unwrap().name, "Universitário");
        assert_eq!(recommend_plan(500, &plans).unwrap().name, "Universitário");
        assert_eq!(recommend_plan(501, &plans).unwrap().name, "Básico");
        assert_eq!(recommend_plan(725, &plans).unwrap().name, "Básico");
        assert_eq!(recommend_plan(1000, &plans).unwrap().name, "Casa Conectada");
    }

    #[test]
    fn test_falls_back_to_fastest_plan() {
        let plans = catalog();
        assert_eq!(recommend_plan(5000, &plans).unwrap().speed_mbps, 1000);
    }

    #[test]
    fn test_ignores_storage_order() {
        let mut plans = catalog();
        plans.reverse();
        assert_eq!(recommend_plan(600, &plans).unwrap().name, "Básico");
        assert_eq!(recommend_plan(2000, &plans).unwrap().name, "Casa Conectada");
    }

    #[test]
    fn test_equal_speeds_keep_catalog_order() {
        let plans = vec![plan("Primeiro", 600), plan("Segundo", 600), plan("Lento", 100)];
        assert_eq!(recommend_plan(300, &plans).unwrap().name, "Primeiro");
        // fallback takes the last of the ascending order
        assert_eq!(recommend_plan(900, &plans).unwrap().name, "Segundo");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(recommend_plan(100, &[]).is_none());
    }

    #[test]
    fn test_monotonic_in_required_speed() {
        let plans = catalog();
        let mut previous = 0;
        for required in (0..=1200).step_by(5) {
            let chosen = recommend_plan(required, &plans).unwrap();
            assert!(chosen.speed_mbps >= previous);
            assert!(plans.contains(chosen));
            previous = chosen.speed_mbps;
        }
    }
}
