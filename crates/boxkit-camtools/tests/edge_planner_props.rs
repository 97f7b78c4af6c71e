//! Property tests for finger joint planning across a wide range of edges.

use boxkit_camtools::hinged_box::edge_planner::{end_clearance, plan_edge};
use boxkit_camtools::EdgeRole;
use proptest::prelude::*;

const TOL: f64 = 1e-6;

fn arb_edge() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    // (edge length, tab width, thickness, kerf)
    (1.0f64..600.0, 0.5f64..60.0, 0.5f64..12.0, 0.0f64..2.0)
}

proptest! {
    #[test]
    fn tab_count_is_even((len, tw, t, k) in arb_edge()) {
        let plan = plan_edge(len, EdgeRole::Male, tw, t, k);
        prop_assert_eq!(plan.males.len() % 2, 0);
        prop_assert!(plan.tab_count == 0 || plan.tab_count % 2 == 0);
    }

    #[test]
    fn pattern_is_symmetric_about_midpoint((len, tw, t, k) in arb_edge()) {
        let plan = plan_edge(len, EdgeRole::Female, tw, t, k);
        let centers: Vec<f64> = plan.females.iter().map(|f| f.center).collect();
        for c in &centers {
            let mirrored = len - c;
            prop_assert!(
                centers.iter().any(|m| (m - mirrored).abs() < TOL),
                "no mirror for {} on edge {}", c, len
            );
        }
    }

    #[test]
    fn tabs_keep_clear_of_edge_ends((len, tw, t, k) in arb_edge()) {
        let plan = plan_edge(len, EdgeRole::Male, tw, t, k);
        let clearance = end_clearance(t, k);
        for tab in &plan.males {
            prop_assert!(tab.center + TOL >= clearance);
            prop_assert!(len - tab.center + TOL >= clearance);
        }
    }

    #[test]
    fn male_and_female_plans_share_centers((len, tw, t, k) in arb_edge()) {
        let male = plan_edge(len, EdgeRole::Male, tw, t, k);
        let female = plan_edge(len, EdgeRole::Female, tw, t, k);
        prop_assert_eq!(male.males.len(), female.females.len());
        for (m, f) in male.males.iter().zip(female.females.iter()) {
            prop_assert!((m.center - f.center).abs() < TOL);
        }
    }

    #[test]
    fn clearance_direction_is_correct(
        (len, tw, t) in (1.0f64..600.0, 0.5f64..60.0, 0.5f64..12.0),
        k in 0.001f64..2.0,
    ) {
        let male = plan_edge(len, EdgeRole::Male, tw, t, k);
        let female = plan_edge(len, EdgeRole::Female, tw, t, k);
        for (m, f) in male.males.iter().zip(female.females.iter()) {
            prop_assert!(m.width < male.feature_width);
            prop_assert!(male.feature_width < f.width);
            prop_assert!(f.depth > t);
        }
    }

    #[test]
    fn neighbouring_tabs_are_two_pitches_apart((len, tw, t, k) in arb_edge()) {
        let plan = plan_edge(len, EdgeRole::Male, tw, t, k);
        for pair in plan.males.windows(2) {
            prop_assert!((pair[1].center - pair[0].center - 2.0 * plan.pitch).abs() < TOL);
        }
    }
}
