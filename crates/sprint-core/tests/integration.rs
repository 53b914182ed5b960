//! Integration tests over the public API: plan-wide properties that hold for
//! every topic and day count, plus the reference ten-day scenario.

use approx::assert_relative_eq;
use proptest::prelude::*;
use sprint_core::{
    EnergyLevel, GeneratedPlan, JOURNAL_PROMPT, MAX_DAYS, PLACEHOLDER_TOPIC, PhaseKey, catalog,
    distribute_phases, export_json, generate_plan, render_markdown, render_text,
};

fn phase_keys(plan: &GeneratedPlan) -> Vec<PhaseKey> {
    plan.phases.iter().map(|p| p.key).collect()
}

/// The reference scenario: Rust over ten days.
#[test]
fn rust_ten_day_scenario() {
    let plan = generate_plan("Rust", 10);

    assert_eq!(plan.topic, "Rust");
    assert_eq!(plan.total_days, 10);
    assert_eq!(
        phase_keys(&plan),
        vec![PhaseKey::Discover, PhaseKey::Practice, PhaseKey::Build, PhaseKey::Polish]
    );
    let lengths: Vec<u32> = plan.phases.iter().map(|p| p.days()).collect();
    assert_eq!(lengths, vec![3, 4, 2, 1]);

    let polish = plan.phase(PhaseKey::Polish).unwrap();
    assert_eq!((polish.start_day, polish.end_day), (10, 10));
    assert_relative_eq!(polish.ratio, 0.15);

    assert_eq!(plan.cadence.total(), 10);
    assert_eq!(plan.days[0].energy, EnergyLevel::Deep);
    assert_eq!(
        plan.days[0].activities.first().map(String::as_str),
        Some("Skim a respected primer or course overview for Rust and highlight the 5 headline themes.")
    );
}

/// Ratios carried on summaries are the catalog's nominal ratios.
#[test]
fn summary_ratios_match_catalog() {
    let plan = generate_plan("Go", 100);
    for (summary, def) in plan.phases.iter().zip(catalog()) {
        assert_eq!(summary.key, def.key);
        assert_relative_eq!(summary.ratio, def.ratio);
        assert_relative_eq!(f64::from(summary.days()) / 100.0, def.ratio, epsilon = 1e-9);
    }
}

#[test]
fn blank_topic_uses_placeholder_everywhere() {
    let plan = generate_plan(" \t ", 10);
    assert_eq!(plan.topic, PLACEHOLDER_TOPIC);
    let milestones: Vec<&str> = plan.phases.iter().map(|p| p.milestone.as_str()).collect();
    assert!(milestones.iter().all(|m| m.contains(PLACEHOLDER_TOPIC)));
    assert!(plan.days.iter().all(|d| !d.focus.contains("{topic}")));
}

#[test]
fn no_marker_survives_substitution() {
    let plan = generate_plan("Haskell", 60);
    let json = export_json(&plan).unwrap();
    assert!(!json.contains("{topic}"));
    assert!(!render_text(&plan).contains("{topic}"));
    assert!(!render_markdown(&plan).contains("{topic}"));
}

#[test]
fn maximum_plan() {
    let plan = generate_plan("Japanese", i64::from(MAX_DAYS));
    let lengths: Vec<u32> = plan.phases.iter().map(|p| p.days()).collect();
    assert_eq!(lengths, vec![91, 128, 91, 55]);
    assert_eq!(plan.days.last().map(|d| d.day), Some(365));
}

#[test]
fn clamping_is_equivalent() {
    assert_eq!(generate_plan("x", 1000), generate_plan("x", 365));
    assert_eq!(generate_plan("x", 0), generate_plan("x", 1));
    assert_eq!(generate_plan("x", i64::MIN), generate_plan("x", 1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn allocation_conserves_days(days in 1u32..=365) {
        let total: u32 = distribute_phases(days).iter().map(|a| a.days).sum();
        prop_assert_eq!(total, days);
    }

    #[test]
    fn allocation_stays_within_one_of_ideal(days in 1u32..=365) {
        for alloc in distribute_phases(days) {
            let ideal = alloc.definition().ratio * f64::from(days);
            prop_assert!((f64::from(alloc.days) - ideal).abs() <= 1.0,
                "days={} phase={} got {} ideal {}", days, alloc.definition().key, alloc.days, ideal);
        }
    }

    #[test]
    fn days_are_contiguous_and_phases_ordered(days in 1i64..=365, topic in "[a-zA-Z ]{0,20}") {
        let plan = generate_plan(&topic, days);
        let numbers: Vec<u32> = plan.days.iter().map(|d| d.day).collect();
        let expected: Vec<u32> = (1..=days as u32).collect();
        prop_assert_eq!(numbers, expected);

        let keys = phase_keys(&plan);
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);

        let mut next = 1;
        for phase in &plan.phases {
            prop_assert_eq!(phase.start_day, next);
            next = phase.end_day + 1;
        }
        prop_assert_eq!(next, days as u32 + 1);
    }

    #[test]
    fn one_milestone_per_phase_on_its_last_day(days in 1i64..=365) {
        let plan = generate_plan("topic", days);
        for phase in &plan.phases {
            let marked: Vec<u32> = plan
                .days_in(phase.key)
                .filter(|d| d.milestone.as_deref().is_some_and(|m| !m.is_empty()))
                .map(|d| d.day)
                .collect();
            prop_assert_eq!(marked, vec![phase.end_day]);
        }
    }

    #[test]
    fn energy_repeats_every_four_days(days in 5i64..=365) {
        let plan = generate_plan("topic", days);
        for pair in plan.days.windows(5) {
            prop_assert_eq!(pair[0].energy, pair[4].energy);
        }
        let first: Vec<EnergyLevel> = plan.days.iter().take(4).map(|d| d.energy).collect();
        prop_assert_eq!(first, vec![EnergyLevel::Deep, EnergyLevel::Medium, EnergyLevel::Medium, EnergyLevel::Light]);
    }

    #[test]
    fn cadence_tally_matches_days(days in 1i64..=365) {
        let plan = generate_plan("topic", days);
        prop_assert_eq!(plan.cadence.total(), plan.total_days);
        for level in EnergyLevel::ALL {
            let counted = plan.days.iter().filter(|d| d.energy == level).count() as u32;
            prop_assert_eq!(plan.cadence.count(level), counted);
        }
    }

    #[test]
    fn every_day_has_two_to_four_activities(days in 1i64..=365) {
        let plan = generate_plan("topic", days);
        for day in &plan.days {
            prop_assert!((2..=4).contains(&day.activities.len()));
            prop_assert_eq!(day.activities.last().map(String::as_str), Some(JOURNAL_PROMPT));
        }
    }

    #[test]
    fn generation_is_deterministic(days in -10i64..=400, topic in ".{0,30}") {
        let a = generate_plan(&topic, days);
        let b = generate_plan(&topic, days);
        prop_assert_eq!(export_json(&a).unwrap(), export_json(&b).unwrap());
        prop_assert_eq!(a, b);
    }
}
