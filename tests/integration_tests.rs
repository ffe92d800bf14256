// Integration tests for Duel Draw

use std::collections::HashSet;

use duel_draw::core::{group_fronts, same_group, Matcher};
use duel_draw::models::{Competitor, DrawResult, PairingConfig, PairingMode};

fn matcher(mode: PairingMode, max_weight_diff_lb: f64) -> Matcher {
    Matcher::new(PairingConfig {
        mode,
        max_weight_diff_lb,
        ..PairingConfig::default()
    })
    .expect("valid pairing config")
}

/// Deterministic roster: mostly complete fronts, a few singletons, weights 3.5-5.5 lb
fn create_roster(front_count: usize, seed: u64) -> Vec<Competitor> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let groups = ["Los Pinos", "El Roble", "San Juan", "La Vega", "Tres Rios"];
    let mut roster = Vec::new();

    for front in 0..front_count {
        let group = groups[front % groups.len()];
        let size = if front % 7 == 6 { 1 } else { 2 };
        for member in 0..size {
            let weight = 3.5 + (next() * 2000.0).round() / 1000.0;
            roster.push(Competitor::new(
                format!("{}-{}", front, member),
                group,
                format!("Front {}", front),
                weight,
            ));
        }
    }

    roster
}

fn assert_partition(roster: &[Competitor], result: &DrawResult) {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in result
        .matched_ids()
        .into_iter()
        .chain(result.leftovers.iter().map(|c| c.id.as_str()))
        .chain(result.excluded_fronts.iter().map(|c| c.id.as_str()))
    {
        assert!(seen.insert(id), "Competitor {} placed twice", id);
    }

    let expected: HashSet<&str> = roster.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(seen, expected, "Output is not a partition of the roster");
}

fn assert_pairs_respect_constraints(result: &DrawResult, max_weight_diff_lb: f64) {
    for pair in &result.pairs {
        assert!(
            !same_group(&pair.competitor_a, &pair.competitor_b),
            "Same-group duel: {} vs {}",
            pair.competitor_a.id,
            pair.competitor_b.id
        );
        if max_weight_diff_lb > 0.0 {
            let gap = (pair.competitor_a.weight_lb - pair.competitor_b.weight_lb).abs();
            assert!(gap <= max_weight_diff_lb + 1e-9, "Weight gap {} over cap", gap);
        }
    }
}

fn assert_front_fairness(roster: &[Competitor], result: &DrawResult) {
    let matched: HashSet<&str> = result.matched_ids().into_iter().collect();
    for front in group_fronts(roster).complete {
        let count = front
            .members
            .iter()
            .filter(|m| matched.contains(m.id.as_str()))
            .count();
        assert!(count != 1, "Front {} is half-matched", front.key);
    }
}

#[test]
fn test_scenario_close_weights_different_groups() {
    let roster = vec![
        Competitor::new("1", "North", "", 4.50),
        Competitor::new("2", "South", "", 4.51),
    ];

    let result = matcher(PairingMode::Simple, 0.02).draw(&roster);

    assert_eq!(result.pairs.len(), 1);
    assert_eq!(result.pairs[0].difference_grams, 5);
}

#[test]
fn test_scenario_same_group_never_pairs() {
    let roster = vec![
        Competitor::new("1", "North", "", 4.50),
        Competitor::new("2", " north ", "", 4.50),
    ];

    let result = matcher(PairingMode::Simple, 0.0).draw(&roster);

    assert!(result.pairs.is_empty());
    assert_eq!(result.leftovers.len(), 2);
    assert!(result.excluded_fronts.is_empty());
}

#[test]
fn test_scenario_two_complete_fronts() {
    let roster = vec![
        Competitor::new("x1", "X", "Red", 4.00),
        Competitor::new("x2", "X", "Red", 4.50),
        Competitor::new("y1", "Y", "Blue", 4.01),
        Competitor::new("y2", "Y", "Blue", 4.49),
    ];

    for mode in [PairingMode::FrontAware, PairingMode::Convergence] {
        let result = matcher(mode, 0.02).draw(&roster);

        assert_eq!(result.pairs.len(), 2, "mode {}", mode);
        assert!(result.excluded_fronts.is_empty(), "mode {}", mode);
        assert!(result.leftovers.is_empty(), "mode {}", mode);
    }
}

#[test]
fn test_scenario_front_of_three_excluded() {
    let roster = vec![
        Competitor::new("1", "X", "Red", 4.00),
        Competitor::new("2", "X", "Red", 4.00),
        Competitor::new("3", "X", "Red", 4.00),
        Competitor::new("4", "Y", "Blue", 4.00),
        Competitor::new("5", "Y", "Blue", 4.00),
    ];

    for mode in [PairingMode::FrontAware, PairingMode::Convergence] {
        let result = matcher(mode, 0.0).draw(&roster);
        let excluded: Vec<&str> = result.excluded_fronts.iter().map(|c| c.id.as_str()).collect();

        assert!(result.pairs.is_empty(), "mode {}", mode);
        assert!(excluded.starts_with(&["1", "2", "3"]), "mode {}", mode);
    }
}

#[test]
fn test_scenario_half_matchable_fronts() {
    // a1-b1 fits, a2-b2 does not, and the crossed assignment fits neither
    let roster = vec![
        Competitor::new("a1", "X", "A", 4.0),
        Competitor::new("a2", "X", "A", 5.0),
        Competitor::new("b1", "Y", "B", 4.0),
        Competitor::new("b2", "Y", "B", 6.0),
    ];

    let front_aware = matcher(PairingMode::FrontAware, 0.5).draw(&roster);
    assert!(front_aware.pairs.is_empty());
    assert_eq!(front_aware.excluded_fronts.len(), 4);

    let convergence = matcher(PairingMode::Convergence, 0.5).draw(&roster);
    assert!(convergence.pairs.is_empty());
    assert_eq!(convergence.excluded_fronts.len(), 4);
    assert!(convergence.leftovers.is_empty());
}

#[test]
fn test_scenario_convergence_excludes_only_half_matched() {
    let roster = vec![
        Competitor::new("a1", "X", "A", 4.0),
        Competitor::new("a2", "X", "A", 4.5),
        Competitor::new("b1", "Y", "B", 4.0),
        Competitor::new("b2", "Y", "B", 6.0),
        Competitor::new("c1", "Z", "C", 4.55),
        Competitor::new("c2", "Z", "C", 9.0),
        Competitor::new("d1", "W", "D", 3.9),
        Competitor::new("d2", "W", "D", 4.65),
    ];

    let result = matcher(PairingMode::Convergence, 0.2).draw(&roster);

    let excluded: Vec<&str> = result.excluded_fronts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(excluded, vec!["b1", "b2", "c1", "c2"]);
    assert_eq!(result.pairs.len(), 2);
    assert_partition(&roster, &result);
    assert_front_fairness(&roster, &result);
}

#[test]
fn test_scenario_odd_roster_one_leftover() {
    let roster: Vec<Competitor> = (0..7)
        .map(|i| Competitor::new(i.to_string(), format!("Group {}", i), "", 4.0 + i as f64 * 0.001))
        .collect();

    let result = matcher(PairingMode::Simple, 0.02).draw(&roster);

    assert_eq!(result.pairs.len(), 3);
    assert_eq!(result.leftovers.len(), 1);
    assert_eq!(result.summary().total_possible_pairs, 3);
}

#[test]
fn test_invariants_hold_across_modes_and_rosters() {
    for seed in 1..=12u64 {
        let roster = create_roster(14, seed);

        for mode in [PairingMode::FrontAware, PairingMode::Convergence, PairingMode::Simple] {
            for tolerance in [0.0, 0.02, 0.25] {
                let result = matcher(mode, tolerance).draw(&roster);

                assert_partition(&roster, &result);
                assert_pairs_respect_constraints(&result, tolerance);
                if mode != PairingMode::Simple {
                    assert_front_fairness(&roster, &result);
                }
            }
        }
    }
}

#[test]
fn test_draw_is_deterministic() {
    let roster = create_roster(20, 42);

    for mode in [PairingMode::FrontAware, PairingMode::Convergence, PairingMode::Simple] {
        let first = matcher(mode, 0.25).draw(&roster);
        let second = matcher(mode, 0.25).draw(&roster);
        assert_eq!(first, second, "mode {} is not deterministic", mode);
    }
}

#[test]
fn test_redraw_of_remainder_stays_group_safe() {
    let roster = create_roster(20, 7);
    let first = matcher(PairingMode::FrontAware, 0.02).draw(&roster);

    let remainder: Vec<Competitor> = first
        .leftovers
        .iter()
        .chain(first.excluded_fronts.iter())
        .cloned()
        .collect();

    let second = matcher(PairingMode::Simple, 0.0).draw(&remainder);

    assert_partition(&remainder, &second);
    assert_pairs_respect_constraints(&second, 0.0);
}

#[test]
fn test_front_aware_matches_every_front_when_unconstrained() {
    // Five groups, each front has plenty of opponents once the cap is off
    let roster: Vec<Competitor> = create_roster(13, 3)
        .into_iter()
        .filter(|c| !c.front_name.ends_with('6'))
        .collect();

    let result = matcher(PairingMode::FrontAware, 0.0).draw(&roster);
    let complete = group_fronts(&roster).complete.len();

    assert_eq!(result.pairs.len(), complete);
    assert!(result.excluded_fronts.is_empty());
}
