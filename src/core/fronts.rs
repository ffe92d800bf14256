use crate::core::filters::{can_fight, same_label};
use crate::core::grouping::Front;
use crate::models::{Competitor, Pairing, PairingConfig};

/// The cheaper valid slot assignment between two fronts
#[derive(Debug, Clone, PartialEq)]
pub struct DuelPlan {
    pub pairings: [Pairing; 2],
    pub total_diff_grams: u64,
}

/// A candidate duel between two fronts, by index into the front list
#[derive(Debug, Clone, PartialEq)]
pub struct FrontDuel {
    pub home: usize,
    pub away: usize,
    pub plan: DuelPlan,
}

impl FrontDuel {
    #[inline]
    fn is_open(&self, used: &[bool]) -> bool {
        !used[self.home] && !used[self.away]
    }
}

/// Fronts chosen to duel, plus the complete fronts left without an opponent
#[derive(Debug, Clone, Default)]
pub struct FrontSelection {
    pub duels: Vec<FrontDuel>,
    pub unmatched: Vec<usize>,
}

impl FrontSelection {
    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.duels.iter().flat_map(|duel| duel.plan.pairings.iter())
    }
}

fn plan_assignment(
    slots: [(&Competitor, &Competitor); 2],
    config: &PairingConfig,
) -> Option<DuelPlan> {
    if !slots.iter().all(|(a, b)| can_fight(a, b, config)) {
        return None;
    }

    let pairings = slots.map(|(a, b)| Pairing::new(a.clone(), b.clone()));
    let total_diff_grams = pairings.iter().map(|p| p.difference_grams).sum();

    Some(DuelPlan {
        pairings,
        total_diff_grams,
    })
}

/// Decide if and how two complete fronts may duel
///
/// Both slot assignments are tried: straight `(a1,b1),(a2,b2)` and crossed
/// `(a1,b2),(a2,b1)`. An assignment counts only if both of its pairs can fight.
/// When both count, the lower total gram difference wins; ties keep straight.
pub fn build_front_duel(home: &Front, away: &Front, config: &PairingConfig) -> Option<DuelPlan> {
    if same_label(home.key.group(), away.key.group()) {
        return None;
    }

    let [a1, a2] = &home.members;
    let [b1, b2] = &away.members;

    let straight = plan_assignment([(a1, b1), (a2, b2)], config);
    let crossed = plan_assignment([(a1, b2), (a2, b1)], config);

    match (straight, crossed) {
        (Some(straight), Some(crossed)) => {
            if crossed.total_diff_grams < straight.total_diff_grams {
                Some(crossed)
            } else {
                Some(straight)
            }
        }
        (straight, crossed) => straight.or(crossed),
    }
}

/// Choose front-vs-front duels, most-constrained front first
///
/// Each round, the unused front with the fewest still-open duels drives the
/// choice and takes its cheapest one. Fronts with no open duel are skipped as
/// drivers but stay available as opponents. Ties fall back to roster order.
pub fn select_front_duels(fronts: &[Front], config: &PairingConfig) -> FrontSelection {
    let count = fronts.len();

    // Candidates in construction order: (0,1), (0,2), ..., (1,2), ...
    let mut candidates: Vec<Option<FrontDuel>> = Vec::new();
    let mut by_front: Vec<Vec<usize>> = vec![Vec::new(); count];

    for home in 0..count {
        for away in home + 1..count {
            if let Some(plan) = build_front_duel(&fronts[home], &fronts[away], config) {
                let slot = candidates.len();
                by_front[home].push(slot);
                by_front[away].push(slot);
                candidates.push(Some(FrontDuel { home, away, plan }));
            }
        }
    }

    tracing::debug!(
        "Built {} candidate duels across {} complete fronts",
        candidates.len(),
        count
    );

    let mut used = vec![false; count];
    let mut selection = FrontSelection::default();

    loop {
        if used.iter().filter(|u| !**u).count() < 2 {
            break;
        }

        // (fewest open duels, driver front, cheapest open duel)
        let mut driver: Option<(usize, usize, usize)> = None;

        for front in (0..count).filter(|&f| !used[f]) {
            let open: Vec<usize> = by_front[front]
                .iter()
                .copied()
                .filter(|&slot| {
                    candidates[slot]
                        .as_ref()
                        .is_some_and(|duel| duel.is_open(&used))
                })
                .collect();

            if open.is_empty() {
                continue;
            }

            if driver.map_or(true, |(fewest, _, _)| open.len() < fewest) {
                // min_by_key keeps the first of equal costs, i.e. construction order
                let cheapest = open
                    .iter()
                    .copied()
                    .min_by_key(|&slot| {
                        candidates[slot]
                            .as_ref()
                            .map_or(u64::MAX, |duel| duel.plan.total_diff_grams)
                    });

                if let Some(cheapest) = cheapest {
                    driver = Some((open.len(), front, cheapest));
                }
            }
        }

        let Some((options, front, slot)) = driver else {
            break;
        };

        let Some(duel) = candidates[slot].take() else {
            break;
        };

        tracing::trace!(
            "Front {} ({} options) duels {} vs {} at {}g",
            fronts[front].key,
            options,
            fronts[duel.home].key,
            fronts[duel.away].key,
            duel.plan.total_diff_grams
        );

        used[duel.home] = true;
        used[duel.away] = true;
        selection.duels.push(duel);
    }

    selection.unmatched = (0..count).filter(|&f| !used[f]).collect();
    selection
}
