use crate::core::{filters::can_fight, weight::difference_grams};
use crate::models::{Competitor, Pairing, PairingConfig};

/// Pairs found by the nearest-weight greedy and whoever was left over
#[derive(Debug, Clone, Default)]
pub struct GreedyOutcome {
    pub pairs: Vec<Pairing>,
    pub leftovers: Vec<Competitor>,
}

/// Pair individual competitors by nearest weight, ignoring fronts
///
/// The roster is sorted by weight (stable), then each round scans every
/// `i < j` pair and takes the feasible one with the strictly smallest gram
/// difference; the first pair found wins ties. Stops when fewer than two
/// remain or nothing left can fight.
///
/// O(n²) per round, O(n³) overall.
pub fn pair_by_weight(competitors: &[Competitor], config: &PairingConfig) -> GreedyOutcome {
    let mut available: Vec<&Competitor> = competitors.iter().collect();
    available.sort_by(|a, b| a.weight_lb.total_cmp(&b.weight_lb));

    let mut pairs = Vec::with_capacity(available.len() / 2);

    while available.len() > 1 {
        let mut best: Option<(usize, usize, f64)> = None;

        for i in 0..available.len() {
            for j in i + 1..available.len() {
                if !can_fight(available[i], available[j], config) {
                    continue;
                }

                let diff = difference_grams(available[i].weight_lb, available[j].weight_lb);
                if best.map_or(true, |(_, _, best_diff)| diff < best_diff) {
                    best = Some((i, j, diff));
                }
            }
        }

        let Some((i, j, _)) = best else {
            break;
        };

        // j > i, so removing j first keeps i valid
        let b = available.remove(j);
        let a = available.remove(i);
        pairs.push(Pairing::new(a.clone(), b.clone()));
    }

    GreedyOutcome {
        pairs,
        leftovers: available.into_iter().cloned().collect(),
    }
}
