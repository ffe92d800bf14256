use std::collections::HashSet;

use crate::core::greedy::pair_by_weight;
use crate::core::grouping::{Front, FrontKey};
use crate::models::{Competitor, Pairing, PairingConfig};

/// Stable result of the front-consistency loop
#[derive(Debug, Clone, Default)]
pub struct Convergence {
    pub pairs: Vec<Pairing>,
    pub excluded: HashSet<FrontKey>,
    pub iterations: usize,
}

/// Run the nearest-weight greedy over complete fronts until no front is half-matched
///
/// Each pass pairs the members of every front not yet excluded. Any front
/// with exactly one member in a duel is excluded and the pass is repeated.
/// The exclusion set only grows, so at most `fronts.len() + 1` passes run.
pub fn converge_fronts(fronts: &[Front], config: &PairingConfig) -> Convergence {
    let mut excluded: HashSet<FrontKey> = HashSet::new();
    let max_iterations = fronts.len() + 1;

    for iteration in 1..=max_iterations {
        let active: Vec<&Front> = fronts
            .iter()
            .filter(|front| !excluded.contains(&front.key))
            .collect();

        let pool: Vec<Competitor> = active
            .iter()
            .flat_map(|front| front.members.iter().cloned())
            .collect();

        let outcome = pair_by_weight(&pool, config);

        let newly_excluded: Vec<FrontKey> = {
            let matched: HashSet<&str> = outcome
                .pairs
                .iter()
                .flat_map(|p| [p.competitor_a.id.as_str(), p.competitor_b.id.as_str()])
                .collect();

            active
                .iter()
                .filter(|front| {
                    front
                        .members
                        .iter()
                        .filter(|m| matched.contains(m.id.as_str()))
                        .count()
                        == 1
                })
                .map(|front| front.key.clone())
                .collect()
        };

        if newly_excluded.is_empty() {
            tracing::debug!(
                "Front pairing converged after {} pass(es): {} pairs, {} fronts excluded",
                iteration,
                outcome.pairs.len(),
                excluded.len()
            );
            return Convergence {
                pairs: outcome.pairs,
                excluded,
                iterations: iteration,
            };
        }

        tracing::debug!(
            "Pass {}: excluding {} half-matched front(s)",
            iteration,
            newly_excluded.len()
        );
        excluded.extend(newly_excluded);
    }

    // Every pass excluded at least one front, so all of them are out now
    tracing::warn!("Front pairing hit its pass limit with {} fronts", fronts.len());
    Convergence {
        pairs: Vec::new(),
        excluded,
        iterations: max_iterations,
    }
}
