use std::collections::HashSet;

use thiserror::Error;

use crate::core::{
    convergence::converge_fronts,
    fronts::select_front_duels,
    greedy::pair_by_weight,
    grouping::group_fronts,
};
use crate::models::{Competitor, DrawResult, Pairing, PairingConfig, PairingMode};

/// Invalid pairing parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PairingConfigError {
    #[error("Weight tolerance must be a finite, non-negative number of pounds, got {0}")]
    InvalidTolerance(f64),

    #[error("Epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}

/// Main draw orchestrator
///
/// # Pipeline Stages
/// 1. Grouping into fronts (front modes only)
/// 2. Candidate generation and selection, or greedy pairing with convergence
/// 3. Output assembly into pairs, leftovers and excluded fronts
///
/// A draw is a pure function of its input: no state survives between calls.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: PairingConfig,
}

impl Matcher {
    pub fn new(config: PairingConfig) -> Result<Self, PairingConfigError> {
        validate_config(&config)?;
        Ok(Self { config })
    }

    pub fn with_default_config() -> Self {
        Self {
            config: PairingConfig::default(),
        }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Copy of this matcher with per-draw overrides applied
    pub fn with_overrides(
        &self,
        mode: Option<PairingMode>,
        max_weight_diff_lb: Option<f64>,
    ) -> Result<Self, PairingConfigError> {
        let mut config = self.config;
        if let Some(mode) = mode {
            config.mode = mode;
        }
        if let Some(max_weight_diff_lb) = max_weight_diff_lb {
            config.max_weight_diff_lb = max_weight_diff_lb;
        }
        Self::new(config)
    }

    /// Run a draw over a roster snapshot
    ///
    /// # Arguments
    /// * `competitors` - The roster, in registration order
    ///
    /// # Returns
    /// DrawResult partitioning the roster into duels, leftovers and excluded fronts
    pub fn draw(&self, competitors: &[Competitor]) -> DrawResult {
        tracing::info!(
            "Drawing {} competitors (mode: {}, max diff: {} lb)",
            competitors.len(),
            self.config.mode,
            self.config.max_weight_diff_lb
        );

        let result = match self.config.mode {
            PairingMode::FrontAware => self.draw_front_aware(competitors),
            PairingMode::Convergence => self.draw_convergence(competitors),
            PairingMode::Simple => self.draw_simple(competitors),
        };

        tracing::info!(
            "Draw complete: {} pairs, {} leftovers, {} excluded",
            result.pairs.len(),
            result.leftovers.len(),
            result.excluded_fronts.len()
        );

        result
    }

    fn draw_simple(&self, competitors: &[Competitor]) -> DrawResult {
        let outcome = pair_by_weight(competitors, &self.config);
        assemble(competitors, outcome.pairs, &HashSet::new())
    }

    fn draw_front_aware(&self, competitors: &[Competitor]) -> DrawResult {
        let grouping = group_fronts(competitors);

        tracing::debug!(
            "{} complete fronts, {} registration-incomplete competitors",
            grouping.complete.len(),
            grouping.registration_incomplete.len()
        );

        let selection = select_front_duels(&grouping.complete, &self.config);
        let pairs: Vec<Pairing> = selection.pairings().cloned().collect();

        let mut excluded: HashSet<&str> = grouping
            .registration_incomplete
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        for &front in &selection.unmatched {
            excluded.extend(grouping.complete[front].members.iter().map(|m| m.id.as_str()));
        }

        assemble(competitors, pairs, &excluded)
    }

    fn draw_convergence(&self, competitors: &[Competitor]) -> DrawResult {
        let grouping = group_fronts(competitors);
        let convergence = converge_fronts(&grouping.complete, &self.config);

        let mut excluded: HashSet<&str> = grouping
            .registration_incomplete
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        for front in grouping
            .complete
            .iter()
            .filter(|front| convergence.excluded.contains(&front.key))
        {
            excluded.extend(front.members.iter().map(|m| m.id.as_str()));
        }

        assemble(competitors, convergence.pairs, &excluded)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}

fn validate_config(config: &PairingConfig) -> Result<(), PairingConfigError> {
    if !config.max_weight_diff_lb.is_finite() || config.max_weight_diff_lb < 0.0 {
        return Err(PairingConfigError::InvalidTolerance(config.max_weight_diff_lb));
    }
    if !config.epsilon.is_finite() || config.epsilon < 0.0 {
        return Err(PairingConfigError::InvalidEpsilon(config.epsilon));
    }
    Ok(())
}

/// Split the roster into matched, excluded and leftover, keeping roster order
///
/// Matched wins over excluded, excluded over leftover; each id appears once.
fn assemble(competitors: &[Competitor], pairs: Vec<Pairing>, excluded: &HashSet<&str>) -> DrawResult {
    let matched: HashSet<&str> = pairs
        .iter()
        .flat_map(|p| [p.competitor_a.id.as_str(), p.competitor_b.id.as_str()])
        .collect();

    let mut placed: HashSet<&str> = HashSet::with_capacity(competitors.len());
    let mut leftovers = Vec::new();
    let mut excluded_fronts = Vec::new();

    for competitor in competitors {
        let id = competitor.id.as_str();
        if matched.contains(id) || !placed.insert(id) {
            continue;
        }

        if excluded.contains(id) {
            excluded_fronts.push(competitor.clone());
        } else {
            leftovers.push(competitor.clone());
        }
    }

    DrawResult {
        pairs,
        leftovers,
        excluded_fronts,
    }
}
