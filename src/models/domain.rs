use serde::{Deserialize, Serialize};

use crate::core::weight::rounded_difference_grams;

/// A registered competitor, as supplied by the roster snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "frontName", default)]
    pub front_name: String,
    #[serde(rename = "weightLb")]
    pub weight_lb: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl Competitor {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        front_name: impl Into<String>,
        weight_lb: f64,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            front_name: front_name.into(),
            weight_lb,
            name: None,
            owner: None,
        }
    }
}

/// A single 1-on-1 duel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    #[serde(rename = "competitorA")]
    pub competitor_a: Competitor,
    #[serde(rename = "competitorB")]
    pub competitor_b: Competitor,
    #[serde(rename = "differenceGrams")]
    pub difference_grams: u64,
}

impl Pairing {
    pub fn new(competitor_a: Competitor, competitor_b: Competitor) -> Self {
        let difference_grams =
            rounded_difference_grams(competitor_a.weight_lb, competitor_b.weight_lb);
        Self {
            competitor_a,
            competitor_b,
            difference_grams,
        }
    }

    /// Whether the given competitor id fights in this duel
    pub fn involves(&self, id: &str) -> bool {
        self.competitor_a.id == id || self.competitor_b.id == id
    }
}

/// Outcome of a draw: a partition of the input roster
///
/// Every input competitor lands in exactly one of `pairs`, `leftovers`
/// or `excluded_fronts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawResult {
    pub pairs: Vec<Pairing>,
    pub leftovers: Vec<Competitor>,
    #[serde(rename = "excludedFronts")]
    pub excluded_fronts: Vec<Competitor>,
}

impl DrawResult {
    /// Ids of every competitor placed in a duel
    pub fn matched_ids(&self) -> Vec<&str> {
        self.pairs
            .iter()
            .flat_map(|p| [p.competitor_a.id.as_str(), p.competitor_b.id.as_str()])
            .collect()
    }

    pub fn summary(&self) -> DrawSummary {
        let total_registered =
            self.pairs.len() * 2 + self.leftovers.len() + self.excluded_fronts.len();

        DrawSummary {
            total_registered,
            total_pairs: self.pairs.len(),
            total_leftovers: self.leftovers.len(),
            total_excluded: self.excluded_fronts.len(),
            total_possible_pairs: total_registered / 2,
        }
    }
}

/// Headline numbers for a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSummary {
    #[serde(rename = "totalRegistered")]
    pub total_registered: usize,
    #[serde(rename = "totalPairs")]
    pub total_pairs: usize,
    #[serde(rename = "totalLeftovers")]
    pub total_leftovers: usize,
    #[serde(rename = "totalExcluded")]
    pub total_excluded: usize,
    #[serde(rename = "totalPossiblePairs")]
    pub total_possible_pairs: usize,
}

/// Which pairing strategy a draw runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingMode {
    /// Whole fronts duel whole fronts, most-constrained front first
    #[default]
    FrontAware,
    /// Individual nearest-weight greedy, re-run until no front is half-matched
    Convergence,
    /// Individual nearest-weight greedy with no front structure
    Simple,
}

impl std::fmt::Display for PairingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PairingMode::FrontAware => "front_aware",
            PairingMode::Convergence => "convergence",
            PairingMode::Simple => "simple",
        };
        f.write_str(label)
    }
}

/// Pairing parameters
///
/// `max_weight_diff_lb` of `0.0` disables the weight cap entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairingConfig {
    pub mode: PairingMode,
    #[serde(rename = "maxWeightDiffLb")]
    pub max_weight_diff_lb: f64,
    pub epsilon: f64,
}

impl PairingConfig {
    pub const DEFAULT_MAX_WEIGHT_DIFF_LB: f64 = 0.02;
    pub const DEFAULT_EPSILON: f64 = 1e-9;

    pub fn is_weight_capped(&self) -> bool {
        self.max_weight_diff_lb > 0.0
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            mode: PairingMode::default(),
            max_weight_diff_lb: Self::DEFAULT_MAX_WEIGHT_DIFF_LB,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}
