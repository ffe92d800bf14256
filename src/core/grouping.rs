use std::collections::{HashMap, HashSet};

use crate::core::filters::normalize_label;
use crate::models::Competitor;

/// Identity of a registration front: `(group, front name)`, normalised once
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrontKey {
    group: String,
    front: String,
}

impl FrontKey {
    pub fn new(group: &str, front: &str) -> Self {
        Self {
            group: normalize_label(group),
            front: normalize_label(front),
        }
    }

    pub fn of(competitor: &Competitor) -> Self {
        Self::new(&competitor.group_id, &competitor.front_name)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn front(&self) -> &str {
        &self.front
    }
}

impl std::fmt::Display for FrontKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.group, self.front)
    }
}

/// A complete front: exactly two members, kept in roster order
#[derive(Debug, Clone, PartialEq)]
pub struct Front {
    pub key: FrontKey,
    pub members: [Competitor; 2],
}

impl Front {
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id == id)
    }
}

/// Roster split into complete fronts and registration-incomplete competitors
#[derive(Debug, Clone, Default)]
pub struct FrontGrouping {
    /// Complete fronts in order of first appearance
    pub complete: Vec<Front>,
    /// Members of fronts with any size other than two, in roster order
    pub registration_incomplete: Vec<Competitor>,
}

/// Partition a roster into fronts
///
/// A front with one member can never produce a fair duel pair and a front
/// with more than two is a data-entry error; both are incomplete.
pub fn group_fronts(competitors: &[Competitor]) -> FrontGrouping {
    let keys: Vec<FrontKey> = competitors.iter().map(FrontKey::of).collect();

    let mut index: HashMap<&FrontKey, usize> = HashMap::new();
    let mut buckets: Vec<(&FrontKey, Vec<&Competitor>)> = Vec::new();

    for (key, competitor) in keys.iter().zip(competitors) {
        match index.get(key) {
            Some(&slot) => buckets[slot].1.push(competitor),
            None => {
                index.insert(key, buckets.len());
                buckets.push((key, vec![competitor]));
            }
        }
    }

    let mut grouping = FrontGrouping::default();
    let mut incomplete_keys: HashSet<&FrontKey> = HashSet::new();

    for (key, members) in buckets {
        match members.as_slice() {
            [first, second] => grouping.complete.push(Front {
                key: key.clone(),
                members: [(*first).clone(), (*second).clone()],
            }),
            _ => {
                tracing::trace!("Front {} has {} members, marking incomplete", key, members.len());
                incomplete_keys.insert(key);
            }
        }
    }

    grouping.registration_incomplete = keys
        .iter()
        .zip(competitors)
        .filter(|(key, _)| incomplete_keys.contains(key))
        .map(|(_, competitor)| competitor.clone())
        .collect();

    grouping
}
