use std::collections::HashSet;

use thiserror::Error;

use crate::models::Competitor;

/// Fewest competitors a draw makes sense for
pub const MIN_COMPETITORS: usize = 2;

/// Reasons a roster snapshot is refused before it reaches the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error("At least {min} competitors are required for a draw, got {count}")]
    TooFewCompetitors { count: usize, min: usize },

    #[error("Roster has {count} competitors, the limit is {max}")]
    TooManyCompetitors { count: usize, max: usize },

    #[error("Duplicate competitor id: {0}")]
    DuplicateId(String),

    #[error("Competitor {id} has an invalid weight: {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("Competitor {0} has no group")]
    BlankGroup(String),
}

/// Check a roster before drawing
///
/// The engine itself accepts anything; duplicate ids and non-positive or
/// non-finite weights would break the partition of its output.
pub fn validate_roster(competitors: &[Competitor], max_competitors: usize) -> Result<(), RosterError> {
    let count = competitors.len();

    if count < MIN_COMPETITORS {
        return Err(RosterError::TooFewCompetitors {
            count,
            min: MIN_COMPETITORS,
        });
    }

    if count > max_competitors {
        return Err(RosterError::TooManyCompetitors {
            count,
            max: max_competitors,
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(count);

    for competitor in competitors {
        if !seen.insert(competitor.id.as_str()) {
            return Err(RosterError::DuplicateId(competitor.id.clone()));
        }

        if !competitor.weight_lb.is_finite() || competitor.weight_lb <= 0.0 {
            return Err(RosterError::InvalidWeight {
                id: competitor.id.clone(),
                weight: competitor.weight_lb,
            });
        }

        if competitor.group_id.trim().is_empty() {
            return Err(RosterError::BlankGroup(competitor.id.clone()));
        }
    }

    Ok(())
}
