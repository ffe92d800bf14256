// Core algorithm exports
pub mod convergence;
pub mod filters;
pub mod fronts;
pub mod greedy;
pub mod grouping;
pub mod matcher;
pub mod validation;
pub mod weight;

pub use convergence::{converge_fronts, Convergence};
pub use filters::{can_fight, same_group, within_tolerance, normalize_label};
pub use fronts::{build_front_duel, select_front_duels, DuelPlan, FrontDuel, FrontSelection};
pub use greedy::{pair_by_weight, GreedyOutcome};
pub use grouping::{group_fronts, Front, FrontGrouping, FrontKey};
pub use matcher::{Matcher, PairingConfigError};
pub use validation::{validate_roster, RosterError, MIN_COMPETITORS};
pub use weight::{pounds_to_grams, difference_grams, rounded_difference_grams, GRAMS_PER_POUND};
