//! Duel Draw - weight-constrained duel pairing for derby tournaments
//!
//! This library provides the pairing engine behind a tournament draw. Given a
//! roster snapshot it produces 1-on-1 duels that never pit a group against
//! itself, keep weights within a configured gap, and keep the two members of a
//! registration front together: both fight or neither does.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, can_fight, validate_roster, GRAMS_PER_POUND};
pub use crate::models::{Competitor, Pairing, DrawResult, DrawSummary, PairingConfig, PairingMode, DrawRequest, DrawResponse};
