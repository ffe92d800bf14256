// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Competitor, Pairing, DrawResult, DrawSummary, PairingMode, PairingConfig};
pub use requests::{DrawRequest, CompetitorRequest};
pub use responses::{DrawResponse, HealthResponse, ErrorResponse};
