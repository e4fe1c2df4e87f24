//! Commission postings, application intake, and admin review.

pub mod domain;
pub mod echo;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationSubmission, Commission, CommissionId, NewApplication,
    NewCommission, StatusUpdate, PENDING_STATUS,
};
pub use repository::{BoardRepository, RepositoryError};
pub use router::board_router;
pub use seed::{default_commissions, seed_commissions, SeedOutcome};
pub use service::{BoardError, BoardService, Clock};
pub use validation::{ValidatedSubmission, ValidationError};
