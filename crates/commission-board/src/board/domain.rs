use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status every application starts in.
pub const PENDING_STATUS: &str = "Pending";

/// Store-assigned identifier of a commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommissionId(pub i32);

/// Store-assigned identifier of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i32);

impl fmt::Display for CommissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CommissionId> for i64 {
    fn from(id: CommissionId) -> Self {
        i64::from(id.0)
    }
}

impl From<ApplicationId> for i64 {
    fn from(id: ApplicationId) -> Self {
        i64::from(id.0)
    }
}

/// A published job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    pub id: CommissionId,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Commission fields supplied by the seeding step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommission {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Persisted application as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub commission_id: CommissionId,
    pub full_name: String,
    pub email: String,
    pub portfolio_url: Option<String>,
    pub cover_letter: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Applicant payload as received on the wire, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    pub cover_letter: String,
}

/// Submission that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub portfolio_url: Option<String>,
    pub cover_letter: String,
    pub created_at: DateTime<Utc>,
}

/// Admin request replacing an application's status.
///
/// Status is free text; no transition graph is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}
