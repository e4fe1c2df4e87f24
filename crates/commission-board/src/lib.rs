//! Commission board backend: job postings, applicant intake, and admin review.

pub mod board;
pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
