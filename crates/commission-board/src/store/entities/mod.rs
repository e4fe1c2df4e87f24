pub mod application;
pub mod commission;
