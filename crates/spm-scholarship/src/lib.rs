//! Scholarship eligibility checking for Malaysian SPM students.
//!
//! The [`eligibility`] module holds the matching engine; [`config`], [`error`], and
//! [`telemetry`] carry the service plumbing shared with the API binary.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
