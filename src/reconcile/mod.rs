//! Okta to Pritunl reconciliation
//!
//! `candidates` holds the pure selection logic, `driver` the linear run
//! that talks to both APIs and the operator.

pub mod candidates;
pub mod driver;

pub use candidates::{SSO_AUTH_TYPE, SsoAccount, find_deletion_candidates};
pub use driver::{Outcome, SyncError, run};
