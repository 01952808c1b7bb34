//! Pritunl/Okta sync - prune Pritunl VPN users that are no longer active in Okta
//!
//! Every Pritunl user that signs in through Okta SAML is matched by email
//! against Okta's ACTIVE users. Accounts without a match are listed and,
//! once the operator confirms, deleted one by one.
//!
//! # Architecture
//!
//! - `config`: Run configuration built from command-line arguments
//! - `okta`: Paginated Okta user listing (`Link` header pagination)
//! - `pritunl`: HMAC-signed Pritunl API client
//! - `prompt`: Yes/no confirmation over stdin
//! - `reconcile`: Candidate selection and the linear run
//!
//! # Usage
//!
//! ```bash
//! pritunl-okta-sync --sso_domain https://acme.okta.com \
//!   --pritunl_domain https://vpn.acme.com \
//!   --okta_api_key KEY --pritunl_api_key TOKEN --pritunl_api_secret SECRET
//! ```

pub mod config;
pub mod okta;
pub mod pritunl;
pub mod prompt;
pub mod reconcile;

pub use config::Config;
pub use reconcile::{Outcome, SyncError, run};
