/// Okta identity provider client
///
/// Only the paginated active-user listing is needed.
pub mod client;
pub mod link;

pub use client::{OktaClient, OktaError, OktaProfile, OktaUser};
pub use link::parse_link_header;
