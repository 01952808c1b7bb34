/// Pritunl VPN API
///
/// Requests are authenticated with Pritunl's HMAC header scheme (see `auth`).
pub mod auth;
pub mod client;

pub use auth::AuthHeaders;
pub use client::{Organization, PritunlClient, PritunlError, PritunlUser};
