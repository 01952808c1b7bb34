//! Pritunl API request signing
//!
//! Every request carries four headers. The signature is
//! `base64(HMAC-SHA256(secret, token&timestamp&nonce&METHOD&path))`, where
//! `path` is the request path only, never the full URL.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

pub const AUTH_TOKEN: HeaderName = HeaderName::from_static("auth-token");
pub const AUTH_TIMESTAMP: HeaderName = HeaderName::from_static("auth-timestamp");
pub const AUTH_NONCE: HeaderName = HeaderName::from_static("auth-nonce");
pub const AUTH_SIGNATURE: HeaderName = HeaderName::from_static("auth-signature");

/// Values for one signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub token: String,
    pub timestamp: String,
    pub nonce: String,
    pub signature: String,
}

impl AuthHeaders {
    /// Sign a request with a fresh timestamp and nonce
    pub fn new(token: &str, secret: &str, method: &str, path: &str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
            .to_string();
        let nonce = Uuid::new_v4().simple().to_string();

        Self::with_values(token, secret, &timestamp, &nonce, method, path)
    }

    pub fn with_values(
        token: &str,
        secret: &str,
        timestamp: &str,
        nonce: &str,
        method: &str,
        path: &str,
    ) -> Self {
        let signature = sign(secret, &auth_string(token, timestamp, nonce, method, path));
        Self {
            token: token.to_string(),
            timestamp: timestamp.to_string(),
            nonce: nonce.to_string(),
            signature,
        }
    }

    /// Write the four auth headers into `headers`, replacing any existing values
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), InvalidHeaderValue> {
        headers.insert(AUTH_TOKEN, HeaderValue::from_str(&self.token)?);
        headers.insert(AUTH_TIMESTAMP, HeaderValue::from_str(&self.timestamp)?);
        headers.insert(AUTH_NONCE, HeaderValue::from_str(&self.nonce)?);
        let mut signature = HeaderValue::from_str(&self.signature)?;
        signature.set_sensitive(true);
        headers.insert(AUTH_SIGNATURE, signature);
        Ok(())
    }
}

/// The string that gets signed. Method is upper-cased.
pub fn auth_string(token: &str, timestamp: &str, nonce: &str, method: &str, path: &str) -> String {
    let method = method.to_uppercase();
    [token, timestamp, nonce, method.as_str(), path].join("&")
}

/// Base64 HMAC-SHA256 of `message` keyed with `secret`
pub fn sign(secret: &str, message: &str) -> String {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
