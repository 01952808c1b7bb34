//! Runtime configuration for a reconciliation run
//!
//! Everything comes from the command line. The struct is built once in
//! `main` and handed to both API clients by reference.

use reqwest::Url;
use thiserror::Error;

/// Okta user listing endpoint
pub const OKTA_USERS_PATH: &str = "/api/v1/users";

/// Page size requested from Okta
pub const OKTA_PAGE_LIMIT: u32 = 200;

/// `status eq "ACTIVE"`, percent-encoded for the `search` parameter
const OKTA_ACTIVE_FILTER: &str = "status%20eq%20%22ACTIVE%22";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidDomain {
        field: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sso_domain: String,
    pub pritunl_domain: String,
    pub okta_api_key: String,
    pub pritunl_api_token: String,
    pub pritunl_api_secret: String,
}

impl Config {
    /// Build a config, validating both domains
    ///
    /// Domains must be absolute http(s) URLs. A trailing slash is dropped
    /// so that paths can be appended directly.
    pub fn new(
        sso_domain: &str,
        pritunl_domain: &str,
        okta_api_key: &str,
        pritunl_api_token: &str,
        pritunl_api_secret: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            sso_domain: normalize_domain("sso_domain", sso_domain)?,
            pritunl_domain: normalize_domain("pritunl_domain", pritunl_domain)?,
            okta_api_key: okta_api_key.to_string(),
            pritunl_api_token: pritunl_api_token.to_string(),
            pritunl_api_secret: pritunl_api_secret.to_string(),
        })
    }

    /// First page of the active-user listing
    pub fn okta_users_url(&self) -> String {
        format!(
            "{}{}?limit={}&search={}",
            self.sso_domain, OKTA_USERS_PATH, OKTA_PAGE_LIMIT, OKTA_ACTIVE_FILTER
        )
    }

    pub fn pritunl_url(&self, path: &str) -> String {
        format!("{}{}", self.pritunl_domain, path)
    }
}

fn normalize_domain(field: &'static str, value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidDomain {
        field,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(sso: &str, pritunl: &str) -> Result<Config, ConfigError> {
        Config::new(sso, pritunl, "okta-key", "token", "secret")
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = config("https://acme.okta.com/", "https://vpn.acme.com//").unwrap();
        assert_eq!(config.sso_domain, "https://acme.okta.com");
        assert_eq!(config.pritunl_domain, "https://vpn.acme.com");
        assert_eq!(
            config.pritunl_url("/organization"),
            "https://vpn.acme.com/organization"
        );
    }

    #[test]
    fn test_okta_users_url() {
        let config = config("https://acme.okta.com", "https://vpn.acme.com").unwrap();
        assert_eq!(
            config.okta_users_url(),
            "https://acme.okta.com/api/v1/users?limit=200&search=status%20eq%20%22ACTIVE%22"
        );
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let err = config("acme.okta.com", "https://vpn.acme.com").unwrap_err();
        assert!(err.to_string().starts_with("Invalid sso_domain 'acme.okta.com'"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = config("https://acme.okta.com", "ftp://vpn.acme.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_rejects_empty_domain() {
        assert!(config("", "https://vpn.acme.com").is_err());
    }
}
