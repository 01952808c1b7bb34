//! Okta user listing
//!
//! Pulls every ACTIVE user, one page at a time, following the `next`
//! relation of the `Link` header until Okta stops sending one.

use crate::config::Config;
use crate::okta::link::next_page;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum OktaError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid API key header value")]
    InvalidApiKey,
}

/// An Okta user as returned by `/api/v1/users`
#[derive(Debug, Clone, Deserialize)]
pub struct OktaUser {
    pub profile: OktaProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OktaProfile {
    pub email: String,
}

pub struct OktaClient {
    client: Client,
    first_page: String,
    headers: HeaderMap,
}

impl OktaClient {
    pub fn new(config: &Config) -> Result<Self, OktaError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("SSWS {}", config.okta_api_key))
            .map_err(|_| OktaError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            client: Client::builder().build()?,
            first_page: config.okta_users_url(),
            headers,
        })
    }

    /// Fetch all active users across every page, in the order Okta returns them
    pub async fn fetch_active_users(&self) -> Result<Vec<OktaUser>, OktaError> {
        let mut users = Vec::new();
        let mut next = Some(self.first_page.clone());

        while let Some(url) = next {
            let (page, next_url) = self.fetch_page(&url).await?;
            users.extend(page);
            next = next_url;
        }

        debug!("Fetched {} active Okta users", users.len());
        Ok(users)
    }

    async fn fetch_page(&self, url: &str) -> Result<(Vec<OktaUser>, Option<String>), OktaError> {
        info!("Fetching: {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Okta returned {} for {}", status, url);
        }

        let next = next_page(response.headers());
        let page: Vec<OktaUser> = response.json().await?;
        debug!("Page had {} users, next: {:?}", page.len(), next);

        Ok((page, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_page() {
        let json = r#"[
            {
                "id": "00u1",
                "status": "ACTIVE",
                "profile": {"email": "Jane.Doe@Acme.com", "login": "jane.doe@acme.com", "firstName": "Jane"}
            },
            {
                "profile": {"email": "bob@acme.com"}
            }
        ]"#;

        let users: Vec<OktaUser> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].profile.email, "Jane.Doe@Acme.com");
        assert_eq!(users[1].profile.email, "bob@acme.com");
    }

    #[test]
    fn test_missing_email_is_an_error() {
        let json = r#"[{"id": "00u1", "profile": {"login": "x"}}]"#;
        assert!(serde_json::from_str::<Vec<OktaUser>>(json).is_err());
    }

    #[test]
    fn test_rejects_unprintable_api_key() {
        let config = Config::new(
            "https://acme.okta.com",
            "https://vpn.acme.com",
            "bad\nkey",
            "token",
            "secret",
        )
        .unwrap();
        assert!(matches!(
            OktaClient::new(&config),
            Err(OktaError::InvalidApiKey)
        ));
    }
}
