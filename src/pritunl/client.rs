//! Signed Pritunl API client

use crate::config::Config;
use crate::pritunl::auth::AuthHeaders;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum PritunlError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid auth header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{method} {path} returned {status}")]
    Status {
        method: Method,
        path: String,
        status: reqwest::StatusCode,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A Pritunl VPN user
#[derive(Debug, Clone, Deserialize)]
pub struct PritunlUser {
    pub id: String,
    /// Owning organization id
    pub organization: String,
    #[serde(default)]
    pub email: Option<String>,
    pub auth_type: String,
}

pub struct PritunlClient<'a> {
    client: Client,
    config: &'a Config,
}

impl<'a> PritunlClient<'a> {
    pub fn new(config: &'a Config) -> Result<Self, PritunlError> {
        Ok(Self {
            client: Client::builder().build()?,
            config,
        })
    }

    /// Send a request signed with a fresh timestamp and nonce
    ///
    /// Caller headers are sent too, but cannot replace the auth headers.
    pub async fn signed_request(
        &self,
        method: Method,
        path: &str,
        headers: Option<HeaderMap>,
        body: Option<String>,
    ) -> Result<Response, PritunlError> {
        let auth = AuthHeaders::new(
            &self.config.pritunl_api_token,
            &self.config.pritunl_api_secret,
            method.as_str(),
            path,
        );
        let mut headers = headers.unwrap_or_default();
        auth.apply(&mut headers)?;

        let url = self.config.pritunl_url(path);
        info!("{} {}", method, url);

        let mut request = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        debug!("{} from {}", response.status(), url);
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PritunlError> {
        let response = self.signed_request(Method::GET, path, None, None).await?;
        if !response.status().is_success() {
            warn!("Pritunl returned {} for {}", response.status(), path);
        }
        Ok(response.json().await?)
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, PritunlError> {
        self.get_json("/organization").await
    }

    pub async fn list_users(&self, org_id: &str) -> Result<Vec<PritunlUser>, PritunlError> {
        self.get_json(&format!("/user/{}", org_id)).await
    }

    pub async fn delete_user(&self, org_id: &str, user_id: &str) -> Result<(), PritunlError> {
        let path = format!("/user/{}/{}", org_id, user_id);
        let response = self
            .signed_request(Method::DELETE, &path, None, None)
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PritunlError::Status {
                method: Method::DELETE,
                path,
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users() {
        let json = r#"[
            {"id": "u1", "organization": "o1", "email": "Jane@Acme.com", "auth_type": "saml_okta", "name": "jane"},
            {"id": "u2", "organization": "o1", "email": null, "auth_type": "local", "name": "svc"},
            {"id": "u3", "organization": "o1", "auth_type": "saml_okta"}
        ]"#;

        let users: Vec<PritunlUser> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].email.as_deref(), Some("Jane@Acme.com"));
        assert_eq!(users[1].email, None);
        assert_eq!(users[2].email, None);
        assert_eq!(users[2].auth_type, "saml_okta");
    }

    #[test]
    fn test_parse_organizations() {
        let json = r#"[{"id": "o1", "name": "eng", "user_count": 4}, {"id": "o2"}]"#;
        let orgs: Vec<Organization> = serde_json::from_str(json).unwrap();
        assert_eq!(orgs[0].id, "o1");
        assert_eq!(orgs[0].name.as_deref(), Some("eng"));
        assert_eq!(orgs[1].name, None);
    }

    #[test]
    fn test_status_error_display() {
        let err = PritunlError::Status {
            method: Method::DELETE,
            path: "/user/o1/u1".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "DELETE /user/o1/u1 returned 404 Not Found");
    }
}
