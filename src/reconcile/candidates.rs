//! Deletion candidate selection
//!
//! Only accounts that authenticate through Okta are ever considered. Emails
//! are compared case-insensitively; an account without an email compares as
//! the empty string and so is always a candidate.

use crate::okta::OktaUser;
use crate::pritunl::PritunlUser;
use std::collections::HashSet;

/// Pritunl auth type of accounts backed by Okta SAML
pub const SSO_AUTH_TYPE: &str = "saml_okta";

/// An Okta-managed Pritunl account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoAccount {
    /// Lower-cased, empty when Pritunl has none
    pub email: String,
    pub account_id: String,
    pub organization_id: String,
}

pub fn normalize_email(email: Option<&str>) -> String {
    email.map(str::to_lowercase).unwrap_or_default()
}

/// Keep accounts with the SSO auth type, preserving listing order
pub fn sso_accounts(users: &[PritunlUser]) -> Vec<SsoAccount> {
    users
        .iter()
        .filter(|user| user.auth_type == SSO_AUTH_TYPE)
        .map(|user| SsoAccount {
            email: normalize_email(user.email.as_deref()),
            account_id: user.id.clone(),
            organization_id: user.organization.clone(),
        })
        .collect()
}

pub fn active_emails(users: &[OktaUser]) -> HashSet<String> {
    users
        .iter()
        .map(|user| user.profile.email.to_lowercase())
        .collect()
}

/// Accounts whose email is not in the active set, in input order
pub fn find_deletion_candidates(
    accounts: &[SsoAccount],
    active: &HashSet<String>,
) -> Vec<SsoAccount> {
    accounts
        .iter()
        .filter(|account| !active.contains(&account.email))
        .cloned()
        .collect()
}
