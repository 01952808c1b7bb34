//! Reconciliation run
//!
//! Strictly sequential:
//!
//! 1. List every Pritunl organization and its users
//! 2. Keep Okta-backed accounts
//! 3. Fetch active Okta users
//! 4. Report accounts with no active Okta user
//! 5. After confirmation, delete them one at a time
//!
//! # Error Handling
//!
//! Nothing is retried. The first failed request, including a failed delete,
//! ends the run, so deletions made before it are not rolled back.

use crate::config::Config;
use crate::okta::{OktaClient, OktaError};
use crate::pritunl::{PritunlClient, PritunlError, PritunlUser};
use crate::prompt::confirm;
use crate::reconcile::candidates::{
    SsoAccount, active_emails, find_deletion_candidates, sso_accounts,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

const CONFIRM_QUESTION: &str =
    "Are you certain that you want to delete the above users from Pritunl?";

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Okta error: {0}")]
    OktaError(#[from] OktaError),
    #[error("Pritunl error: {0}")]
    PritunlError(#[from] PritunlError),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every Okta-backed account is still active; no prompt was shown
    NothingToDelete,
    /// The operator declined
    Cancelled { candidates: usize },
    /// Accounts deleted, in deletion order
    Deleted(Vec<SsoAccount>),
}

/// Run one reconciliation, reporting to `output` and reading the answer from `input`
pub async fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome, SyncError> {
    let pritunl = PritunlClient::new(config)?;
    let okta = OktaClient::new(config)?;

    let users = list_all_users(&pritunl).await?;
    let accounts = sso_accounts(&users);
    writeln!(output, "There are {} users in Pritunl", accounts.len())?;

    let okta_users = okta.fetch_active_users().await?;
    writeln!(output, "There are {} active users in Okta", okta_users.len())?;
    let active = active_emails(&okta_users);

    let candidates = find_deletion_candidates(&accounts, &active);
    report(&candidates, output)?;

    if candidates.is_empty() {
        return Ok(Outcome::NothingToDelete);
    }

    if !confirm(CONFIRM_QUESTION, Some(false), input, output)? {
        writeln!(output, "Cancelled the delete action")?;
        return Ok(Outcome::Cancelled {
            candidates: candidates.len(),
        });
    }

    for candidate in &candidates {
        pritunl
            .delete_user(&candidate.organization_id, &candidate.account_id)
            .await?;
        writeln!(
            output,
            "Deleted {} id: {} org_id: {}",
            candidate.email, candidate.account_id, candidate.organization_id
        )?;
    }

    info!("Deleted {} users from Pritunl", candidates.len());
    Ok(Outcome::Deleted(candidates))
}

/// Users of every organization, concatenated in listing order
async fn list_all_users(pritunl: &PritunlClient<'_>) -> Result<Vec<PritunlUser>, PritunlError> {
    let mut users = Vec::new();

    for org in pritunl.list_organizations().await? {
        let org_users = pritunl.list_users(&org.id).await?;
        debug!(
            "Organization {} ({}) has {} users",
            org.id,
            org.name.as_deref().unwrap_or("unnamed"),
            org_users.len()
        );
        users.extend(org_users);
    }

    Ok(users)
}

fn report<W: Write>(candidates: &[SsoAccount], output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "There are {} users that can be deleted from Pritunl",
        candidates.len()
    )?;
    writeln!(output)?;
    for candidate in candidates {
        writeln!(
            output,
            "email: {} id: {} org_id: {}",
            candidate.email, candidate.account_id, candidate.organization_id
        )?;
    }
    writeln!(output)
}
