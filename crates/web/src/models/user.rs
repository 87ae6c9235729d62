//! User domain types.
//!
//! These types represent the resolved account identity, separate from the
//! HR API wire records.

use chrono::{DateTime, Utc};

use crewdesk_core::{Credential, Role, UserId};

use crate::hr::UserRecord;

/// The authenticated account, as confirmed by the HR API.
///
/// Owned by the session manager for the lifetime of one resolution; never
/// persisted on this side. Whenever the stored credential is resolved the
/// user is re-fetched from the backend.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Account ID.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Which area of the app this account may enter.
    pub role: Role,
    /// Whether the one-time profile setup has been completed.
    pub profile_setup_complete: bool,
    /// Disabled accounts keep resolving but are flagged for the views.
    pub enabled: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for CurrentUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            role: record.role,
            profile_setup_complete: record.set_profile_setup,
            enabled: record.enabled,
            created_at: record.created_at,
        }
    }
}

/// An authenticated viewer: the resolved user together with the credential
/// that proved them.
///
/// Handed to guarded handlers by the extractors; existing at all implies a
/// session that resolved with both halves present.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub user: CurrentUser,
    pub credential: Credential,
}
