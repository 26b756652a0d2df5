use atrium_common::WorkspaceSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An account that can own workspaces or be invited into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Workspace row.
///
/// `deleted_at` marks a soft delete: the row keeps its slug (slugs stay unique
/// across deleted rows) but is invisible to every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbWorkspace {
    pub id: String,
    pub workspace_code: String,
    pub name: String,
    pub slug: String,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DbWorkspace {
    pub fn summary(&self) -> WorkspaceSummary {
        WorkspaceSummary {
            name: self.name.clone(),
            slug: self.slug.clone(),
            workspace_code: self.workspace_code.clone(),
        }
    }
}

/// Membership of a user in a workspace. A member removed from the workspace
/// keeps its row with `deleted_at` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbMember {
    pub id: String,
    pub workspace_id: String,
    pub user_id: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A logged-in user, resolved from a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
