use crate::db::{Database, DbWorkspace, Session};
use atrium_common::{
    is_valid_name, is_valid_slug, slug_with_counter, slugify, FieldError, FieldErrors,
    SettingsField, WorkspaceSummary,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

const NAME_LENGTH_MSG: &str = "Name must be provided and must not exceed 16 characters";
const SLUG_LENGTH_MSG: &str = "Slug must be provided and must not exceed 16 characters";
const SLUG_TAKEN_MSG: &str = "Slug is already in use";

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Validation failed")]
    Validation(FieldErrors),
    #[error("Workspace not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl WorkspaceError {
    fn field(field: SettingsField, msg: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(
            field.as_str().to_string(),
            FieldError {
                msg: msg.to_string(),
            },
        );
        WorkspaceError::Validation(errors)
    }
}

/// Reads and partial updates of workspaces on behalf of a signed-in user.
///
/// Every operation first resolves the workspace through the visibility rule
/// (creator, or active member, of a non-deleted workspace with that exact
/// slug), so a user can never touch a workspace they cannot see.
#[derive(Clone, Debug)]
pub struct WorkspaceManager {
    database: Database,
}

pub type SharedWorkspaceManager = Arc<WorkspaceManager>;

impl WorkspaceManager {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Initial props for the general settings page.
    ///
    /// `None` when there is no session or when the workspace is not visible;
    /// the page shell decides what to show in that case.
    pub async fn load_general_settings(
        &self,
        session: Option<&Session>,
        slug: &str,
    ) -> Result<Option<WorkspaceSummary>, WorkspaceError> {
        let Some(session) = session else {
            return Ok(None);
        };
        let workspace = self
            .database
            .find_visible_workspace(&session.user_id, slug)
            .await?;
        Ok(workspace.map(|w| w.summary()))
    }

    async fn visible(&self, user_id: &str, slug: &str) -> Result<DbWorkspace, WorkspaceError> {
        self.database
            .find_visible_workspace(user_id, slug)
            .await?
            .ok_or(WorkspaceError::NotFound)
    }

    /// Rename the workspace at `path_slug`. Returns the stored name.
    pub async fn update_name(
        &self,
        user_id: &str,
        path_slug: &str,
        name: &str,
    ) -> Result<String, WorkspaceError> {
        let name = name.trim();
        if !is_valid_name(name) {
            return Err(WorkspaceError::field(SettingsField::Name, NAME_LENGTH_MSG));
        }

        let workspace = self.visible(user_id, path_slug).await?;
        self.database
            .update_workspace_name(&workspace.id, name)
            .await?;

        info!("Workspace {} renamed to {name:?}", workspace.id);
        Ok(name.to_string())
    }

    /// Change the slug of the workspace at `path_slug`.
    ///
    /// The input is normalized with [`slugify`]. When the normalized slug
    /// belongs to another workspace, `-1`, `-2`, ... is appended until it is
    /// free, shortening the base so the result still fits the length limit.
    /// Returns the slug that was stored.
    pub async fn update_slug(
        &self,
        user_id: &str,
        path_slug: &str,
        slug: &str,
    ) -> Result<String, WorkspaceError> {
        // slugify output is always in slug form; emptiness and length can still fail
        let normalized = slugify(slug);
        if !is_valid_slug(&normalized) {
            return Err(WorkspaceError::field(SettingsField::Slug, SLUG_LENGTH_MSG));
        }

        let workspace = self.visible(user_id, path_slug).await?;
        if workspace.slug == normalized {
            return Ok(normalized);
        }

        let mut candidate = normalized.clone();
        let mut counter = 1u32;
        while self.database.slug_taken(&candidate, &workspace.id).await? {
            candidate = slug_with_counter(&normalized, counter)
                .ok_or_else(|| WorkspaceError::field(SettingsField::Slug, SLUG_TAKEN_MSG))?;
            counter += 1;
        }

        if let Err(e) = self
            .database
            .update_workspace_slug(&workspace.id, &candidate)
            .await
        {
            let unique_violation = e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());
            if unique_violation {
                warn!("Slug {candidate:?} was claimed concurrently");
                return Err(WorkspaceError::field(SettingsField::Slug, SLUG_TAKEN_MSG));
            }
            return Err(e.into());
        }

        info!(
            "Workspace {} slug changed from {:?} to {candidate:?}",
            workspace.id, workspace.slug
        );
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbUser;
    use chrono::Duration;

    async fn setup() -> (WorkspaceManager, DbUser) {
        let db = Database::open_in_memory().await.unwrap();
        let owner = db.create_user("owner@example.com", None).await.unwrap();
        db.create_workspace(&owner.id, "Acme", "acme").await.unwrap();
        (WorkspaceManager::new(db), owner)
    }

    fn messages(err: WorkspaceError) -> Vec<(String, String)> {
        match err {
            WorkspaceError::Validation(errors) => errors
                .into_iter()
                .map(|(field, e)| (field, e.msg))
                .collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_without_session_is_none() {
        let (manager, _) = setup().await;
        let props = manager.load_general_settings(None, "acme").await.unwrap();
        assert!(props.is_none());
    }

    #[tokio::test]
    async fn load_with_session_projects_summary() {
        let (manager, owner) = setup().await;
        let session = manager
            .database()
            .create_session(&owner.id, Duration::hours(1))
            .await
            .unwrap();

        let summary = manager
            .load_general_settings(Some(&session), "acme")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.name, "Acme");
        assert_eq!(summary.slug, "acme");
        assert!(!summary.workspace_code.is_empty());
    }

    #[tokio::test]
    async fn update_name_trims_and_stores() {
        let (manager, owner) = setup().await;
        let stored = manager.update_name(&owner.id, "acme", "  Acme Two ").await.unwrap();
        assert_eq!(stored, "Acme Two");

        let row = manager
            .database()
            .find_visible_workspace(&owner.id, "acme")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.name, "Acme Two");
    }

    #[tokio::test]
    async fn update_name_rejects_bad_length() {
        let (manager, owner) = setup().await;
        let err = manager
            .update_name(&owner.id, "acme", "abcdefghijklmnopq")
            .await
            .unwrap_err();
        assert_eq!(
            messages(err),
            vec![("name".to_string(), NAME_LENGTH_MSG.to_string())]
        );

        let err = manager.update_name(&owner.id, "acme", "   ").await.unwrap_err();
        assert_eq!(messages(err).len(), 1);
    }

    #[tokio::test]
    async fn update_name_on_invisible_workspace_is_not_found() {
        let (manager, _) = setup().await;
        let stranger = manager
            .database()
            .create_user("stranger@example.com", None)
            .await
            .unwrap();
        let err = manager
            .update_name(&stranger.id, "acme", "Mine")
            .await
            .unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound));
    }

    #[tokio::test]
    async fn update_slug_normalizes_input() {
        let (manager, owner) = setup().await;
        let stored = manager
            .update_slug(&owner.id, "acme", " Acme HQ ")
            .await
            .unwrap();
        assert_eq!(stored, "acme-hq");

        let db = manager.database();
        assert!(db.find_visible_workspace(&owner.id, "acme").await.unwrap().is_none());
        assert!(db.find_visible_workspace(&owner.id, "acme-hq").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_slug_appends_counter_when_taken() {
        let (manager, owner) = setup().await;
        let db = manager.database();
        let other = db.create_user("other@example.com", None).await.unwrap();
        db.create_workspace(&other.id, "Beta", "beta").await.unwrap();
        db.create_workspace(&other.id, "Beta 1", "beta-1").await.unwrap();

        let stored = manager.update_slug(&owner.id, "acme", "beta").await.unwrap();
        assert_eq!(stored, "beta-2");
    }

    #[tokio::test]
    async fn update_slug_counter_stays_within_length_limit() {
        let (manager, owner) = setup().await;
        let db = manager.database();
        let other = db.create_user("other@example.com", None).await.unwrap();
        db.create_workspace(&other.id, "Long", "abcdefghijklmnop").await.unwrap();
        db.create_workspace(&other.id, "Long 1", "abcdefghijklmn-1").await.unwrap();

        let stored = manager
            .update_slug(&owner.id, "acme", "abcdefghijklmnop")
            .await
            .unwrap();
        assert_eq!(stored, "abcdefghijklmn-2");
        assert!(is_valid_slug(&stored));
        assert!(db.find_visible_workspace(&owner.id, &stored).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_slug_to_same_value_is_noop() {
        let (manager, owner) = setup().await;
        let stored = manager.update_slug(&owner.id, "acme", "acme").await.unwrap();
        assert_eq!(stored, "acme");
    }

    #[tokio::test]
    async fn update_slug_rejects_invalid_values() {
        let (manager, owner) = setup().await;

        let err = manager.update_slug(&owner.id, "acme", "!!!").await.unwrap_err();
        assert_eq!(
            messages(err),
            vec![("slug".to_string(), SLUG_LENGTH_MSG.to_string())]
        );

        let err = manager
            .update_slug(&owner.id, "acme", "abcdefghijklmnopq")
            .await
            .unwrap_err();
        assert_eq!(
            messages(err),
            vec![("slug".to_string(), SLUG_LENGTH_MSG.to_string())]
        );
    }

    #[tokio::test]
    async fn removed_member_cannot_update() {
        let (manager, _) = setup().await;
        let db = manager.database();
        let workspace_owner = db.create_user("second@example.com", None).await.unwrap();
        let workspace = db
            .create_workspace(&workspace_owner.id, "Team", "team")
            .await
            .unwrap();
        let member = db.create_user("member@example.com", None).await.unwrap();
        let row = db.add_member(&workspace.id, &member.id, &member.email).await.unwrap();

        assert!(manager.update_name(&member.id, "team", "Ours").await.is_ok());

        db.remove_member(&row.id).await.unwrap();
        let err = manager.update_name(&member.id, "team", "Gone").await.unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound));
    }
}
