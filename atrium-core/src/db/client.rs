use super::models::{DbMember, DbUser, DbWorkspace, Session};
use chrono::{Duration, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

const WORKSPACE_COLUMNS: &str =
    "w.id, w.workspace_code, w.name, w.slug, w.creator_id, w.created_at, w.updated_at, w.deleted_at";

/// SQLite-backed store for users, workspaces, members and sessions.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database file at `path` and run migrations.
    pub async fn open(path: &Path) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!("Opened database at {}", path.display());
        Self::migrate(pool).await
    }

    /// A private in-memory database. The pool holds a single connection that
    /// never expires, since every SQLite memory connection is its own database.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self, DatabaseError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    // ---------------------------------------------------------------------
    // Users and sessions
    // ---------------------------------------------------------------------

    pub async fn create_user(&self, email: &str, name: Option<&str>) -> Result<DbUser, sqlx::Error> {
        let user = DbUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.map(str::to_string),
            created_at: Utc::now(),
        };
        sqlx::query("INSERT INTO users (id, email, name, created_at) VALUES (?, ?, ?, ?)")
            .bind(&user.id)
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.created_at)
            .execute(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn create_session(&self, user_id: &str, ttl: Duration) -> Result<Session, sqlx::Error> {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            expires_at: now + ttl,
        };
        sqlx::query(
            "INSERT INTO sessions (token, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&session.token)
        .bind(&session.user_id)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;
        Ok(session)
    }

    /// Look up a session by token. Expired sessions are treated as absent.
    pub async fn find_session(&self, token: &str) -> Result<Option<Session>, sqlx::Error> {
        let session: Option<Session> = sqlx::query_as(
            "SELECT token, user_id, created_at, expires_at FROM sessions WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session.filter(|s| {
            let expired = s.is_expired_at(Utc::now());
            if expired {
                debug!("Session for user {} has expired", s.user_id);
            }
            !expired
        }))
    }

    // ---------------------------------------------------------------------
    // Workspaces
    // ---------------------------------------------------------------------

    pub async fn create_workspace(
        &self,
        creator_id: &str,
        name: &str,
        slug: &str,
    ) -> Result<DbWorkspace, sqlx::Error> {
        let now = Utc::now();
        let workspace = DbWorkspace {
            id: Uuid::new_v4().to_string(),
            workspace_code: Uuid::new_v4().to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            creator_id: creator_id.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        sqlx::query(
            "INSERT INTO workspaces (id, workspace_code, name, slug, creator_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&workspace.id)
        .bind(&workspace.workspace_code)
        .bind(&workspace.name)
        .bind(&workspace.slug)
        .bind(&workspace.creator_id)
        .bind(workspace.created_at)
        .bind(workspace.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(workspace)
    }

    pub async fn soft_delete_workspace(&self, workspace_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE workspaces SET deleted_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(workspace_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn add_member(
        &self,
        workspace_id: &str,
        user_id: &str,
        email: &str,
    ) -> Result<DbMember, sqlx::Error> {
        let member = DbMember {
            id: Uuid::new_v4().to_string(),
            workspace_id: workspace_id.to_string(),
            user_id: Some(user_id.to_string()),
            email: email.to_string(),
            created_at: Utc::now(),
            deleted_at: None,
        };
        sqlx::query(
            "INSERT INTO members (id, workspace_id, user_id, email, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&member.id)
        .bind(&member.workspace_id)
        .bind(&member.user_id)
        .bind(&member.email)
        .bind(member.created_at)
        .execute(&self.pool)
        .await?;
        Ok(member)
    }

    pub async fn remove_member(&self, member_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE members SET deleted_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(member_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Find a workspace by exact slug that `user_id` may see.
    ///
    /// Visible means: not soft-deleted, and the user either created it or is
    /// an active (not removed) member of it.
    pub async fn find_visible_workspace(
        &self,
        user_id: &str,
        slug: &str,
    ) -> Result<Option<DbWorkspace>, sqlx::Error> {
        let sql = format!(
            "SELECT {WORKSPACE_COLUMNS} FROM workspaces w \
             WHERE w.deleted_at IS NULL \
               AND w.slug = ? \
               AND (w.creator_id = ? OR EXISTS ( \
                     SELECT 1 FROM members m \
                     WHERE m.workspace_id = w.id AND m.user_id = ? AND m.deleted_at IS NULL)) \
             LIMIT 1"
        );
        sqlx::query_as(&sql)
            .bind(slug)
            .bind(user_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Whether any other workspace row (deleted ones included) uses `slug`.
    pub async fn slug_taken(&self, slug: &str, except_id: &str) -> Result<bool, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM workspaces WHERE slug = ? AND id != ?")
                .bind(slug)
                .bind(except_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    pub async fn update_workspace_name(&self, workspace_id: &str, name: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE workspaces SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(Utc::now())
            .bind(workspace_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn update_workspace_slug(&self, workspace_id: &str, slug: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE workspaces SET slug = ?, updated_at = ? WHERE id = ?")
            .bind(slug)
            .bind(Utc::now())
            .bind(workspace_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn seeded() -> (Database, DbUser, DbWorkspace) {
        let db = Database::open_in_memory().await.unwrap();
        let owner = db.create_user("owner@example.com", Some("Owner")).await.unwrap();
        let workspace = db.create_workspace(&owner.id, "Acme", "acme").await.unwrap();
        (db, owner, workspace)
    }

    #[tokio::test]
    async fn creator_sees_workspace() {
        let (db, owner, workspace) = seeded().await;
        let found = db.find_visible_workspace(&owner.id, "acme").await.unwrap();
        assert_eq!(found.map(|w| w.id), Some(workspace.id));
    }

    #[tokio::test]
    async fn slug_must_match_exactly() {
        let (db, owner, _) = seeded().await;
        assert!(db.find_visible_workspace(&owner.id, "ACME").await.unwrap().is_none());
        assert!(db.find_visible_workspace(&owner.id, "acm").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn active_member_sees_workspace() {
        let (db, _, workspace) = seeded().await;
        let member = db.create_user("member@example.com", None).await.unwrap();
        db.add_member(&workspace.id, &member.id, &member.email).await.unwrap();

        let found = db.find_visible_workspace(&member.id, "acme").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn removed_member_does_not_see_workspace() {
        let (db, _, workspace) = seeded().await;
        let member = db.create_user("member@example.com", None).await.unwrap();
        let row = db.add_member(&workspace.id, &member.id, &member.email).await.unwrap();
        db.remove_member(&row.id).await.unwrap();

        let found = db.find_visible_workspace(&member.id, "acme").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn stranger_does_not_see_workspace() {
        let (db, _, _) = seeded().await;
        let stranger = db.create_user("stranger@example.com", None).await.unwrap();
        let found = db.find_visible_workspace(&stranger.id, "acme").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn soft_deleted_workspace_is_hidden_from_owner() {
        let (db, owner, workspace) = seeded().await;
        db.soft_delete_workspace(&workspace.id).await.unwrap();
        let found = db.find_visible_workspace(&owner.id, "acme").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn deleted_workspace_still_holds_its_slug() {
        let (db, owner, workspace) = seeded().await;
        db.soft_delete_workspace(&workspace.id).await.unwrap();
        let other = db.create_workspace(&owner.id, "Other", "other").await.unwrap();
        assert!(db.slug_taken("acme", &other.id).await.unwrap());
        assert!(!db.slug_taken("other", &other.id).await.unwrap());
    }

    #[tokio::test]
    async fn expired_session_is_ignored() {
        let (db, owner, _) = seeded().await;
        let live = db.create_session(&owner.id, Duration::hours(1)).await.unwrap();
        let dead = db.create_session(&owner.id, Duration::seconds(-1)).await.unwrap();

        assert_eq!(db.find_session(&live.token).await.unwrap().map(|s| s.user_id), Some(owner.id));
        assert!(db.find_session(&dead.token).await.unwrap().is_none());
        assert!(db.find_session("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_database_persists_between_opens() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("atrium.db");

        let db = Database::open(&path).await.unwrap();
        let owner = db.create_user("owner@example.com", None).await.unwrap();
        db.create_workspace(&owner.id, "Acme", "acme").await.unwrap();
        drop(db);

        let reopened = Database::open(&path).await.unwrap();
        let found = reopened.find_visible_workspace(&owner.id, "acme").await.unwrap();
        assert_eq!(found.map(|w| w.name), Some("Acme".to_string()));
    }
}
