//! Demo data for local development.

use atrium_core::{Database, Session, WorkspaceError};
use chrono::Duration;
use tracing::info;

pub const DEMO_EMAIL: &str = "demo@atrium.local";
pub const DEMO_SLUG: &str = "demo";

/// Create a demo user owning a "Demo" workspace and a 30 day session for it.
///
/// Fails if the demo slug is already taken, so run it against a fresh database.
pub async fn seed_demo(database: &Database) -> Result<Session, WorkspaceError> {
    let user = database.create_user(DEMO_EMAIL, Some("Demo User")).await?;
    let workspace = database.create_workspace(&user.id, "Demo", DEMO_SLUG).await?;
    let session = database.create_session(&user.id, Duration::days(30)).await?;

    info!(
        "Seeded workspace {} ({}) for {DEMO_EMAIL}",
        workspace.slug, workspace.workspace_code
    );
    Ok(session)
}
