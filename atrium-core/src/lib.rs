//! atrium-core - persistence and business rules for workspace settings
//!
//! Owns the SQLite store, session lookup, the visibility rule for
//! workspaces, and the name/slug update operations the HTTP layer exposes.

pub mod db;
pub mod workspace;

pub use db::{Database, DatabaseError, Session};
pub use workspace::{WorkspaceError, WorkspaceManager};
