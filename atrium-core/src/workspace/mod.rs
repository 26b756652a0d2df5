mod manager;

pub use manager::{SharedWorkspaceManager, WorkspaceError, WorkspaceManager};
