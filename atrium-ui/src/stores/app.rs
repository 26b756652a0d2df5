//! Top-level application state store
//!
//! Created once by the web app root and provided through context. Components
//! reach sub-states by lensing: `app.toasts().items()`.

use super::toast::ToastState;
use atrium_common::WorkspaceSummary;
use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Workspace the user is currently looking at, as last confirmed by the server
    pub current_workspace: Option<WorkspaceSummary>,
    pub toasts: ToastState,
}

impl AppState {
    /// Publish the confirmed workspace. Writes only when it changed, so
    /// subscribers are not woken by a reload that returned the same data.
    pub fn set_current_workspace(&mut self, workspace: Option<WorkspaceSummary>) -> bool {
        if self.current_workspace == workspace {
            return false;
        }
        self.current_workspace = workspace;
        true
    }
}
