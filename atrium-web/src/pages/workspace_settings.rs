//! General settings controller - owns the edit store, delegates UI to GeneralSettingsView

use crate::api;
use crate::Route;
use atrium_common::{SettingsField, WorkspaceSummary};
use atrium_ui::stores::{AppState, AppStateStoreExt, GeneralSettingsState, SubmitResolution};
use atrium_ui::GeneralSettingsView;
use dioxus::prelude::*;
use tracing::{info, warn};

const COPIED_MSG: &str = "Copied to clipboard!";

/// Edit workflow for one workspace.
///
/// This is the only place that writes `AppState::current_workspace`: once
/// the workspace is loaded and again after every successful save.
#[component]
pub fn WorkspaceSettings(workspace: ReadSignal<WorkspaceSummary>) -> Element {
    let mut app: Store<AppState> = use_context();
    let mut state = use_store(move || GeneralSettingsState::seeded(workspace()));

    use_effect(move || {
        let workspace = workspace();
        state.write().reseed(workspace.clone());
        app.write().set_current_workspace(Some(workspace));
    });

    let mut submit = move |field: SettingsField| {
        let Some(request) = state.write().begin_submit(field) else {
            return;
        };
        spawn(async move {
            let value = request.value.clone();
            let resolution = match request.field {
                SettingsField::Name => {
                    let result = api::update_name(&request.path_slug, value).await;
                    state.write().finish_name(&request, result)
                }
                SettingsField::Slug => {
                    let result = api::update_slug(&request.path_slug, value).await;
                    state.write().finish_slug(&request, result)
                }
            };
            apply(app, state, resolution);
        });
    };

    let copy_code = move |_| {
        let code = state.read().workspace.workspace_code.clone();
        spawn(async move {
            let literal = serde_json::Value::String(code).to_string();
            let js = format!("await navigator.clipboard.writeText({literal}); return true;");
            match document::eval(&js).await {
                Ok(_) => {
                    app.toasts().write().push_success(COPIED_MSG);
                }
                Err(e) => {
                    warn!("Clipboard write failed: {e:?}");
                    app.toasts()
                        .write()
                        .push_error("Could not copy to clipboard");
                }
            }
        });
    };

    let current = state.read();
    let in_flight = current.in_flight;
    let can_copy_code = current.can_copy_code();
    let can_save_name = current.can_save(SettingsField::Name);
    let can_save_slug = current.can_save(SettingsField::Slug);
    let name = current.name.clone();
    let slug = current.slug.clone();
    let workspace_code = current.workspace.workspace_code.clone();
    drop(current);

    rsx! {
        GeneralSettingsView {
            name,
            slug,
            workspace_code,
            in_flight,
            can_save_name,
            can_save_slug,
            can_copy_code,
            on_name_input: move |value: String| state.write().set_name(value),
            on_slug_input: move |value: String| state.write().set_slug(value),
            on_save_name: move |_| submit(SettingsField::Name),
            on_save_slug: move |_| submit(SettingsField::Slug),
            on_copy_code: copy_code,
        }
    }
}

/// Publish the confirmed workspace, surface notifications and follow a
/// redirect after a submit resolves.
fn apply(
    mut app: Store<AppState>,
    state: Store<GeneralSettingsState>,
    resolution: SubmitResolution,
) {
    let confirmed = state.read().workspace.clone();
    app.write().set_current_workspace(Some(confirmed));
    for notification in resolution.notifications {
        app.toasts().write().push(notification);
    }
    if let Some(path) = resolution.redirect {
        match path.parse::<Route>() {
            Ok(route) => {
                info!("Workspace moved, replacing location with {path}");
                navigator().replace(route);
            }
            Err(_) => warn!("Not a settings location: {path}"),
        }
    }
}
