use crate::Route;
use atrium_ui::stores::{AppState, AppStateStoreExt};
use atrium_ui::{Card, CardBody, CardEmpty, PageContent};
use dioxus::prelude::*;

/// Landing page. Links back to the last workspace whose settings were open.
#[component]
pub fn Home() -> Element {
    let app: Store<AppState> = use_context();
    let current = app.current_workspace().read().clone();

    rsx! {
        PageContent {
            title: "Atrium".to_string(),
            subtitle: "Workspace administration".to_string(),
            Card {
                CardBody {
                    title: Some("Workspaces".to_string()),
                    subtitle: Some("Open a workspace to manage its settings".to_string()),
                    match current {
                        Some(workspace) => rsx! {
                            Link {
                                class: "text-indigo-400 hover:text-indigo-300",
                                to: Route::GeneralSettings {
                                    workspace_slug: workspace.slug.clone(),
                                },
                                "{workspace.name} settings"
                            }
                        },
                        None => rsx! {
                            CardEmpty { "No workspace selected" }
                        },
                    }
                }
            }
        }
    }
}
