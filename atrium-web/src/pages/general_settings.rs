use super::WorkspaceSettings;
use crate::api;
use atrium_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardBody, CardEmpty, CardFooter,
    GeneralSettingsSkeleton, PageContent, PAGE_SUBTITLE, PAGE_TITLE,
};
use dioxus::prelude::*;

/// Page shell for `/account/:workspace_slug/settings/general`.
///
/// Loads the settings props for the slug in the URL, then hands the
/// workspace to [`WorkspaceSettings`]. A `null` workspace means the user has
/// no session or cannot see that workspace.
#[component]
pub fn GeneralSettings(workspace_slug: ReadSignal<String>) -> Element {
    let mut props = use_resource(move || {
        let slug = workspace_slug();
        async move { api::fetch_general_settings(&slug).await }
    });
    let read = props.read();

    let result = match &*read {
        Some(Ok(props)) => Ok(props.workspace.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => return rsx! { GeneralSettingsSkeleton {} },
    };
    drop(read);

    match result {
        Ok(Some(workspace)) => rsx! {
            WorkspaceSettings { workspace }
        },
        Ok(None) => rsx! {
            PageContent {
                title: PAGE_TITLE.to_string(),
                subtitle: PAGE_SUBTITLE.to_string(),
                Card { danger: true,
                    CardBody { title: Some("Workspace not found".to_string()),
                        CardEmpty { "This workspace does not exist or you do not have access to it." }
                    }
                }
            }
        },
        Err(e) => rsx! {
            PageContent {
                title: PAGE_TITLE.to_string(),
                subtitle: PAGE_SUBTITLE.to_string(),
                Card { danger: true,
                    CardBody { title: Some("Could not load workspace".to_string()),
                        CardEmpty { "{e}" }
                    }
                    CardFooter {
                        small { "Check your connection and try again" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Small,
                            onclick: move |_| props.restart(),
                            "Retry"
                        }
                    }
                }
            }
        },
    }
}
