pub mod api;
pub mod pages;

use atrium_ui::stores::{AppState, AppStateStoreExt, ToastStateStoreExt};
use atrium_ui::ToastStack;
use dioxus::prelude::*;
use pages::{GeneralSettings, Home};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/account/:workspace_slug/settings/general")]
    GeneralSettings { workspace_slug: String },
}

#[component]
pub fn App() -> Element {
    let app = use_store(AppState::default);
    use_context_provider(|| app);

    let toasts = app.toasts().items().read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
        ToastStack {
            toasts,
            on_dismiss: move |id| app.toasts().write().dismiss(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_common::routes::general_settings_path;

    #[test]
    fn settings_route_matches_shared_path() {
        let route = Route::GeneralSettings {
            workspace_slug: "acme-1".to_string(),
        };
        assert_eq!(route.to_string(), general_settings_path("acme-1"));
    }

    #[test]
    fn settings_path_parses_back_into_route() {
        let route: Route = general_settings_path("new-slug").parse().unwrap();
        assert_eq!(
            route,
            Route::GeneralSettings {
                workspace_slug: "new-slug".to_string()
            }
        );
    }
}
