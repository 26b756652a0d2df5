use dioxus::prelude::*;

/// Settings page heading with a divider and a stacked content column.
#[component]
pub fn PageContent(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "max-w-2xl mx-auto py-10 px-4 space-y-6",
            div { class: "space-y-1",
                h1 { class: "text-3xl font-bold text-white", "{title}" }
                p { class: "text-gray-400", "{subtitle}" }
            }
            hr { class: "border-gray-700" }
            div { class: "flex flex-col space-y-6", {children} }
        }
    }
}
