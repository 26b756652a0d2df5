//! Toast notifications rendered from [`ToastState`](crate::stores::ToastState)

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use crate::stores::{Toast, ToastKind};
use crate::utils::sleep_ms;
use dioxus::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_TIMEOUT_MS: u64 = 4000;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-600 text-white px-6 py-4 rounded-lg shadow-lg max-w-md",
        ToastKind::Error => "bg-red-600 text-white px-6 py-4 rounded-lg shadow-lg max-w-md",
    }
}

/// Bottom-right stack of toasts, oldest on top.
#[component]
pub fn ToastStack(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast, on_dismiss }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;

    use_future(move || async move {
        sleep_ms(TOAST_TIMEOUT_MS).await;
        on_dismiss.call(id);
    });

    let role = match toast.kind {
        ToastKind::Success => "status",
        ToastKind::Error => "alert",
    };

    rsx! {
        div { class: toast_class(toast.kind), role,
            div { class: "flex items-center justify-between gap-4",
                div { class: "flex-1",
                    span { "{toast.message}" }
                }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(id),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
