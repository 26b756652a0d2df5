//! Buttons used by the settings cards and page shell

use dioxus::prelude::*;

/// Unstyled button that keeps the disabled/loading wiring in one place.
/// Used by [`Button`] and by icon-only controls (copy, dismiss).
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background, for the card's main action
    Primary,
    /// Gray background, for retry and other secondary actions
    Secondary,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

pub(crate) fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let base = match size {
        ButtonSize::Small => "inline-flex items-center gap-2 text-sm rounded-lg transition-colors",
        ButtonSize::Medium => "inline-flex items-center gap-2 rounded-lg transition-colors",
    };
    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5",
        ButtonSize::Medium => "px-4 py-2",
    };
    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };
    format!("{base} {padding} {variant_class}")
}

/// Styled button. `loading` disables it and shows a spinner before the label.
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        ChromelessButton {
            disabled,
            loading,
            class: Some(button_class(variant, size)),
            onclick,
            if loading {
                crate::components::LoaderIcon { class: "w-4 h-4 animate-spin" }
            }
            {children}
        }
    }
}
