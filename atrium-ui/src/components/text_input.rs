//! Single-line input used by the settings cards

use dioxus::prelude::*;

const BASE_CLASS: &str = "w-full px-3 py-2 bg-gray-800/50 border border-gray-700 rounded-lg text-gray-300 focus:outline-none focus:ring-1 focus:ring-indigo-500/50";

pub(crate) fn text_input_class(disabled: bool, readonly: bool, monospace: bool) -> String {
    let mut class = BASE_CLASS.to_string();
    if disabled {
        class.push_str(" opacity-50 cursor-not-allowed");
    }
    if readonly {
        class.push_str(" cursor-text select-all");
    }
    if monospace {
        class.push_str(" font-mono text-sm");
    }
    class
}

/// Controlled text input. The caller owns `value`; edits arrive through
/// `on_input`. A `readonly` input shows a value that can be selected but
/// not edited, so it takes no handler.
#[component]
pub fn TextInput(
    value: String,
    #[props(default)] on_input: Option<EventHandler<String>>,
    #[props(default)] disabled: bool,
    #[props(default)] readonly: bool,
    #[props(default)] monospace: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
) -> Element {
    let class = text_input_class(disabled, readonly, monospace);

    rsx! {
        input {
            r#type: "text",
            class: "{class}",
            id: id.as_deref(),
            aria_label: aria_label.as_deref(),
            value: "{value}",
            disabled,
            readonly,
            oninput: move |e| {
                if let Some(handler) = on_input {
                    handler.call(e.value());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_reflects_flags() {
        let plain = text_input_class(false, false, false);
        assert!(!plain.contains("opacity-50"));
        assert!(!plain.contains("font-mono"));

        assert!(text_input_class(true, false, false).contains("cursor-not-allowed"));
        assert!(text_input_class(false, true, true).contains("select-all"));
        assert!(text_input_class(false, true, true).contains("font-mono"));
    }
}
