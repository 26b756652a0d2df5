//! General settings: name, slug and workspace identifier cards

use super::PageContent;
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardBody, CardFooter, ChromelessButton, CopyIcon,
    TextInput,
};
use atrium_common::{SettingsField, MAX_FIELD_LEN};
use dioxus::prelude::*;

pub const PAGE_TITLE: &str = "Workspace Information";
pub const PAGE_SUBTITLE: &str = "Manage your workspace details and information";
const NAME_HINT: &str = "Please use 16 characters at maximum";
const SLUG_HINT: &str = "Please use 16 characters at maximum. Hyphenated alphanumeric characters only.";

/// Character counter shown under the slug input.
pub fn slug_counter_label(slug: &str) -> String {
    format!("{} / {MAX_FIELD_LEN}", slug.chars().count())
}

/// Counter turns red once the slug is over the limit.
pub fn slug_counter_class(slug: &str) -> &'static str {
    if slug.chars().count() > MAX_FIELD_LEN {
        "text-sm text-red-500"
    } else {
        "text-sm text-gray-400"
    }
}

/// Only the save whose request is in flight shows a spinner.
pub fn save_is_loading(field: SettingsField, in_flight: Option<SettingsField>) -> bool {
    in_flight == Some(field)
}

/// General settings page body
#[component]
pub fn GeneralSettingsView(
    name: String,
    slug: String,
    workspace_code: String,
    /// Field whose save is in flight. Inputs are disabled while it is `Some`.
    in_flight: Option<SettingsField>,
    can_save_name: bool,
    can_save_slug: bool,
    can_copy_code: bool,
    on_name_input: EventHandler<String>,
    on_slug_input: EventHandler<String>,
    on_save_name: EventHandler<()>,
    on_save_slug: EventHandler<()>,
    on_copy_code: EventHandler<()>,
) -> Element {
    let counter_label = slug_counter_label(&slug);
    let counter_class = slug_counter_class(&slug);
    let is_submitting = in_flight.is_some();

    rsx! {
        PageContent {
            title: PAGE_TITLE.to_string(),
            subtitle: PAGE_SUBTITLE.to_string(),
            Card {
                CardBody {
                    title: Some("Workspace Name".to_string()),
                    subtitle: Some("Used to identify your Workspace on the Dashboard".to_string()),
                    TextInput {
                        value: name,
                        on_input: move |v| on_name_input.call(v),
                        disabled: is_submitting,
                        id: Some("workspace-name".to_string()),
                    }
                }
                CardFooter {
                    small { "{NAME_HINT}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        disabled: !can_save_name,
                        loading: save_is_loading(SettingsField::Name, in_flight),
                        onclick: move |_| on_save_name.call(()),
                        "Save"
                    }
                }
            }
            Card {
                CardBody {
                    title: Some("Workspace Slug".to_string()),
                    subtitle: Some("Used to identify your Workspace on the Dashboard".to_string()),
                    TextInput {
                        value: slug,
                        on_input: move |v| on_slug_input.call(v),
                        disabled: is_submitting,
                        id: Some("workspace-slug".to_string()),
                    }
                    p { class: "mt-2 {counter_class}", "{counter_label}" }
                }
                CardFooter {
                    small { "{SLUG_HINT}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        disabled: !can_save_slug,
                        loading: save_is_loading(SettingsField::Slug, in_flight),
                        onclick: move |_| on_save_slug.call(()),
                        "Save"
                    }
                }
            }
            Card {
                CardBody {
                    title: Some("Workspace ID".to_string()),
                    subtitle: Some("Used when interacting with APIs".to_string()),
                    div { class: "flex items-center space-x-3",
                        TextInput {
                            value: workspace_code,
                            readonly: true,
                            monospace: true,
                            id: Some("workspace-code".to_string()),
                            aria_label: Some("Workspace ID".to_string()),
                        }
                        ChromelessButton {
                            class: Some("text-gray-400 hover:text-white disabled:opacity-50".to_string()),
                            title: Some("Copy to clipboard".to_string()),
                            aria_label: Some("Copy workspace ID".to_string()),
                            disabled: !can_copy_code,
                            onclick: move |_| on_copy_code.call(()),
                            CopyIcon { class: "w-5 h-5" }
                        }
                    }
                }
            }
        }
    }
}

/// Loading state for the general settings page: the same three cards with
/// skeleton headings and no inputs.
#[component]
pub fn GeneralSettingsSkeleton() -> Element {
    rsx! {
        PageContent {
            title: PAGE_TITLE.to_string(),
            subtitle: PAGE_SUBTITLE.to_string(),
            for _ in 0..3 {
                Card {
                    CardBody {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_counts_characters() {
        assert_eq!(slug_counter_label(""), "0 / 16");
        assert_eq!(slug_counter_label("acme"), "4 / 16");
        assert_eq!(slug_counter_label("ééé"), "3 / 16");
    }

    #[test]
    fn counter_turns_red_over_limit() {
        assert!(!slug_counter_class("abcdefghijklmnop").contains("red"));
        assert!(slug_counter_class("abcdefghijklmnopq").contains("red"));
    }

    #[test]
    fn only_the_submitted_save_spins() {
        let in_flight = Some(SettingsField::Slug);
        assert!(save_is_loading(SettingsField::Slug, in_flight));
        assert!(!save_is_loading(SettingsField::Name, in_flight));
        assert!(!save_is_loading(SettingsField::Name, None));
        assert!(!save_is_loading(SettingsField::Slug, None));
    }
}
