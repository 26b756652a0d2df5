//! Card layout family
//!
//! `Card` is a bordered container. `CardBody`, `CardEmpty` and `CardFooter`
//! are the regions placed inside it; they are independent components exported
//! together so call sites read as one unit:
//!
//! ```ignore
//! Card {
//!     CardBody { title: Some("Workspace Name".to_string()), input { .. } }
//!     CardFooter {
//!         small { "Please use 16 characters at maximum" }
//!         Button { .. }
//!     }
//! }
//! ```
//!
//! All four are stateless. Missing props fall back to placeholder rendering.

use dioxus::prelude::*;

const CARD_CLASS: &str = "flex flex-col justify-between border border-gray-700 rounded-lg";
const DANGER_CARD_CLASS: &str = "flex flex-col justify-between border-2 border-red-600 rounded-lg";

/// Container class for a card. Danger cards get a thicker red border.
pub fn card_class(danger: bool) -> &'static str {
    if danger {
        DANGER_CARD_CLASS
    } else {
        CARD_CLASS
    }
}

/// What goes in the heading slot of a [`CardBody`].
///
/// A missing or empty title renders a skeleton bar in the same place, so a
/// body without a title doubles as its own loading state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardHeading<'a> {
    Title(&'a str),
    Placeholder,
}

impl<'a> CardHeading<'a> {
    pub fn from_title(title: Option<&'a str>) -> Self {
        match title {
            Some(title) if !title.is_empty() => CardHeading::Title(title),
            _ => CardHeading::Placeholder,
        }
    }
}

/// Bordered card container.
#[component]
pub fn Card(#[props(default)] danger: bool, children: Element) -> Element {
    rsx! {
        div { class: card_class(danger), {children} }
    }
}

/// Main card region: heading (or skeleton), optional subtitle, then content.
#[component]
pub fn CardBody(
    #[props(default)] title: Option<String>,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    let heading = CardHeading::from_title(title.as_deref());
    let subtitle = subtitle.filter(|s| !s.is_empty());

    rsx! {
        div { class: "flex flex-col p-5 space-y-3",
            match heading {
                CardHeading::Title(title) => rsx! {
                    h2 { class: "text-2xl font-bold text-white", "{title}" }
                },
                CardHeading::Placeholder => rsx! {
                    div {
                        class: "w-full h-8 bg-gray-700 rounded animate-pulse",
                        aria_busy: "true",
                    }
                },
            }
            if let Some(subtitle) = subtitle {
                h3 { class: "text-gray-400", "{subtitle}" }
            }
            div { class: "flex flex-col", {children} }
        }
    }
}

/// Dashed placeholder region for "nothing here yet" messages.
#[component]
pub fn CardEmpty(children: Element) -> Element {
    rsx! {
        div {
            div { class: "flex items-center justify-center p-5 bg-gray-800/50 border-4 border-dashed border-gray-700 rounded",
                p { class: "text-gray-400", {children} }
            }
        }
    }
}

/// Footer row: hint text at the start, an action at the end.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "flex flex-row items-center justify-between px-5 py-3 bg-gray-800/50 border-t border-gray-700 text-gray-400",
            {children}
        }
    }
}
