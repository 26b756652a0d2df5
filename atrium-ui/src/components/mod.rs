//! Shared UI components

pub mod button;
pub mod card;
pub mod icons;
pub mod settings;
pub mod text_input;
pub mod toast;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use card::{Card, CardBody, CardEmpty, CardFooter, CardHeading};
pub use icons::{CopyIcon, LoaderIcon, XIcon};
pub use settings::{
    save_is_loading, slug_counter_class, slug_counter_label, GeneralSettingsSkeleton,
    GeneralSettingsView, PageContent, PAGE_SUBTITLE, PAGE_TITLE,
};
pub use text_input::TextInput;
pub use toast::{ToastStack, TOAST_TIMEOUT_MS};
