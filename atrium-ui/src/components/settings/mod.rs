//! Workspace settings views

mod general;
mod page_content;

pub use general::{
    save_is_loading, slug_counter_class, slug_counter_label, GeneralSettingsSkeleton,
    GeneralSettingsView, PAGE_SUBTITLE, PAGE_TITLE,
};
pub use page_content::PageContent;
