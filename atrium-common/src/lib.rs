//! atrium-common - types shared by the server, the store and the UI
//!
//! Everything here is pure: no I/O, no async, no framework types.

pub mod api;
pub mod routes;
pub mod validation;
pub mod workspace;

pub use api::{
    FieldError, FieldErrors, NameUpdated, SettingsProps, SlugUpdated, UpdateNameRequest,
    UpdateResponse, UpdateSlugRequest,
};
pub use validation::{
    is_alphanumeric_ignoring_hyphens, is_slug, is_valid_name, is_valid_slug, slug_with_counter,
    slugify, MAX_FIELD_LEN,
};
pub use workspace::{SettingsField, WorkspaceSummary};
