//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The
//! web app creates them; components in this crate only read props.

pub mod app;
pub mod general_settings;
pub mod toast;

pub use app::*;
pub use general_settings::*;
pub use toast::*;
