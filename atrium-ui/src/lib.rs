//! atrium-ui - Shared UI components and stores for atrium
//!
//! Contains the Card layout family, form controls, toasts, the workspace
//! settings views, and the stores that drive them. Components here are pure
//! and props-based; the web app owns the stores and wires up I/O.

pub mod components;
pub mod stores;
pub mod utils;

pub use components::*;
