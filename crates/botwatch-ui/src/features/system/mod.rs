//! System tab: host metrics, package versions and administrative actions.
//!
//! # Design
//! - Destructive actions are confirmed before any request is built.
//! - Result messages prefer the server's text and fall back to localized copy.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod metrics;
#[cfg(target_arch = "wasm32")]
pub mod view;
