//! Per-list view state and client-side search.
//!
//! # Design
//! - List state lives in a keyed registry, never on DOM nodes.
//! - Filtering derives a view; authoritative items are only replaced by a reload.

pub mod rows;
pub mod search;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
