//! Per-user download history browser.
//!
//! # Design
//! - History is fetched once per open (`period=all`); period and text filters
//!   run client-side and never re-fetch.
//! - The user index is built from two ranked lists and searched locally.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
