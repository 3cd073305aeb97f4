//! Bot configuration editor.
//!
//! # Design
//! - Sections are derived from the `config-settings` snapshot as plain descriptors.
//! - Each row saves on its own; coercion runs before any request is issued.
//! - Nothing is mutated locally until the server accepts the write.

pub mod form;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
