//! Lists tab: list file statistics and the domain list editor.
//!
//! # Design
//! - Edits stay local until the operator saves a whole list.
//! - Search only hides rows; it never changes what is saved.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
