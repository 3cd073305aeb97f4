//! Feature slices: each owns its state, pure logic and (on wasm) its views.

pub mod cards;
pub mod config;
pub mod domain_lists;
pub mod history;
pub mod lists;
pub mod modal;
pub mod system;
