//! Shared modal overlay: state, dismissal and detail row builders.
//!
//! # Design
//! - One modal instance; opening replaces the body instead of stacking.
//! - Every dismissal path converges on `ModalState::close`.

pub mod details;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
