//! Dashboard cards: registry, request parameters and the refresh orchestrator.
//!
//! # Design
//! - Every card loads independently; one failure never blocks the others.
//! - Each card slot carries a request generation so stale results are dropped.
//! - Locale switches route through a single hook that decides what to refetch.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod source;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
