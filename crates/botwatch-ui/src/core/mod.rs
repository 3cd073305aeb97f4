//! Core, DOM-free primitives and helpers for the dashboard.
pub mod debounce;
pub mod format;
pub mod logic;
pub mod net;
pub mod settings;
pub mod status;
pub mod store;
pub mod theme;
pub mod ui;
