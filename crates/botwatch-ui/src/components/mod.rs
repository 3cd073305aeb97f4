//! Shared, prop-driven UI components.

pub(crate) mod atoms;
pub(crate) mod locale_menu;
pub(crate) mod shell;
