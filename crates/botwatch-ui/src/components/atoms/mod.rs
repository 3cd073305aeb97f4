//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod period_select;
pub(crate) mod search_input;

pub(crate) use empty_state::EmptyState;
pub(crate) use period_select::PeriodSelect;
pub(crate) use search_input::SearchInput;
