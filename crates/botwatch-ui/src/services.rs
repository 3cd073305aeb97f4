//! Browser-side service clients.

pub(crate) mod api;

/// Current wall clock in unix seconds.
pub(crate) fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}
