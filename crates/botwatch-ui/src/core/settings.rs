//! Dashboard tunables: request windows, limits, display and timer settings.

use botwatch_api_models::Period;

/// Static configuration of the dashboard client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Rows shown in a collapsed list.
    pub display_limit: usize,
    /// Default active-users window in minutes.
    pub active_minutes: u32,
    /// Selectable active-users windows in minutes.
    pub active_minute_choices: &'static [u32],
    /// Channel-events window in hours.
    pub channel_hours: u32,
    /// Default ranking period for period-parametrised cards.
    pub default_period: Period,
    /// Default power-user threshold: URLs per day.
    pub power_min_urls: u32,
    /// Default power-user threshold: consecutive days.
    pub power_days: u32,
    /// Search box debounce.
    pub search_debounce_ms: u32,
    /// Power-user threshold debounce.
    pub power_debounce_ms: u32,
    /// Periodic refresh of the primary cards.
    pub refresh_interval_ms: u32,
    /// Transient "saved" feedback on config rows.
    pub saved_feedback_ms: u32,
    /// Per-endpoint row limits.
    pub limits: EndpointLimits,
}

/// Row limits sent with each read request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointLimits {
    /// Active users.
    pub active_users: u32,
    /// Top downloaders.
    pub top_downloaders: u32,
    /// Top countries.
    pub countries: u32,
    /// Top domains.
    pub domains: u32,
    /// NSFW users.
    pub nsfw_users: u32,
    /// NSFW domains.
    pub nsfw_domains: u32,
    /// Playlist users.
    pub playlist_users: u32,
    /// Power users.
    pub power_users: u32,
    /// Blocked users.
    pub blocked_users: u32,
    /// Channel events.
    pub channel_events: u32,
    /// Suspicious users.
    pub suspicious_users: u32,
    /// History user index sources (each).
    pub history_index_source: u32,
    /// Rows shown by the history user search.
    pub history_index_rows: usize,
    /// Entries fetched per user history.
    pub user_history: u32,
}

impl Default for EndpointLimits {
    fn default() -> Self {
        Self {
            active_users: 100,
            top_downloaders: 100,
            countries: 50,
            domains: 50,
            nsfw_users: 100,
            nsfw_domains: 50,
            playlist_users: 100,
            power_users: 50,
            blocked_users: 200,
            channel_events: 200,
            suspicious_users: 50,
            history_index_source: 500,
            history_index_rows: 50,
            user_history: 1000,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            display_limit: 10,
            active_minutes: 15,
            active_minute_choices: &[5, 15, 30, 60],
            channel_hours: 48,
            default_period: Period::Today,
            power_min_urls: 10,
            power_days: 7,
            search_debounce_ms: 250,
            power_debounce_ms: 500,
            refresh_interval_ms: 60_000,
            saved_feedback_ms: 2_000,
            limits: EndpointLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_contract() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.display_limit, 10);
        assert_eq!(settings.active_minutes, 15);
        assert!(settings.active_minute_choices.contains(&settings.active_minutes));
        assert_eq!(settings.channel_hours, 48);
        assert_eq!(settings.limits.blocked_users, 200);
        assert!(settings.power_debounce_ms > settings.search_debounce_ms);
    }
}
