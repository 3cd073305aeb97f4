//! Request paths, threshold inputs, locale-change policy and row shaping for cards.

use super::state::{CardId, CardQuery, PeriodGroup, PowerThresholds, PRIMARY_CARDS};
use crate::core::format::format_timestamp;
use crate::core::logic::{build_path, parse_positive};
use crate::core::settings::{DashboardSettings, EndpointLimits};
use crate::features::lists::search::SimpleRow;
use botwatch_api_models::{
    AgeStat, ChannelEvent, ChannelEventKind, CountryStat, DomainStat, GenderStat, Period,
};

/// Read endpoints behind `card`, in the order their payloads are merged.
#[must_use]
pub fn card_paths(card: CardId, query: &CardQuery, limits: &EndpointLimits) -> Vec<String> {
    let period = |group: PeriodGroup| query.period(group).as_str().to_string();
    let path = match card {
        CardId::ActiveUsers => build_path(
            "/api/active-users",
            &[
                ("limit", limits.active_users.to_string()),
                ("minutes", query.active_minutes.to_string()),
            ],
        ),
        CardId::TopDownloaders => build_path(
            "/api/top-downloaders",
            &[
                ("period", period(PeriodGroup::TopDownloaders)),
                ("limit", limits.top_downloaders.to_string()),
            ],
        ),
        CardId::Countries => build_path(
            "/api/top-countries",
            &[
                ("period", period(PeriodGroup::Demographics)),
                ("limit", limits.countries.to_string()),
            ],
        ),
        CardId::Gender => build_path(
            "/api/gender-stats",
            &[("period", period(PeriodGroup::Demographics))],
        ),
        CardId::Age => build_path(
            "/api/age-stats",
            &[("period", period(PeriodGroup::Demographics))],
        ),
        CardId::Domains => build_path(
            "/api/top-domains",
            &[
                ("period", period(PeriodGroup::Domains)),
                ("limit", limits.domains.to_string()),
            ],
        ),
        CardId::NsfwUsers => build_path(
            "/api/top-nsfw-users",
            &[("limit", limits.nsfw_users.to_string())],
        ),
        CardId::NsfwDomains => build_path(
            "/api/top-nsfw-domains",
            &[("limit", limits.nsfw_domains.to_string())],
        ),
        CardId::PlaylistUsers => build_path(
            "/api/top-playlist-users",
            &[("limit", limits.playlist_users.to_string())],
        ),
        CardId::PowerUsers => build_path(
            "/api/power-users",
            &[
                ("min_urls", query.power.min_urls.to_string()),
                ("days", query.power.days.to_string()),
                ("limit", limits.power_users.to_string()),
            ],
        ),
        CardId::BlockedUsers => build_path(
            "/api/blocked-users",
            &[("limit", limits.blocked_users.to_string())],
        ),
        CardId::ChannelEvents => build_path(
            "/api/channel-events",
            &[
                ("hours", query.channel_hours.to_string()),
                ("limit", limits.channel_events.to_string()),
            ],
        ),
        CardId::SuspiciousUsers => build_path(
            "/api/suspicious-users",
            &[
                ("period", period(PeriodGroup::Suspicious)),
                ("limit", limits.suspicious_users.to_string()),
            ],
        ),
        CardId::SystemMetrics => "/api/system-metrics".to_string(),
        CardId::PackageVersions => "/api/package-versions".to_string(),
        CardId::ConfigSettings => "/api/config-settings".to_string(),
        CardId::ListsStats => "/api/lists-stats".to_string(),
        CardId::DomainLists => "/api/domain-lists".to_string(),
        CardId::HistoryIndex => {
            let source_limit = limits.history_index_source.to_string();
            return vec![
                build_path(
                    "/api/top-downloaders",
                    &[
                        ("period", Period::All.as_str().to_string()),
                        ("limit", source_limit.clone()),
                    ],
                ),
                build_path(
                    "/api/suspicious-users",
                    &[
                        ("period", Period::All.as_str().to_string()),
                        ("limit", source_limit),
                    ],
                ),
            ];
        }
    };
    vec![path]
}

/// Raw text of the power-user threshold inputs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PowerFilterInput {
    /// "Min URLs per day" field.
    pub min_urls: String,
    /// "Days" field.
    pub days: String,
}

impl PowerFilterInput {
    /// Inputs pre-filled with `thresholds`.
    #[must_use]
    pub fn from_thresholds(thresholds: PowerThresholds) -> Self {
        Self {
            min_urls: thresholds.min_urls.to_string(),
            days: thresholds.days.to_string(),
        }
    }

    /// Parsed thresholds; each unparseable field falls back to `fallback`.
    #[must_use]
    pub fn thresholds(&self, fallback: PowerThresholds) -> PowerThresholds {
        PowerThresholds {
            min_urls: parse_positive(&self.min_urls).unwrap_or(fallback.min_urls),
            days: parse_positive(&self.days).unwrap_or(fallback.days),
        }
    }
}

/// Input events on the threshold fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerInputEvent {
    /// Field value changed.
    Edited,
    /// Enter pressed in a field.
    Submitted,
}

/// When the power-users card reloads after an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerReload {
    /// After the debounce window, if no further edit arrives.
    Debounced(u32),
    /// Immediately, cancelling any pending debounce.
    Now,
}

/// Reload plan for a threshold input event.
#[must_use]
pub const fn power_reload(event: PowerInputEvent, settings: &DashboardSettings) -> PowerReload {
    match event {
        PowerInputEvent::Edited => PowerReload::Debounced(settings.power_debounce_ms),
        PowerInputEvent::Submitted => PowerReload::Now,
    }
}

/// How a locale switch treats already-loaded data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LocaleChangePolicy {
    /// Re-render and reload every primary card.
    #[default]
    Refetch,
    /// Re-render from held data only.
    RerenderOnly,
}

/// Cards to reload after a locale switch. Rendering always re-runs regardless.
#[must_use]
pub const fn on_locale_changed(policy: LocaleChangePolicy) -> &'static [CardId] {
    match policy {
        LocaleChangePolicy::Refetch => &PRIMARY_CARDS,
        LocaleChangePolicy::RerenderOnly => &[],
    }
}

/// Country rows: flag marker, country code, user count.
#[must_use]
pub fn country_rows(stats: &[CountryStat]) -> Vec<SimpleRow> {
    stats
        .iter()
        .map(|stat| SimpleRow {
            marker: Some(stat.flag.clone().unwrap_or_else(|| "🏳".to_string())),
            ..SimpleRow::with_badge(
                stat.country_code.clone().unwrap_or_else(|| "UN".to_string()),
                stat.count,
            )
        })
        .collect()
}

/// Gender rows with a count badge.
#[must_use]
pub fn gender_rows(stats: &[GenderStat]) -> Vec<SimpleRow> {
    stats
        .iter()
        .map(|stat| SimpleRow::with_badge(format!("{}: {}", stat.gender, stat.count), stat.count))
        .collect()
}

/// Age rows; the count is already part of the text.
#[must_use]
pub fn age_rows(stats: &[AgeStat]) -> Vec<SimpleRow> {
    stats
        .iter()
        .map(|stat| SimpleRow::plain(format!("{}: {}", stat.age_group, stat.count)))
        .collect()
}

/// Domain rows with a request count badge.
#[must_use]
pub fn domain_rows(stats: &[DomainStat]) -> Vec<SimpleRow> {
    stats
        .iter()
        .map(|stat| {
            SimpleRow::with_badge(stat.domain.clone().unwrap_or_else(|| "-".into()), stat.count)
        })
        .collect()
}

/// Channel timeline rows; each row carries the user id for the block action.
#[must_use]
pub fn channel_rows(events: &[ChannelEvent]) -> Vec<SimpleRow> {
    events
        .iter()
        .map(|event| {
            let name = event
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .or_else(|| event.username.clone().map(|handle| format!("@{handle}")))
                .unwrap_or_else(|| format!("ID {}", event.user_id));
            let marker = match event.kind {
                ChannelEventKind::Join => "🟢",
                ChannelEventKind::Leave | ChannelEventKind::Other => "🔴",
            };
            let mut detail = format_timestamp(event.timestamp);
            if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
                detail.push_str(" • ");
                detail.push_str(description);
            }
            SimpleRow {
                marker: Some(marker.to_string()),
                text: name,
                detail: Some(detail),
                badge: None,
                user_id: Some(event.user_id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_query_parameters() {
        let settings = DashboardSettings::default();
        let mut query = CardQuery::from_settings(&settings);
        query.set_period(PeriodGroup::TopDownloaders, Period::Month);
        assert_eq!(
            card_paths(CardId::ActiveUsers, &query, &settings.limits),
            vec!["/api/active-users?limit=100&minutes=15"]
        );
        assert_eq!(
            card_paths(CardId::TopDownloaders, &query, &settings.limits),
            vec!["/api/top-downloaders?period=month&limit=100"]
        );
        assert_eq!(
            card_paths(CardId::PowerUsers, &query, &settings.limits),
            vec!["/api/power-users?min_urls=10&days=7&limit=50"]
        );
        assert_eq!(
            card_paths(CardId::ChannelEvents, &query, &settings.limits),
            vec!["/api/channel-events?hours=48&limit=200"]
        );
    }

    #[test]
    fn history_index_merges_two_sources() {
        let settings = DashboardSettings::default();
        let paths = card_paths(CardId::HistoryIndex, &CardQuery::default(), &settings.limits);
        assert_eq!(
            paths,
            vec![
                "/api/top-downloaders?period=all&limit=500",
                "/api/suspicious-users?period=all&limit=500"
            ]
        );
    }

    #[test]
    fn power_inputs_fall_back_per_field() {
        let fallback = PowerThresholds {
            min_urls: 10,
            days: 7,
        };
        let input = PowerFilterInput {
            min_urls: "25".into(),
            days: "abc".into(),
        };
        assert_eq!(
            input.thresholds(fallback),
            PowerThresholds {
                min_urls: 25,
                days: 7
            }
        );
        assert_eq!(PowerFilterInput::from_thresholds(fallback).thresholds(fallback), fallback);
    }

    #[test]
    fn enter_reloads_now_edits_debounce() {
        let settings = DashboardSettings::default();
        assert_eq!(
            power_reload(PowerInputEvent::Edited, &settings),
            PowerReload::Debounced(500)
        );
        assert_eq!(power_reload(PowerInputEvent::Submitted, &settings), PowerReload::Now);
    }

    #[test]
    fn locale_hook_refetches_primary_cards_by_default() {
        assert_eq!(on_locale_changed(LocaleChangePolicy::default()).len(), PRIMARY_CARDS.len());
        assert!(on_locale_changed(LocaleChangePolicy::RerenderOnly).is_empty());
    }

    #[test]
    fn aggregate_rows_use_placeholders() {
        let rows = country_rows(&[CountryStat {
            flag: None,
            country_code: None,
            count: 4,
        }]);
        assert_eq!(rows[0].rendered_text(), "🏳 UN 4");
        let rows = age_rows(&[AgeStat {
            age_group: "2020".into(),
            count: 9,
        }]);
        assert_eq!(rows[0].badge, None);
        let rows = domain_rows(&[DomainStat {
            domain: None,
            count: 1,
        }]);
        assert_eq!(rows[0].text, "-");
    }

    #[test]
    fn channel_rows_pick_display_name() {
        let rows = channel_rows(&[
            ChannelEvent {
                user_id: 5,
                kind: ChannelEventKind::Join,
                username: Some("neo".into()),
                timestamp: 0.0,
                ..ChannelEvent::default()
            },
            ChannelEvent {
                user_id: 6,
                kind: ChannelEventKind::Leave,
                timestamp: 0.0,
                description: Some("left via link".into()),
                ..ChannelEvent::default()
            },
        ]);
        assert_eq!(rows[0].text, "@neo");
        assert_eq!(rows[0].marker.as_deref(), Some("🟢"));
        assert_eq!(rows[1].text, "ID 6");
        assert_eq!(rows[1].detail.as_deref(), Some("1970-01-01 00:00 • left via link"));
        assert_eq!(rows[1].user_id, Some(6));
    }
}
