#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Botwatch statistics API.
//!
//! The dashboard treats every read endpoint as "JSON in, typed record out".
//! Fields the server may omit are optional or defaulted so a sparse payload
//! never fails to decode; only a payload of the wrong shape does.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ranking window accepted by the period-parametrised endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last 24 hours.
    #[default]
    Today,
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
    /// No lower bound.
    All,
}

impl Period {
    /// Every period in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Today, Self::Week, Self::Month, Self::All]
    }

    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }

    /// Parse a selector value; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|period| period.as_str() == value.trim())
    }

    /// Window length in seconds, `None` for [`Period::All`].
    #[must_use]
    pub const fn window_secs(self) -> Option<i64> {
        match self {
            Self::Today => Some(24 * 60 * 60),
            Self::Week => Some(7 * 24 * 60 * 60),
            Self::Month => Some(30 * 24 * 60 * 60),
            Self::All => None,
        }
    }
}

/// Scalar config value that the server may encode as a number or a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer value (ports, chat ids).
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Free text.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Per-download media metadata attached to active sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct MediaMetadata {
    /// Source domain as detected by the bot.
    pub domain: Option<String>,
    /// Expected payload size in bytes.
    pub total_bytes: Option<f64>,
    /// Size reported by the extractor when `total_bytes` is unknown.
    pub filesize: Option<f64>,
    /// Bytes transferred so far.
    pub downloaded_bytes: Option<f64>,
    /// Media duration in seconds.
    pub duration: Option<f64>,
    /// Resolution label (e.g. `1920x1080`).
    pub resolution: Option<String>,
    /// Quality label.
    pub quality: Option<String>,
    /// Container extension.
    pub ext: Option<String>,
    /// Transfer speed in bytes per second.
    pub speed: Option<f64>,
    /// Remaining seconds.
    pub eta: Option<f64>,
}

/// User-centric record shared by every ranked user list.
///
/// Each endpoint fills a different subset; absent fields stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct UserRecord {
    /// Telegram user id.
    pub user_id: i64,
    /// Public handle without the leading `@`.
    pub username: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Flag emoji derived from the user's language.
    pub flag: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// Gender heuristic label.
    pub gender: Option<String>,
    /// Active download progress in percent.
    pub progress: Option<f64>,
    /// URL of the current or last download.
    pub url: Option<String>,
    /// Title of the current or last download.
    pub title: Option<String>,
    /// Domain of the current or last download.
    pub domain: Option<String>,
    /// Media metadata for active sessions.
    pub metadata: Option<MediaMetadata>,
    /// Ranking counter (downloads, NSFW hits, playlists).
    pub count: Option<u64>,
    /// Download total used by the suspicious-users card.
    pub downloads: Option<u64>,
    /// Largest break between downloads, in seconds.
    pub max_gap_seconds: Option<f64>,
    /// Consecutive qualifying days for power users.
    pub streak: Option<u64>,
    /// Event timestamp (block time for banned users), unix seconds.
    pub timestamp: Option<f64>,
    /// First time the bot saw the user, unix seconds.
    pub first_seen_ts: Option<f64>,
    /// Last activity, unix seconds.
    pub last_event_ts: Option<f64>,
}

/// Active-users endpoint payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ActiveUsersResponse {
    /// Number of sessions in the window (may exceed `items.len()`).
    pub total: u64,
    /// Most recent sessions.
    pub items: Vec<UserRecord>,
}

/// Country ranking row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CountryStat {
    /// Flag emoji.
    pub flag: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// Number of users.
    pub count: u64,
}

/// Gender bucket row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GenderStat {
    /// Bucket label.
    pub gender: String,
    /// Number of users.
    pub count: u64,
}

/// Registration-age bucket row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AgeStat {
    /// Bucket label.
    pub age_group: String,
    /// Number of users.
    pub count: u64,
}

/// Domain ranking row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DomainStat {
    /// Domain name.
    pub domain: Option<String>,
    /// Number of requests.
    pub count: u64,
}

/// Join/leave classification for log-channel events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelEventKind {
    /// User joined the channel.
    Join,
    /// User left the channel.
    Leave,
    /// Anything else the server may add later.
    #[default]
    #[serde(other)]
    Other,
}

/// Log-channel membership event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChannelEvent {
    /// Telegram user id.
    pub user_id: i64,
    /// Event classification.
    #[serde(rename = "type")]
    pub kind: ChannelEventKind,
    /// Display name.
    pub name: Option<String>,
    /// Public handle.
    pub username: Option<String>,
    /// Event time, unix seconds.
    pub timestamp: f64,
    /// Free-form description.
    pub description: Option<String>,
}

/// One entry of a user's download history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct HistoryEntry {
    /// Request time, unix seconds.
    pub timestamp: f64,
    /// Requested URL.
    pub url: Option<String>,
    /// Media title.
    pub title: Option<String>,
    /// Source domain.
    pub domain: Option<String>,
    /// Whether the request was classified as NSFW.
    pub is_nsfw: bool,
    /// Whether the request was a playlist.
    pub is_playlist: bool,
}

/// Uptime split into calendar units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Uptime {
    /// Whole days.
    pub days: u64,
    /// Remaining hours.
    pub hours: u64,
    /// Remaining minutes.
    pub minutes: u64,
}

/// Countdown to the next cache reload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NextReload {
    /// Seconds until reload.
    pub seconds: u64,
}

/// Used/total capacity pair in gigabytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CapacityUsage {
    /// Used gigabytes.
    pub used_gb: f64,
    /// Total gigabytes.
    pub total_gb: f64,
    /// Used percentage.
    pub percent: f64,
}

/// Network counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct NetworkStats {
    /// Megabytes sent since boot.
    pub bytes_sent_mb: f64,
    /// Megabytes received since boot.
    pub bytes_recv_mb: f64,
    /// Current send speed in Mbps.
    pub speed_sent_mbps: f64,
    /// Current receive speed in Mbps.
    pub speed_recv_mbps: f64,
}

/// External address as reported by the host; older servers send a bare string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExternalIp {
    /// Single IPv4 address string.
    Plain(String),
    /// Dual-stack addresses.
    Dual {
        /// IPv4 address.
        #[serde(default)]
        ipv4: Option<String>,
        /// IPv6 address.
        #[serde(default)]
        ipv6: Option<String>,
    },
}

impl ExternalIp {
    /// IPv4 address when known.
    #[must_use]
    pub fn ipv4(&self) -> Option<&str> {
        match self {
            Self::Plain(value) => Some(value.as_str()),
            Self::Dual { ipv4, .. } => ipv4.as_deref(),
        }
    }

    /// IPv6 address when known.
    #[must_use]
    pub fn ipv6(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Dual { ipv6, .. } => ipv6.as_deref(),
        }
    }
}

/// Host metrics for the system tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SystemMetrics {
    /// Service status label.
    pub status: Option<String>,
    /// Service uptime.
    pub uptime: Uptime,
    /// Next cache reload countdown.
    pub next_reload: Option<NextReload>,
    /// CPU load percentage.
    pub cpu_percent: f64,
    /// Memory usage.
    pub memory: Option<CapacityUsage>,
    /// Disk usage.
    pub disk: Option<CapacityUsage>,
    /// Network counters.
    pub network: Option<NetworkStats>,
    /// External addresses.
    pub external_ip: Option<ExternalIp>,
    /// Collector failure reported by the server in a 200 response.
    pub error: Option<String>,
}

/// Installed engine package versions keyed by package name.
pub type PackageVersions = BTreeMap<String, String>;

/// Proxy credentials block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProxySettings {
    /// Proxy scheme.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Proxy host.
    pub ip: Option<String>,
    /// Proxy port.
    pub port: Option<Scalar>,
    /// Proxy user.
    pub user: Option<String>,
    /// Proxy password.
    pub password: Option<String>,
}

/// YouTube cookie rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct YoutubeCookies {
    /// Rotation strategy.
    pub order: Option<String>,
    /// URL used to validate cookies.
    pub test_url: Option<String>,
    /// Fallback cookie URL.
    pub cookie_url: Option<String>,
    /// PO token provider base URL.
    pub pot_base_url: Option<String>,
    /// Cookie source URLs in slot order.
    pub list: Vec<Option<Scalar>>,
}

/// Dashboard credential block (the password is never sent back).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DashboardAuth {
    /// Login name.
    pub username: Option<String>,
}

/// Telegram channel ids used for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LogChannels {
    /// General log channel.
    pub logs_id: Option<Scalar>,
    /// Video log channel.
    pub logs_video_id: Option<Scalar>,
    /// NSFW log channel.
    pub logs_nsfw_id: Option<Scalar>,
    /// Image log channel.
    pub logs_img_id: Option<Scalar>,
    /// Paid media log channel.
    pub logs_paid_id: Option<Scalar>,
    /// Exception log channel.
    pub log_exception: Option<Scalar>,
    /// Channel users must subscribe to.
    pub subscribe_channel: Option<Scalar>,
}

/// Editable bot configuration snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ConfigSnapshot {
    /// Primary proxy.
    pub proxy: Option<ProxySettings>,
    /// Secondary proxy.
    pub proxy_2: Option<ProxySettings>,
    /// Proxy selection strategy.
    pub proxy_select: Option<String>,
    /// Per-service cookie URLs keyed by service name.
    pub cookies: Option<BTreeMap<String, Option<String>>>,
    /// YouTube cookie settings.
    pub youtube_cookies: Option<YoutubeCookies>,
    /// Group chats allowed to use the bot.
    pub allowed_groups: Vec<Scalar>,
    /// Administrator user ids.
    pub admins: Vec<Scalar>,
    /// Telegram mini app URL.
    pub miniapp_url: Option<String>,
    /// Invite link shown to unsubscribed users.
    pub subscribe_channel_url: Option<String>,
    /// Dashboard credentials.
    pub dashboard: Option<DashboardAuth>,
    /// Logging channels.
    pub channels: Option<LogChannels>,
}

/// Line counts of the filter list files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ListsStats {
    /// Lines in `porn_domains.txt`.
    pub porn_domains: u64,
    /// Lines in `porn_keywords.txt`.
    pub porn_keywords: u64,
    /// Lines in `supported_sites.txt`.
    pub supported_sites: u64,
}

/// Editable domain lists keyed by list name.
pub type DomainLists = BTreeMap<String, Vec<String>>;

/// Body of `block-user` / `unblock-user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserActionRequest {
    /// Target user id.
    pub user_id: i64,
    /// Optional moderation reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body of `update-config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigUpdateRequest {
    /// Config key (e.g. `PROXY_PORT`).
    pub key: String,
    /// Coerced value.
    pub value: serde_json::Value,
}

/// Body of `update-domain-list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainListUpdateRequest {
    /// List identifier.
    pub list_name: String,
    /// Full replacement content.
    pub items: Vec<String>,
}

/// Generic write-endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ActionResponse {
    /// `ok` on success.
    pub status: Option<String>,
    /// Human readable outcome.
    pub message: Option<String>,
    /// New IPv4 after an IP rotation.
    pub ipv4: Option<String>,
    /// New IPv6 after an IP rotation.
    pub ipv6: Option<String>,
}

impl ActionResponse {
    /// Whether the server reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_user_record_decodes() {
        let record: UserRecord =
            serde_json::from_value(json!({"user_id": 42, "count": 7})).expect("decode");
        assert_eq!(record.user_id, 42);
        assert_eq!(record.count, Some(7));
        assert!(record.username.is_none());
        assert!(record.metadata.is_none());
    }

    #[test]
    fn active_users_tolerates_missing_items() {
        let payload: ActiveUsersResponse =
            serde_json::from_value(json!({"total": 3})).expect("decode");
        assert_eq!(payload.total, 3);
        assert!(payload.items.is_empty());
    }

    #[test]
    fn channel_event_kind_maps_unknown_values() {
        let events: Vec<ChannelEvent> = serde_json::from_value(json!([
            {"user_id": 1, "type": "join", "timestamp": 10.0},
            {"user_id": 2, "type": "kick", "timestamp": 11.0}
        ]))
        .expect("decode");
        assert_eq!(events[0].kind, ChannelEventKind::Join);
        assert_eq!(events[1].kind, ChannelEventKind::Other);
    }

    #[test]
    fn external_ip_accepts_both_shapes() {
        let plain: ExternalIp = serde_json::from_value(json!("1.2.3.4")).expect("plain");
        assert_eq!(plain.ipv4(), Some("1.2.3.4"));
        assert_eq!(plain.ipv6(), None);
        let dual: ExternalIp =
            serde_json::from_value(json!({"ipv4": "1.2.3.4", "ipv6": "::1"})).expect("dual");
        assert_eq!(dual.ipv6(), Some("::1"));
    }

    #[test]
    fn config_snapshot_reads_mixed_scalars() {
        let snapshot: ConfigSnapshot = serde_json::from_value(json!({
            "proxy": {"type": "socks5", "port": 1080},
            "admins": [1, "2"],
            "channels": {"logs_id": -1001}
        }))
        .expect("decode");
        let proxy = snapshot.proxy.expect("proxy");
        assert_eq!(proxy.port.map(|p| p.to_string()).as_deref(), Some("1080"));
        assert_eq!(snapshot.admins.len(), 2);
        assert_eq!(snapshot.admins[1].to_string(), "2");
        let channels = snapshot.channels.expect("channels");
        assert_eq!(channels.logs_id, Some(Scalar::Int(-1001)));
    }

    #[test]
    fn period_round_trips_through_selector_values() {
        assert_eq!(Period::parse("week"), Some(Period::Week));
        assert_eq!(Period::parse("decade"), None);
        assert_eq!(Period::All.window_secs(), None);
        assert_eq!(Period::Today.window_secs(), Some(86_400));
    }

    #[test]
    fn action_response_reports_status() {
        let ok: ActionResponse = serde_json::from_value(json!({"status": "ok"})).expect("ok");
        assert!(ok.is_ok());
        assert!(!ActionResponse::default().is_ok());
    }

    #[test]
    fn user_action_request_omits_empty_reason() {
        let body = serde_json::to_value(UserActionRequest {
            user_id: 5,
            reason: None,
        })
        .expect("encode");
        assert_eq!(body, json!({"user_id": 5}));
    }
}
