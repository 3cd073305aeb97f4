//! Host metrics and package version rows.

use crate::core::format::format_duration;
use crate::i18n::TranslationBundle;
use botwatch_api_models::{CapacityUsage, PackageVersions, SystemMetrics};

/// One label/value line of the metrics panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricRow {
    /// Label translation key.
    pub label_key: &'static str,
    /// Rendered value.
    pub value: String,
}

fn row(label_key: &'static str, value: String) -> MetricRow {
    MetricRow { label_key, value }
}

fn usage(usage: &CapacityUsage, bundle: &TranslationBundle) -> String {
    bundle.format(
        "system.usage_value",
        &[
            ("used", &format!("{:.1}", usage.used_gb)),
            ("total", &format!("{:.1}", usage.total_gb)),
            ("percent", &format!("{:.1}", usage.percent)),
        ],
    )
}

/// Metrics panel rows; sections the host did not report are skipped.
///
/// # Errors
///
/// Returns the server-reported error, which replaces the whole panel.
pub fn metric_rows(
    metrics: &SystemMetrics,
    bundle: &TranslationBundle,
) -> Result<Vec<MetricRow>, String> {
    if let Some(error) = &metrics.error {
        return Err(error.clone());
    }
    let unknown = || bundle.text("misc.unknown");
    let mut rows = vec![
        row(
            "system.status",
            metrics.status.clone().unwrap_or_else(unknown),
        ),
        row(
            "system.uptime",
            bundle.format(
                "system.uptime_value",
                &[
                    ("days", &metrics.uptime.days),
                    ("hours", &metrics.uptime.hours),
                    ("minutes", &metrics.uptime.minutes),
                ],
            ),
        ),
    ];
    if let Some(reload) = metrics.next_reload {
        rows.push(row(
            "system.next_reload",
            format_duration(Some(reload.seconds as f64), bundle),
        ));
    }
    rows.push(row("system.cpu", format!("{:.1}%", metrics.cpu_percent)));
    if let Some(memory) = &metrics.memory {
        rows.push(row("system.memory", usage(memory, bundle)));
    }
    if let Some(disk) = &metrics.disk {
        rows.push(row("system.disk", usage(disk, bundle)));
    }
    if let Some(network) = &metrics.network {
        let traffic = |total: f64, speed: f64| {
            bundle.format(
                "system.traffic_value",
                &[
                    ("total", &format!("{total:.1}")),
                    ("speed", &format!("{speed:.2}")),
                ],
            )
        };
        rows.push(row(
            "system.network_sent",
            traffic(network.bytes_sent_mb, network.speed_sent_mbps),
        ));
        rows.push(row(
            "system.network_received",
            traffic(network.bytes_recv_mb, network.speed_recv_mbps),
        ));
    }
    let ip = metrics.external_ip.as_ref();
    rows.push(row(
        "system.ipv4",
        ip.and_then(|ip| ip.ipv4()).map_or_else(unknown, ToString::to_string),
    ));
    rows.push(row(
        "system.ipv6",
        ip.and_then(|ip| ip.ipv6()).map_or_else(unknown, ToString::to_string),
    ));
    Ok(rows)
}

/// Package versions sorted by package name.
#[must_use]
pub fn version_rows(versions: &PackageVersions) -> Vec<(&str, &str)> {
    versions
        .iter()
        .map(|(name, version)| (name.as_str(), version.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use botwatch_api_models::{ExternalIp, NextReload, Uptime};

    #[test]
    fn rows_cover_reported_sections_only() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let metrics = SystemMetrics {
            status: Some("running".into()),
            uptime: Uptime {
                days: 2,
                hours: 3,
                minutes: 4,
            },
            next_reload: Some(NextReload { seconds: 3900 }),
            cpu_percent: 12.345,
            memory: Some(CapacityUsage {
                used_gb: 1.0,
                total_gb: 4.0,
                percent: 25.0,
            }),
            external_ip: Some(ExternalIp::Plain("5.6.7.8".into())),
            ..SystemMetrics::default()
        };
        let rows = metric_rows(&metrics, &bundle).expect("rows");
        let get = |key: &str| rows.iter().find(|r| r.label_key == key).map(|r| r.value.as_str());
        assert_eq!(get("system.uptime"), Some("2d 3h 4m"));
        assert_eq!(get("system.next_reload"), Some("1h 5m"));
        assert_eq!(get("system.cpu"), Some("12.3%"));
        assert_eq!(get("system.memory"), Some("1.0 / 4.0 GB (25.0%)"));
        assert_eq!(get("system.disk"), None);
        assert_eq!(get("system.ipv4"), Some("5.6.7.8"));
        assert_eq!(get("system.ipv6"), Some("unknown"));
    }

    #[test]
    fn server_error_replaces_the_panel() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let metrics = SystemMetrics {
            error: Some("psutil unavailable".into()),
            ..SystemMetrics::default()
        };
        assert_eq!(metric_rows(&metrics, &bundle), Err("psutil unavailable".into()));
    }
}
