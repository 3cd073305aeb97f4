//! Display formatting for timestamps, sizes, durations and links.

use crate::i18n::TranslationBundle;
use chrono::{DateTime, Utc};
use url::Url;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Default width used by [`truncate`] in list rows.
pub const ROW_TEXT_LIMIT: usize = 42;

/// Localized "N min ago" label for a unix timestamp relative to `now_secs`.
#[must_use]
pub fn relative_time(ts: Option<f64>, now_secs: f64, bundle: &TranslationBundle) -> String {
    let Some(ts) = ts.filter(|ts| *ts > 0.0) else {
        return String::new();
    };
    let minutes = ((now_secs - ts) / 60.0).floor().max(0.0) as u64;
    if minutes < 1 {
        return bundle.text("time.just_now");
    }
    if minutes < 60 {
        return bundle.format("time.minutes", &[("value", &minutes)]);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return bundle.format("time.hours", &[("value", &hours)]);
    }
    bundle.format("time.days", &[("value", &(hours / 24))])
}

/// Human readable byte size (`1.5 MB`), or the localized "unknown".
#[must_use]
pub fn format_bytes(bytes: Option<f64>, bundle: &TranslationBundle) -> String {
    let Some(bytes) = bytes.filter(|b| b.is_finite() && *b >= 0.0) else {
        return bundle.text("misc.unknown");
    };
    if bytes < 1.0 {
        return "0 B".to_string();
    }
    let idx = (bytes.ln() / 1024_f64.ln()).floor().clamp(0.0, 4.0) as usize;
    let value = bytes / 1024_f64.powi(idx as i32);
    if value >= 10.0 {
        format!("{value:.0} {}", BYTE_UNITS[idx])
    } else {
        format!("{value:.1} {}", BYTE_UNITS[idx])
    }
}

/// Transfer speed as `<size>/s`; zero or missing reads as "unknown".
#[must_use]
pub fn format_speed(bytes_per_second: Option<f64>, bundle: &TranslationBundle) -> String {
    match bytes_per_second.filter(|speed| *speed > 0.0) {
        Some(speed) => format!("{}/s", format_bytes(Some(speed), bundle)),
        None => bundle.text("misc.unknown"),
    }
}

/// Media duration as `1h 5m` or `4m 20s`.
#[must_use]
pub fn format_duration(seconds: Option<f64>, bundle: &TranslationBundle) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return bundle.text("misc.unknown");
    };
    let secs = seconds.floor().max(0.0) as u64;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m {}s", secs % 60)
    }
}

/// Compact gap label (`45s`, `12m`, `3h 5m`, `2d 4h`).
#[must_use]
pub fn format_gap(seconds: Option<f64>, bundle: &TranslationBundle) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return bundle.text("misc.unknown");
    };
    let secs = seconds.round().max(0.0) as u64;
    if secs < 60 {
        return format!("{secs}s");
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return match minutes % 60 {
            0 => format!("{hours}h"),
            mins => format!("{hours}h {mins}m"),
        };
    }
    match hours % 24 {
        0 => format!("{}d", hours / 24),
        rem => format!("{}d {rem}h", hours / 24),
    }
}

/// Cut `text` to `limit` characters, ending with an ellipsis when shortened.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut out: String = text.chars().take(limit.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        text.to_string()
    }
}

/// Host plus path of a URL; unparseable input is truncated instead.
#[must_use]
pub fn prettify_url(raw: Option<&str>, bundle: &TranslationBundle) -> String {
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        return bundle.text("misc.no_url");
    };
    match Url::parse(raw) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            match parsed.path() {
                "/" | "" => host.to_string(),
                path => format!("{host}{path}"),
            }
        }
        Err(_) => truncate(raw, 32),
    }
}

/// `YYYY-MM-DD HH:MM` (UTC) for a unix timestamp.
#[must_use]
pub fn format_timestamp(ts: f64) -> String {
    DateTime::<Utc>::from_timestamp(ts.floor() as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// `@handle • ID: 42` style user subtitle.
#[must_use]
pub fn user_meta(username: Option<&str>, user_id: i64, bundle: &TranslationBundle) -> String {
    let handle = username
        .filter(|name| !name.is_empty())
        .map_or_else(|| bundle.text("meta.no_username"), |name| format!("@{name}"));
    format!("{handle} • {}: {user_id}", bundle.text("meta.id_label"))
}
