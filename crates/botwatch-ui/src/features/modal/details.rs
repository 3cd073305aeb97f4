//! Label/value rows for the user and media detail modals.

use crate::core::format::{
    format_bytes, format_duration, format_speed, format_timestamp, prettify_url,
};
use crate::i18n::TranslationBundle;
use botwatch_api_models::UserRecord;

/// Value cell of a detail row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailValue {
    /// Plain text.
    Text(String),
    /// External link.
    Link {
        /// Target URL.
        href: String,
        /// Link text.
        text: String,
    },
}

/// One `label: value` row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    /// Translation key of the label.
    pub label_key: &'static str,
    /// Rendered value.
    pub value: DetailValue,
}

impl DetailRow {
    fn text(label_key: &'static str, value: impl Into<String>) -> Self {
        Self {
            label_key,
            value: DetailValue::Text(value.into()),
        }
    }
}

fn percent(progress: Option<f64>) -> Option<String> {
    progress.map(|value| format!("{:.1}%", value.clamp(0.0, 100.0)))
}

/// Profile rows; unknown values read as the localized "unknown".
#[must_use]
pub fn user_detail_rows(user: &UserRecord, bundle: &TranslationBundle) -> Vec<DetailRow> {
    let unknown = || bundle.text("misc.unknown");
    let username = match user.username.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => DetailRow {
            label_key: "labels.username",
            value: DetailValue::Link {
                href: format!("https://t.me/{name}"),
                text: format!("@{name}"),
            },
        },
        None => DetailRow::text("labels.username", bundle.text("meta.no_username")),
    };
    let country = user.flag.as_deref().map_or_else(unknown, |flag| {
        format!("{flag} {}", user.country_code.as_deref().unwrap_or_default())
            .trim_end()
            .to_string()
    });
    vec![
        username,
        DetailRow::text("labels.user_id", user.user_id.to_string()),
        DetailRow::text("labels.country", country),
        DetailRow::text("labels.gender", user.gender.clone().unwrap_or_else(unknown)),
        DetailRow::text(
            "labels.age",
            user.first_seen_ts.map_or_else(unknown, format_timestamp),
        ),
        DetailRow::text("labels.progress", percent(user.progress).unwrap_or_else(unknown)),
        DetailRow::text(
            "labels.last_event",
            user.last_event_ts.map_or_else(unknown, format_timestamp),
        ),
    ]
}

/// Media rows; rows without a value are omitted.
#[must_use]
pub fn media_detail_rows(user: &UserRecord, bundle: &TranslationBundle) -> Vec<DetailRow> {
    let metadata = user.metadata.clone().unwrap_or_default();
    let url = user.url.as_deref().filter(|url| !url.is_empty());
    let total = metadata
        .total_bytes
        .or(metadata.filesize)
        .filter(|bytes| *bytes > 0.0);
    let positive = |value: Option<f64>| value.filter(|v| *v > 0.0);
    let mut rows = Vec::new();
    if let Some(url) = url {
        rows.push(DetailRow {
            label_key: "labels.url",
            value: DetailValue::Link {
                href: url.to_string(),
                text: prettify_url(Some(url), bundle),
            },
        });
    }
    if let Some(domain) = metadata
        .domain
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| url.map(|url| prettify_url(Some(url), bundle)))
    {
        rows.push(DetailRow::text("labels.domain", domain));
    }
    if let Some(progress) = percent(user.progress) {
        rows.push(DetailRow::text("labels.progress", progress));
    }
    if let Some(total) = total {
        rows.push(DetailRow::text("labels.size", format_bytes(Some(total), bundle)));
    }
    if let Some(done) = positive(metadata.downloaded_bytes) {
        let mut value = format_bytes(Some(done), bundle);
        if let Some(total) = total {
            value.push_str(" / ");
            value.push_str(&format_bytes(Some(total), bundle));
        }
        rows.push(DetailRow::text("labels.downloaded", value));
    }
    if let Some(duration) = positive(metadata.duration) {
        rows.push(DetailRow::text("labels.duration", format_duration(Some(duration), bundle)));
    }
    for (key, value) in [
        ("labels.resolution", metadata.resolution),
        ("labels.quality", metadata.quality),
        ("labels.format", metadata.ext),
    ] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            rows.push(DetailRow::text(key, value));
        }
    }
    if let Some(speed) = positive(metadata.speed) {
        rows.push(DetailRow::text("labels.speed", format_speed(Some(speed), bundle)));
    }
    if let Some(eta) = positive(metadata.eta) {
        rows.push(DetailRow::text("labels.eta", format_duration(Some(eta), bundle)));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use botwatch_api_models::MediaMetadata;

    #[test]
    fn user_rows_fill_unknowns() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let rows = user_detail_rows(
            &UserRecord {
                user_id: 9,
                ..UserRecord::default()
            },
            &bundle,
        );
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].value, DetailValue::Text("no username".into()));
        assert_eq!(rows[2].value, DetailValue::Text("unknown".into()));
    }

    #[test]
    fn media_rows_drop_missing_values() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert!(media_detail_rows(&UserRecord::default(), &bundle).is_empty());
        let user = UserRecord {
            url: Some("https://youtube.com/watch?v=1".into()),
            progress: Some(42.0),
            metadata: Some(MediaMetadata {
                filesize: Some(2048.0),
                downloaded_bytes: Some(1024.0),
                ext: Some("mp4".into()),
                ..MediaMetadata::default()
            }),
            ..UserRecord::default()
        };
        let rows = media_detail_rows(&user, &bundle);
        let keys: Vec<&str> = rows.iter().map(|row| row.label_key).collect();
        assert_eq!(
            keys,
            vec![
                "labels.url",
                "labels.domain",
                "labels.progress",
                "labels.size",
                "labels.downloaded",
                "labels.format"
            ]
        );
        assert_eq!(rows[4].value, DetailValue::Text("1.0 KB / 2.0 KB".into()));
    }
}
