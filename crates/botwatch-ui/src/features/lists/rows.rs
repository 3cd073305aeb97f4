//! Per-template rendering data for user rows.

use super::state::RowTemplate;
use crate::core::format::{
    ROW_TEXT_LIMIT, format_gap, format_timestamp, prettify_url, relative_time, truncate, user_meta,
};
use crate::features::history::state::display_name;
use crate::features::system::actions::ModerationAction;
use crate::i18n::TranslationBundle;
use botwatch_api_models::UserRecord;

/// Right-hand side of a user row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowTrailing {
    /// Nothing.
    None,
    /// Count badge.
    Badge(String),
    /// Download progress in percent, clamped to `0..=100`.
    Progress(f64),
    /// Muted text (last seen, block date).
    Note(String),
}

/// Everything a list row shows for one user.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRowView {
    /// Country flag, when known.
    pub flag: Option<String>,
    /// Display name.
    pub title: String,
    /// `@handle • ID: n` line.
    pub meta: String,
    /// Template-specific secondary line.
    pub detail: Option<String>,
    /// Right-hand side.
    pub trailing: RowTrailing,
    /// Moderation button shown on the row.
    pub moderation: ModerationAction,
    /// Whether the row offers the media details modal.
    pub has_media: bool,
}

/// Build the row for `user` in `template`.
#[must_use]
pub fn user_row(
    user: &UserRecord,
    template: RowTemplate,
    now_secs: f64,
    bundle: &TranslationBundle,
) -> UserRowView {
    let mut row = UserRowView {
        flag: user.flag.clone().filter(|flag| !flag.is_empty()),
        title: truncate(&display_name(user), ROW_TEXT_LIMIT),
        meta: user_meta(user.username.as_deref(), user.user_id, bundle),
        detail: None,
        trailing: RowTrailing::None,
        moderation: ModerationAction::Block,
        has_media: false,
    };
    match template {
        RowTemplate::Active => {
            let link = user
                .title
                .as_deref()
                .filter(|title| !title.is_empty())
                .map_or_else(|| prettify_url(user.url.as_deref(), bundle), str::to_string);
            row.detail = Some(truncate(&link, ROW_TEXT_LIMIT));
            row.has_media = true;
            row.trailing = match user.progress {
                Some(progress) if progress.is_finite() => {
                    RowTrailing::Progress(progress.clamp(0.0, 100.0))
                }
                _ => RowTrailing::Note(relative_time(user.last_event_ts, now_secs, bundle)),
            };
        }
        RowTemplate::Ranked => {
            row.trailing = RowTrailing::Badge(user.count.unwrap_or_default().to_string());
        }
        RowTemplate::Suspicious => {
            row.detail = Some(bundle.format(
                "labels.max_gap",
                &[("value", &format_gap(user.max_gap_seconds, bundle))],
            ));
            let downloads = user.downloads.or(user.count).unwrap_or_default();
            row.trailing =
                RowTrailing::Badge(bundle.format("labels.downloads", &[("value", &downloads)]));
        }
        RowTemplate::Streak => {
            let streak = user.streak.unwrap_or_default();
            row.trailing =
                RowTrailing::Badge(bundle.format("labels.streak", &[("value", &streak)]));
        }
        RowTemplate::Blocked => {
            row.moderation = ModerationAction::Unblock;
            row.trailing = user
                .timestamp
                .filter(|ts| *ts > 0.0)
                .map_or(RowTrailing::None, |ts| RowTrailing::Note(format_timestamp(ts)));
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    fn en() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::En)
    }

    #[test]
    fn active_row_prefers_progress_over_last_seen() {
        let bundle = en();
        let mut user = UserRecord {
            user_id: 7,
            name: Some("Ana".into()),
            url: Some("https://youtube.com/watch".into()),
            progress: Some(140.0),
            last_event_ts: Some(1_000.0),
            ..UserRecord::default()
        };
        let row = user_row(&user, RowTemplate::Active, 1_600.0, &bundle);
        assert_eq!(row.trailing, RowTrailing::Progress(100.0));
        assert_eq!(row.detail.as_deref(), Some("youtube.com/watch"));
        assert!(row.has_media);

        user.progress = None;
        let row = user_row(&user, RowTemplate::Active, 1_600.0, &bundle);
        assert_eq!(row.trailing, RowTrailing::Note("10 min ago".into()));
    }

    #[test]
    fn blocked_row_offers_unblock() {
        let user = UserRecord {
            user_id: 3,
            timestamp: Some(0.0),
            ..UserRecord::default()
        };
        let row = user_row(&user, RowTemplate::Blocked, 0.0, &en());
        assert_eq!(row.moderation, ModerationAction::Unblock);
        assert_eq!(row.trailing, RowTrailing::None);
        assert_eq!(row.title, "User 3");
    }

    #[test]
    fn suspicious_row_shows_gap_and_total() {
        let user = UserRecord {
            user_id: 9,
            downloads: Some(52),
            max_gap_seconds: Some(90.0),
            ..UserRecord::default()
        };
        let row = user_row(&user, RowTemplate::Suspicious, 0.0, &en());
        assert_eq!(row.detail.as_deref(), Some("Break: 1m"));
        assert_eq!(row.trailing, RowTrailing::Badge("52 downloads".into()));
        assert_eq!(row.moderation, ModerationAction::Block);
    }
}
